//! Touch-scroll workaround for iOS Safari.
//!
//! On `touchstart` the guard finds the nearest ancestor marked as scrollable,
//! pulls it one pixel off an exact scroll edge so iOS keeps the gesture inside
//! it, and for the rest of the gesture cancels moves that would turn into
//! pull-to-refresh.

pub mod config;
pub mod dom;
pub mod gesture;
pub mod guard;
pub mod keyboard;
pub mod subscription;
pub mod util;

pub use config::{DEFAULT_SCROLLABLE_CLASS, GuardConfig};
pub use gesture::{GestureState, MoveVerdict, ScrollBox, ScrollNode, find_scrollable};
pub use guard::{ScrollGuard, cancel, guard};
pub use keyboard::dismiss_keyboard_if_needed;
pub use subscription::GestureSubscription;
