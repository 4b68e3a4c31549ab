//! The `touchstart` entry point.
//!
//! Wire [`guard`] (or a [`ScrollGuard`] of your own) as a `touchstart`
//! listener on a root container. Elements that scroll on their own must carry
//! the configured marker class.

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsCast;
use web_sys::{Element, TouchEvent};

use crate::config::GuardConfig;
use crate::dom::first_touch_y;
use crate::gesture::{GestureState, MoveVerdict, find_scrollable};
use crate::keyboard::dismiss_keyboard_if_needed;
use crate::subscription::GestureSubscription;
use crate::util::clog;

pub struct ScrollGuard {
    marker: String,
    always_prevent: Cell<bool>,
    active: RefCell<Option<GestureSubscription>>,
}

impl Default for ScrollGuard {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}

impl ScrollGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self {
            marker: config.scrollable_class,
            always_prevent: Cell::new(config.always_prevent_pull_to_refresh),
            active: RefCell::new(None),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn always_prevent(&self) -> bool {
        self.always_prevent.get()
    }

    /// Applies to gestures started after the call.
    pub fn set_always_prevent(&self, on: bool) {
        self.always_prevent.set(on);
    }

    pub fn has_active_gesture(&self) -> bool {
        self.active
            .borrow()
            .as_ref()
            .is_some_and(|s| !s.is_released())
    }

    /// Drops the current gesture subscription, removing its listeners.
    ///
    /// Must not be called from inside a gesture's own move/end handler.
    pub fn cancel(&self) {
        let stale = self.active.borrow_mut().take();
        drop(stale);
    }

    pub fn handle_touch_start(&self, e: &TouchEvent) {
        // A gesture that never saw touchend is dropped here.
        self.cancel();

        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let body_el: &Element = body.as_ref();
        let scrollable = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|start| find_scrollable(start, body_el, &self.marker));

        let state = GestureState::begin(scrollable.as_ref(), first_touch_y(e));
        clog(&format!(
            "scroll-guard: start v={} h={} from_top={}",
            state.has_vertical_scroll, state.has_horizontal_scroll, state.scroll_started_from_top
        ));

        let always_prevent = self.always_prevent.get();
        let sub = GestureSubscription::attach(body, move |ev: TouchEvent| {
            if state.on_move(first_touch_y(&ev), always_prevent) == MoveVerdict::Suppress {
                ev.prevent_default();
                ev.stop_propagation();
                dismiss_keyboard_if_needed();
                clog("scroll-guard: touchmove suppressed");
            }
        });
        *self.active.borrow_mut() = Some(sub);
    }
}

thread_local! {
    static DEFAULT_GUARD: ScrollGuard = ScrollGuard::default();
}

/// Handles one `touchstart` with the default marker class.
pub fn guard(event: &TouchEvent, always_prevent_pull_to_refresh: bool) {
    DEFAULT_GUARD.with(|g| {
        g.set_always_prevent(always_prevent_pull_to_refresh);
        g.handle_touch_start(event);
    });
}

/// Releases the default guard's in-flight gesture, if any.
pub fn cancel() {
    DEFAULT_GUARD.with(ScrollGuard::cancel);
}
