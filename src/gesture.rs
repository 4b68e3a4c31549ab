//! Gesture policy for the iOS scroll workaround.
//!
//! Everything here works against the [`ScrollNode`] / [`ScrollBox`] traits so
//! the decision logic runs without a browser. The DOM implementations live in
//! `dom.rs`.

/// Scroll geometry of an element, in CSS pixels.
pub trait ScrollBox {
    fn scroll_top(&self) -> i32;
    fn set_scroll_top(&self, value: i32);
    fn scroll_left(&self) -> i32;
    fn set_scroll_left(&self, value: i32);
    fn scroll_height(&self) -> i32;
    fn client_height(&self) -> i32;
    fn scroll_width(&self) -> i32;
    fn client_width(&self) -> i32;
}

/// A node in the ancestor chain of a touch target.
pub trait ScrollNode: Sized {
    fn parent(&self) -> Option<Self>;
    fn has_class(&self, marker: &str) -> bool;
    fn is_same(&self, other: &Self) -> bool;
}

/// Walks from `start` up to (not including) `body` and returns the nearest
/// node carrying `marker`.
pub fn find_scrollable<N: ScrollNode>(start: N, body: &N, marker: &str) -> Option<N> {
    let mut probe = Some(start);
    while let Some(node) = probe {
        if node.is_same(body) {
            return None;
        }
        if node.has_class(marker) {
            return Some(node);
        }
        probe = node.parent();
    }
    None
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveVerdict {
    /// Let the browser handle the move natively.
    Pass,
    /// Cancel the default action and stop propagation.
    Suppress,
}

/// Per-gesture state, from `touchstart` to the matching `touchend`.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub start_y: f64,
    pub scroll_started_from_top: bool,
    pub has_vertical_scroll: bool,
    pub has_horizontal_scroll: bool,
}

// Offset to move to so the element is no longer pinned at an extreme.
fn edge_nudge(offset: i32, max: i32) -> Option<i32> {
    if offset == 0 {
        Some(1)
    } else if offset == max {
        Some(max - 1)
    } else {
        None
    }
}

impl GestureState {
    /// Classifies `target` and pulls it one pixel off an exact scroll edge.
    ///
    /// `touch_y` is the client Y of the first touch point, if the event had one.
    pub fn begin<B: ScrollBox>(target: Option<&B>, touch_y: Option<f64>) -> Self {
        let mut state = GestureState::default();
        let Some(el) = target else {
            return state;
        };
        state.has_vertical_scroll = el.scroll_height() > el.client_height();
        state.has_horizontal_scroll = el.scroll_width() > el.client_width();

        if state.has_vertical_scroll {
            let offset = el.scroll_top();
            let max = el.scroll_height() - el.client_height();
            if let Some(next) = edge_nudge(offset, max) {
                if offset == 0 {
                    // Without a touch point there is no start Y to compare against.
                    if let Some(y) = touch_y {
                        state.start_y = y;
                        state.scroll_started_from_top = true;
                    }
                }
                el.set_scroll_top(next);
            }
        } else if state.has_horizontal_scroll {
            let offset = el.scroll_left();
            let max = el.scroll_width() - el.client_width();
            if let Some(next) = edge_nudge(offset, max) {
                el.set_scroll_left(next);
            }
        }
        state
    }

    /// Decides what to do with one `touchmove`.
    ///
    /// The top-start check wins over `always_prevent`: once it applies, the
    /// always-prevent policy is not consulted for that move.
    pub fn on_move(&self, current_y: Option<f64>, always_prevent: bool) -> MoveVerdict {
        if self.has_vertical_scroll && self.scroll_started_from_top {
            return match current_y {
                Some(y) if y > self.start_y => MoveVerdict::Suppress,
                _ => MoveVerdict::Pass,
            };
        }
        if always_prevent && !self.has_vertical_scroll && !self.has_horizontal_scroll {
            return MoveVerdict::Suppress;
        }
        MoveVerdict::Pass
    }

    pub fn is_scrollable(&self) -> bool {
        self.has_vertical_scroll || self.has_horizontal_scroll
    }
}
