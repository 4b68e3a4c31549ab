// DOM bindings for the gesture traits

use web_sys::{Element, Node, TouchEvent};

use crate::gesture::{ScrollBox, ScrollNode};

impl ScrollBox for Element {
    fn scroll_top(&self) -> i32 {
        Element::scroll_top(self)
    }
    fn set_scroll_top(&self, value: i32) {
        Element::set_scroll_top(self, value)
    }
    fn scroll_left(&self) -> i32 {
        Element::scroll_left(self)
    }
    fn set_scroll_left(&self, value: i32) {
        Element::set_scroll_left(self, value)
    }
    fn scroll_height(&self) -> i32 {
        Element::scroll_height(self)
    }
    fn client_height(&self) -> i32 {
        Element::client_height(self)
    }
    fn scroll_width(&self) -> i32 {
        Element::scroll_width(self)
    }
    fn client_width(&self) -> i32 {
        Element::client_width(self)
    }
}

// Class membership is used instead of computed overflow style: checking the
// class list is far cheaper per touch.
impl ScrollNode for Element {
    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
    fn has_class(&self, marker: &str) -> bool {
        self.class_list().contains(marker)
    }
    fn is_same(&self, other: &Self) -> bool {
        let node: &Node = self.as_ref();
        node.is_same_node(Some(other.as_ref()))
    }
}

/// Client Y of the first touch point, if any.
pub fn first_touch_y(e: &TouchEvent) -> Option<f64> {
    e.touches().item(0).map(|t| t.client_y() as f64)
}
