// Keyboard dismissal for suppressed touch moves.
//
// Cancelling a touchmove also cancels the native blur that would hide the
// on-screen keyboard, so focused text fields are blurred by hand.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::util::clog;

/// True for `<input type="text">` and `<input type="password">`, any case.
pub fn is_text_entry(tag_name: &str, type_attr: Option<&str>) -> bool {
    if !tag_name.eq_ignore_ascii_case("input") {
        return false;
    }
    matches!(type_attr, Some(t) if t.eq_ignore_ascii_case("text") || t.eq_ignore_ascii_case("password"))
}

pub fn dismiss_keyboard_if_needed() {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(active) = doc.active_element() else {
        return;
    };
    let ty = active.get_attribute("type");
    if !is_text_entry(&active.tag_name(), ty.as_deref()) {
        return;
    }
    if let Ok(el) = active.dyn_into::<HtmlElement>() {
        clog("scroll-guard: blurring focused input");
        el.blur().ok();
    }
}
