// Console logging helpers shared by the guard and the demo app

use std::cell::Cell;
use wasm_bindgen::JsValue;

thread_local! {
    static DEBUG: Cell<bool> = const { Cell::new(false) };
}

pub fn set_debug(on: bool) {
    DEBUG.with(|d| d.set(on));
}

pub fn debug_enabled() -> bool {
    DEBUG.with(|d| d.get())
}

/// Logs to the browser console when debug logging is on.
pub fn clog(msg: &str) {
    if debug_enabled() {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}
