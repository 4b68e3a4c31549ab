#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, Touch, TouchEvent, TouchEventInit, TouchInit,
};

use scroll_guard::{GestureSubscription, GuardConfig, ScrollGuard, dismiss_keyboard_if_needed};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn body() -> HtmlElement {
    document().body().unwrap()
}

/// body > div.scrollable (200px tall) > div (500px tall) > span
fn mount_list(top: i32) -> (Element, Element) {
    let doc = document();
    let list = doc.create_element("div").unwrap();
    list.set_class_name("scrollable");
    list.set_attribute("style", "height:200px; overflow-y:auto;")
        .unwrap();
    let content = doc.create_element("div").unwrap();
    content.set_attribute("style", "height:500px;").unwrap();
    let leaf = doc.create_element("span").unwrap();
    leaf.set_text_content(Some("row"));
    content.append_child(&leaf).unwrap();
    list.append_child(&content).unwrap();
    body().append_child(&list).unwrap();
    list.set_scroll_top(top);
    (list, leaf)
}

fn touch_event(kind: &str, target: &Element, y: f64) -> TouchEvent {
    let init = TouchInit::new(1, target);
    init.set_client_y(y);
    let touch = Touch::new(&init).unwrap();
    let touches = js_sys::Array::of1(&touch);
    let ev_init = TouchEventInit::new();
    ev_init.set_bubbles(true);
    ev_init.set_cancelable(true);
    ev_init.set_touches(&touches);
    TouchEvent::new_with_event_init_dict(kind, &ev_init).unwrap()
}

fn bare_touch_event(kind: &str) -> TouchEvent {
    let ev_init = TouchEventInit::new();
    ev_init.set_bubbles(true);
    ev_init.set_cancelable(true);
    TouchEvent::new_with_event_init_dict(kind, &ev_init).unwrap()
}

#[wasm_bindgen_test]
fn text_input_loses_focus() {
    let input: HtmlInputElement = document()
        .create_element("input")
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_attribute("type", "TEXT").unwrap();
    body().append_child(&input).unwrap();
    input.focus().unwrap();

    dismiss_keyboard_if_needed();

    let still_focused = document()
        .active_element()
        .is_some_and(|a| a.is_same_node(Some(input.as_ref())));
    assert!(!still_focused);
    input.remove();
}

#[wasm_bindgen_test]
fn checkbox_keeps_focus() {
    let input: HtmlInputElement = document()
        .create_element("input")
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_attribute("type", "checkbox").unwrap();
    body().append_child(&input).unwrap();
    input.focus().unwrap();

    dismiss_keyboard_if_needed();

    let still_focused = document()
        .active_element()
        .is_some_and(|a| a.is_same_node(Some(input.as_ref())));
    assert!(still_focused);
    input.remove();
}

#[wasm_bindgen_test]
fn subscription_registers_and_releases_once() {
    let moves = Rc::new(Cell::new(0));
    let sub = {
        let moves = moves.clone();
        GestureSubscription::attach(body(), move |_e: TouchEvent| moves.set(moves.get() + 1))
    };
    assert_eq!(sub.listener_count(), 3);

    body().dispatch_event(&bare_touch_event("touchmove")).unwrap();
    assert_eq!(moves.get(), 1);

    body().dispatch_event(&bare_touch_event("touchend")).unwrap();
    assert!(sub.is_released());
    assert_eq!(sub.listener_count(), 0);

    body().dispatch_event(&bare_touch_event("touchmove")).unwrap();
    assert_eq!(moves.get(), 1);
    sub.release();
}

#[wasm_bindgen_test]
fn touchcancel_releases() {
    let sub = GestureSubscription::attach(body(), |_e: TouchEvent| {});
    body().dispatch_event(&bare_touch_event("touchcancel")).unwrap();
    assert!(sub.is_released());
}

#[wasm_bindgen_test]
fn top_edge_gesture_nudges_and_suppresses_pull() {
    let (list, leaf) = mount_list(0);
    let guard = ScrollGuard::new(GuardConfig::default());

    guard.handle_touch_start(&touch_event("touchstart", &leaf, 100.0));
    assert_eq!(list.scroll_top(), 1);
    assert!(guard.has_active_gesture());

    let pull = touch_event("touchmove", &leaf, 140.0);
    leaf.dispatch_event(&pull).unwrap();
    assert!(pull.default_prevented());

    let push = touch_event("touchmove", &leaf, 60.0);
    leaf.dispatch_event(&push).unwrap();
    assert!(!push.default_prevented());

    leaf.dispatch_event(&bare_touch_event("touchend")).unwrap();
    assert!(!guard.has_active_gesture());
    list.remove();
}

#[wasm_bindgen_test]
fn bottom_edge_gesture_nudges_up() {
    let (list, leaf) = mount_list(300);
    let guard = ScrollGuard::default();

    guard.handle_touch_start(&touch_event("touchstart", &leaf, 100.0));
    assert_eq!(list.scroll_top(), 299);

    let pull = touch_event("touchmove", &leaf, 140.0);
    leaf.dispatch_event(&pull).unwrap();
    assert!(!pull.default_prevented());
    guard.cancel();
    list.remove();
}

#[wasm_bindgen_test]
fn always_prevent_outside_scrollable() {
    let plain = document().create_element("div").unwrap();
    body().append_child(&plain).unwrap();
    let guard = ScrollGuard::new(GuardConfig {
        always_prevent_pull_to_refresh: true,
        ..Default::default()
    });

    guard.handle_touch_start(&touch_event("touchstart", &plain, 10.0));
    let mv = touch_event("touchmove", &plain, 50.0);
    plain.dispatch_event(&mv).unwrap();
    assert!(mv.default_prevented());

    guard.cancel();
    assert!(!guard.has_active_gesture());
    plain.remove();
}

#[wasm_bindgen_test]
fn new_gesture_replaces_stale_listeners() {
    let plain = document().create_element("div").unwrap();
    body().append_child(&plain).unwrap();
    let guard = ScrollGuard::new(GuardConfig {
        always_prevent_pull_to_refresh: true,
        ..Default::default()
    });

    // No touchend between the two starts.
    guard.handle_touch_start(&touch_event("touchstart", &plain, 10.0));
    guard.set_always_prevent(false);
    guard.handle_touch_start(&touch_event("touchstart", &plain, 10.0));

    let mv = touch_event("touchmove", &plain, 50.0);
    plain.dispatch_event(&mv).unwrap();
    assert!(!mv.default_prevented());

    guard.cancel();
    plain.remove();
}

#[wasm_bindgen_test]
fn default_guard_pull_stops_propagation_and_blurs_password() {
    let input: HtmlInputElement = document()
        .create_element("input")
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_attribute("type", "password").unwrap();
    body().append_child(&input).unwrap();
    input.focus().unwrap();
    let (list, leaf) = mount_list(0);

    scroll_guard::guard(&touch_event("touchstart", &leaf, 100.0), false);
    assert_eq!(list.scroll_top(), 1);

    let reached_document = Rc::new(Cell::new(0));
    let doc_cb = {
        let reached_document = reached_document.clone();
        Closure::wrap(Box::new(move |_e: TouchEvent| {
            reached_document.set(reached_document.get() + 1);
        }) as Box<dyn FnMut(_)>)
    };
    document()
        .add_event_listener_with_callback("touchmove", doc_cb.as_ref().unchecked_ref())
        .unwrap();

    let pull = touch_event("touchmove", &leaf, 150.0);
    leaf.dispatch_event(&pull).unwrap();
    assert!(pull.default_prevented());
    assert_eq!(reached_document.get(), 0);
    let still_focused = document()
        .active_element()
        .is_some_and(|a| a.is_same_node(Some(input.as_ref())));
    assert!(!still_focused);

    scroll_guard::cancel();

    // Nothing left on the body: the same pull now passes through.
    let after = touch_event("touchmove", &leaf, 150.0);
    leaf.dispatch_event(&after).unwrap();
    assert!(!after.default_prevented());
    assert_eq!(reached_document.get(), 1);

    document()
        .remove_event_listener_with_callback("touchmove", doc_cb.as_ref().unchecked_ref())
        .unwrap();
    input.remove();
    list.remove();
}
