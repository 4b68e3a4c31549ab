// Per-gesture listener set on document.body.
//
// touchmove is registered non-passive so preventDefault is honored on iOS.
// touchend and touchcancel are capture-phase so cleanup runs even when a
// nested handler stops propagation. Dropping the subscription removes
// anything still registered.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlElement, TouchEvent};

use crate::util::clog;

struct Registered {
    kind: &'static str,
    func: Function,
    capture: bool,
}

struct Listeners {
    body: HtmlElement,
    entries: RefCell<Vec<Registered>>,
    released: Cell<bool>,
}

impl Listeners {
    fn add(&self, kind: &'static str, func: &Function, capture: bool) {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(false);
        opts.set_capture(capture);
        if self
            .body
            .add_event_listener_with_callback_and_add_event_listener_options(kind, func, &opts)
            .is_ok()
        {
            self.entries.borrow_mut().push(Registered {
                kind,
                func: func.clone(),
                capture,
            });
        }
    }

    fn release(&self) {
        if self.released.replace(true) {
            return;
        }
        for r in self.entries.borrow_mut().drain(..) {
            let _ = self
                .body
                .remove_event_listener_with_callback_and_bool(r.kind, &r.func, r.capture);
        }
        clog("scroll-guard: gesture listeners released");
    }
}

pub struct GestureSubscription {
    listeners: Rc<Listeners>,
    _on_move: Closure<dyn FnMut(TouchEvent)>,
    _on_finish: Closure<dyn FnMut(TouchEvent)>,
}

impl GestureSubscription {
    /// Registers `on_move` for `touchmove` plus the `touchend`/`touchcancel`
    /// pair that releases everything.
    ///
    /// The finishing handler only unregisters; the closures themselves are
    /// freed when the subscription is dropped, which must not happen from
    /// inside one of its own handlers.
    pub fn attach(body: HtmlElement, on_move: impl FnMut(TouchEvent) + 'static) -> Self {
        let listeners = Rc::new(Listeners {
            body,
            entries: RefCell::new(Vec::with_capacity(3)),
            released: Cell::new(false),
        });
        let move_cb = Closure::wrap(Box::new(on_move) as Box<dyn FnMut(TouchEvent)>);
        let finish_cb = {
            let listeners = listeners.clone();
            Closure::wrap(Box::new(move |_e: TouchEvent| {
                listeners.release();
            }) as Box<dyn FnMut(_)>)
        };
        listeners.add("touchmove", move_cb.as_ref().unchecked_ref(), false);
        listeners.add("touchend", finish_cb.as_ref().unchecked_ref(), true);
        listeners.add("touchcancel", finish_cb.as_ref().unchecked_ref(), true);
        Self {
            listeners,
            _on_move: move_cb,
            _on_finish: finish_cb,
        }
    }

    /// Removes all listeners. Safe to call more than once.
    pub fn release(&self) {
        self.listeners.release();
    }

    pub fn is_released(&self) -> bool {
        self.listeners.released.get()
    }

    /// Number of listeners currently registered on the body.
    pub fn listener_count(&self) -> usize {
        self.listeners.entries.borrow().len()
    }
}

impl Drop for GestureSubscription {
    fn drop(&mut self) {
        self.listeners.release();
    }
}
