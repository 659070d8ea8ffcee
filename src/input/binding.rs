// Browser wiring: touch and mouse events on one element feed a shared
// GestureController.
//
// Element-level listeners (touch*, mousedown) live as long as the binding.
// Window-level listeners (mousemove, mouseup, blur, keydown) live only while
// a session is open; see SessionListeners.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent, Window};

use super::driver::InputDriver;
use super::listeners::ListenerHost;
use crate::controller::GestureController;
use crate::util::cwarn;

type Driver = InputDriver<WindowListeners>;

struct WindowListeners {
    window: Window,
    mousemove: Closure<dyn FnMut(MouseEvent)>,
    mouseup: Closure<dyn FnMut(MouseEvent)>,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    blur: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListeners {
    fn new(window: Window, inner: Weak<Driver>) -> Self {
        let mousemove = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                if let Some(inner) = inner.upgrade() {
                    inner.pointer_move(e.client_x() as f64, e.client_y() as f64);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let mouseup = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                if let Some(inner) = inner.upgrade() {
                    inner.pointer_up(e.button());
                }
            }) as Box<dyn FnMut(_)>)
        };
        let keydown = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.key() != "Escape" {
                    return;
                }
                if let Some(inner) = inner.upgrade() {
                    inner.abort();
                }
            }) as Box<dyn FnMut(_)>)
        };
        let blur = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            if let Some(inner) = inner.upgrade() {
                inner.abort();
            }
        }) as Box<dyn FnMut(_)>);
        Self {
            window,
            mousemove,
            mouseup,
            keydown,
            blur,
        }
    }
}

impl ListenerHost for WindowListeners {
    fn attach(&mut self) -> bool {
        let w = &self.window;
        let ok = w
            .add_event_listener_with_callback("mousemove", self.mousemove.as_ref().unchecked_ref())
            .is_ok()
            && w.add_event_listener_with_callback("mouseup", self.mouseup.as_ref().unchecked_ref())
                .is_ok()
            && w.add_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref())
                .is_ok()
            && w.add_event_listener_with_callback("blur", self.blur.as_ref().unchecked_ref())
                .is_ok();
        if !ok {
            cwarn("could not attach session listeners");
            self.detach();
        }
        ok
    }

    fn detach(&mut self) {
        let w = &self.window;
        let _ = w.remove_event_listener_with_callback(
            "mousemove",
            self.mousemove.as_ref().unchecked_ref(),
        );
        let _ = w
            .remove_event_listener_with_callback("mouseup", self.mouseup.as_ref().unchecked_ref());
        let _ = w
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        let _ =
            w.remove_event_listener_with_callback("blur", self.blur.as_ref().unchecked_ref());
    }
}

/// Keeps the element listeners registered; dropping it unbinds everything
/// and cancels a drag in flight.
pub struct GestureBinding {
    element: HtmlElement,
    inner: Rc<Driver>,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
    touch_cancel: Closure<dyn FnMut(TouchEvent)>,
    mouse_down: Closure<dyn FnMut(MouseEvent)>,
}

impl GestureBinding {
    pub fn attach(
        element: HtmlElement,
        controller: Rc<RefCell<GestureController>>,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let inner = Driver::new_cyclic(controller, |weak| WindowListeners::new(window, weak.clone()));

        let touch_start = {
            let inner = Rc::downgrade(&inner);
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let Some(inner) = inner.upgrade() else {
                    return;
                };
                if let Some(t0) = e.changed_touches().item(0) {
                    inner.touch_start(t0.identifier(), t0.client_x() as f64, t0.client_y() as f64);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let touch_move = {
            let inner = Rc::downgrade(&inner);
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let Some(inner) = inner.upgrade() else {
                    return;
                };
                let changed = e.changed_touches();
                let mut active = false;
                for t in (0..changed.length()).filter_map(|i| changed.item(i)) {
                    active |= inner.touch_move(t.identifier(), t.client_x() as f64, t.client_y() as f64);
                }
                if active {
                    // keep the page from scrolling under the drag
                    e.prevent_default();
                }
            }) as Box<dyn FnMut(_)>)
        };
        let touch_end = {
            let inner = Rc::downgrade(&inner);
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let Some(inner) = inner.upgrade() else {
                    return;
                };
                let changed = e.changed_touches();
                for t in (0..changed.length()).filter_map(|i| changed.item(i)) {
                    if inner.touch_end(t.identifier()) {
                        // suppresses the emulated mouse events that follow a tap
                        e.prevent_default();
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };
        let touch_cancel = {
            let inner = Rc::downgrade(&inner);
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let Some(inner) = inner.upgrade() else {
                    return;
                };
                let changed = e.changed_touches();
                for t in (0..changed.length()).filter_map(|i| changed.item(i)) {
                    inner.touch_cancel(t.identifier());
                }
            }) as Box<dyn FnMut(_)>)
        };
        let mouse_down = {
            let inner = Rc::downgrade(&inner);
            Closure::wrap(Box::new(move |e: MouseEvent| {
                let Some(inner) = inner.upgrade() else {
                    return;
                };
                if inner.pointer_down(e.button(), e.client_x() as f64, e.client_y() as f64) {
                    e.prevent_default();
                }
            }) as Box<dyn FnMut(_)>)
        };

        element
            .add_event_listener_with_callback("touchstart", touch_start.as_ref().unchecked_ref())
            .ok();
        let opts = AddEventListenerOptions::new();
        opts.set_passive(false);
        element
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                touch_move.as_ref().unchecked_ref(),
                &opts,
            )
            .ok();
        element
            .add_event_listener_with_callback("touchend", touch_end.as_ref().unchecked_ref())
            .ok();
        element
            .add_event_listener_with_callback("touchcancel", touch_cancel.as_ref().unchecked_ref())
            .ok();
        element
            .add_event_listener_with_callback("mousedown", mouse_down.as_ref().unchecked_ref())
            .ok();

        Some(Self {
            element,
            inner,
            touch_start,
            touch_move,
            touch_end,
            touch_cancel,
            mouse_down,
        })
    }
}

impl Drop for GestureBinding {
    fn drop(&mut self) {
        let el = &self.element;
        let _ = el.remove_event_listener_with_callback(
            "touchstart",
            self.touch_start.as_ref().unchecked_ref(),
        );
        let _ = el
            .remove_event_listener_with_callback("touchmove", self.touch_move.as_ref().unchecked_ref());
        let _ = el
            .remove_event_listener_with_callback("touchend", self.touch_end.as_ref().unchecked_ref());
        let _ = el.remove_event_listener_with_callback(
            "touchcancel",
            self.touch_cancel.as_ref().unchecked_ref(),
        );
        let _ = el
            .remove_event_listener_with_callback("mousedown", self.mouse_down.as_ref().unchecked_ref());
        // unmounted mid-drag: no navigation, window listeners come off
        self.inner.abort();
    }
}
