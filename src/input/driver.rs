// Platform-independent half of the input adapter: normalized touch and
// pointer events drive a shared GestureController, and the session-scoped
// listeners follow the session. The browser binding only translates DOM
// events into these calls.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::listeners::{ListenerHost, SessionListeners};
use crate::controller::GestureController;
use crate::state::TouchState;
use crate::util::clog;

/// Primary mouse button as reported by `MouseEvent::button`.
pub const PRIMARY_BUTTON: i16 = 0;

pub struct InputDriver<H: ListenerHost> {
    controller: Rc<RefCell<GestureController>>,
    touch: RefCell<TouchState>,
    session: RefCell<SessionListeners<H>>,
}

impl<H: ListenerHost> InputDriver<H> {
    pub fn new(controller: Rc<RefCell<GestureController>>, host: H) -> Self {
        Self {
            controller,
            touch: RefCell::new(TouchState::default()),
            session: RefCell::new(SessionListeners::new(host)),
        }
    }

    /// For hosts whose listeners call back into the driver.
    pub fn new_cyclic(
        controller: Rc<RefCell<GestureController>>,
        make_host: impl FnOnce(&Weak<Self>) -> H,
    ) -> Rc<Self> {
        Rc::new_cyclic(|weak| Self::new(controller, make_host(weak)))
    }

    pub fn listeners_attached(&self) -> bool {
        self.session
            .try_borrow()
            .map(|s| s.is_attached())
            .unwrap_or(true)
    }

    pub fn is_tracking_touch(&self) -> bool {
        self.touch.borrow().is_tracking()
    }

    /// Mouse press. Returns `true` when a session was opened.
    pub fn pointer_down(&self, button: i16, x: f64, y: f64) -> bool {
        if button != PRIMARY_BUTTON || self.is_tracking_touch() {
            return false;
        }
        self.begin(x, y)
    }

    pub fn pointer_move(&self, x: f64, y: f64) -> bool {
        self.update(x, y)
    }

    pub fn pointer_up(&self, button: i16) {
        if button == PRIMARY_BUTTON {
            self.finish(true);
        }
    }

    /// Touch contact. Only the first contact drives a session.
    pub fn touch_start(&self, id: i32, x: f64, y: f64) -> bool {
        if !self.touch.borrow_mut().claim(id) {
            return false;
        }
        if !self.begin(x, y) {
            self.touch.borrow_mut().reset();
            return false;
        }
        true
    }

    /// Returns whether a touch session is active, i.e. whether the platform's
    /// default scrolling should be suppressed.
    pub fn touch_move(&self, id: i32, x: f64, y: f64) -> bool {
        let ts = self.touch.borrow();
        if !ts.is_tracking() {
            return false;
        }
        let owned = ts.owns(id);
        drop(ts);
        if owned {
            self.update(x, y);
        }
        true
    }

    pub fn touch_end(&self, id: i32) -> bool {
        if !self.touch.borrow().owns(id) {
            return false;
        }
        self.finish(true);
        true
    }

    pub fn touch_cancel(&self, id: i32) -> bool {
        if !self.touch.borrow().owns(id) {
            return false;
        }
        self.finish(false);
        true
    }

    /// Blur, Escape, teardown: close the session without navigating.
    pub fn abort(&self) {
        self.finish(false);
    }

    fn begin(&self, x: f64, y: f64) -> bool {
        // a busy controller means we are inside one of its callbacks; drop the event
        let Ok(mut c) = self.controller.try_borrow_mut() else {
            return false;
        };
        c.start(x, y);
        drop(c);
        if let Ok(mut s) = self.session.try_borrow_mut() {
            s.on_session_start();
        }
        true
    }

    fn update(&self, x: f64, y: f64) -> bool {
        match self.controller.try_borrow_mut() {
            Ok(mut c) => c.move_to(x, y),
            Err(_) => false,
        }
    }

    fn finish(&self, commit: bool) {
        if let Ok(mut c) = self.controller.try_borrow_mut() {
            if commit {
                c.end();
            } else if c.cancel() {
                clog("gesture cancelled");
            }
        }
        self.touch.borrow_mut().reset();
        if let Ok(mut s) = self.session.try_borrow_mut() {
            s.on_session_end();
        }
    }
}
