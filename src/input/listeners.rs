// Session-scoped listener bookkeeping.
//
// The global move/release listeners belong to the active session only:
// attached at most once when it opens, detached exactly once when it closes
// or when the owner is torn down mid-drag.

pub trait ListenerHost {
    /// Registers the listeners; `false` if the platform refused.
    fn attach(&mut self) -> bool;
    fn detach(&mut self);
}

pub struct SessionListeners<H: ListenerHost> {
    host: H,
    attached: bool,
}

impl<H: ListenerHost> SessionListeners<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            attached: false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn on_session_start(&mut self) {
        if !self.attached {
            self.attached = self.host.attach();
        }
    }

    pub fn on_session_end(&mut self) {
        if self.attached {
            self.host.detach();
            self.attached = false;
        }
    }
}

impl<H: ListenerHost> Drop for SessionListeners<H> {
    fn drop(&mut self) {
        self.on_session_end();
    }
}
