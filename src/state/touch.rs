// Which touch contact drives the current session.
#[derive(Default, Debug, Clone)]
pub struct TouchState {
    active_id: Option<i32>,
}

impl TouchState {
    /// Claims `id` if no contact is being tracked yet.
    pub fn claim(&mut self, id: i32) -> bool {
        if self.active_id.is_some() {
            return false;
        }
        self.active_id = Some(id);
        true
    }

    pub fn owns(&self, id: i32) -> bool {
        self.active_id == Some(id)
    }

    pub fn is_tracking(&self) -> bool {
        self.active_id.is_some()
    }

    /// Stops tracking when `id` is the tracked contact.
    pub fn release(&mut self, id: i32) -> bool {
        if self.owns(id) {
            self.active_id = None;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.active_id = None;
    }
}
