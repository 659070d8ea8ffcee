//! Per-gesture lifecycle: `start` → `move_to`* → `end` (or `cancel`).
//!
//! The controller owns at most one [`GestureSession`] at a time, republishes a
//! full [`GestureState`] on every processed event and emits `on_navigate`
//! at most once per session, only at release.

use crate::config::GestureConfig;
use crate::geometry::Vec2;
use crate::resolver::resolve;
use crate::state::GestureState;
use crate::topology::TargetId;
use crate::util::clog;
use yew::Callback;

#[derive(Debug)]
struct GestureSession {
    anchor: Vec2,
    fired: bool,
}

impl GestureSession {
    fn new(x: f64, y: f64) -> Self {
        Self {
            anchor: Vec2::new(x, y),
            fired: false,
        }
    }
}

pub struct GestureController {
    config: GestureConfig,
    session: Option<GestureSession>,
    state: GestureState,
    on_navigate: Callback<TargetId>,
    on_change: Option<Callback<GestureState>>,
}

impl GestureController {
    pub fn new(config: GestureConfig, on_navigate: Callback<TargetId>) -> Self {
        Self {
            config: config.sanitized(),
            session: None,
            state: GestureState::neutral(),
            on_navigate,
            on_change: None,
        }
    }

    /// Receives every published snapshot.
    pub fn with_observer(mut self, on_change: Callback<GestureState>) -> Self {
        self.on_change = Some(on_change);
        self
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a session anchored at `(x, y)`. A session already in flight is
    /// discarded without navigating.
    pub fn start(&mut self, x: f64, y: f64) -> bool {
        if self.session.is_some() {
            clog("gesture restarted while dragging; previous session dropped");
        }
        self.session = Some(GestureSession::new(x, y));
        self.publish(GestureState::pressed());
        true
    }

    /// Resolves the pointer position against the anchor. Ignored without an
    /// open session.
    pub fn move_to(&mut self, x: f64, y: f64) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        if session.fired {
            return false;
        }
        let res = resolve(x - session.anchor.x, y - session.anchor.y, &self.config);
        self.publish(GestureState::dragging(res));
        true
    }

    /// Releases the pointer. Returns the target navigated to, if any.
    pub fn end(&mut self) -> Option<TargetId> {
        self.finish(true)
    }

    /// Drops the session without navigating (lost contact, blur, escape).
    pub fn cancel(&mut self) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.finish(false);
        true
    }

    fn finish(&mut self, commit: bool) -> Option<TargetId> {
        let session = self.session.as_mut()?;
        let target = if commit && !session.fired && self.state.is_armed() {
            session.fired = true;
            self.state.active_target.clone()
        } else {
            None
        };
        // the latched session stays open while navigation is emitted
        if let Some(id) = &target {
            clog(&format!("gesture committed: {id}"));
            self.on_navigate.emit(id.clone());
        }
        self.session = None;
        self.publish(GestureState::neutral());
        target
    }

    fn publish(&mut self, state: GestureState) {
        self.state = state;
        if let Some(cb) = &self.on_change {
            cb.emit(self.state.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<TargetId>>>;

    fn recorder() -> (Log, Callback<TargetId>) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, Callback::from(move |id| sink.borrow_mut().push(id)))
    }

    fn clock() -> GestureConfig {
        GestureConfig::radial(Topology::clock_face([
            "home", "garage", "docs", "chat", "fuel", "profile",
        ]))
    }

    fn ids(log: &Log) -> Vec<String> {
        log.borrow().iter().map(|t| t.0.clone()).collect()
    }

    #[test]
    fn scenario_orthogonal_up() {
        let (log, cb) = recorder();
        let mut c = GestureController::new(GestureConfig::orthogonal(), cb);
        c.start(0.0, 0.0);
        assert_eq!(*c.state(), GestureState::pressed());
        c.move_to(10.0, -80.0);
        let s = c.state().clone();
        assert_eq!(s.active_target, Some(TargetId::from("up")));
        assert_eq!(s.progress, 1.0);
        assert!((s.offset.x - 1.5).abs() < 1e-9);
        assert!((s.offset.y + 80.0).abs() < 1e-9);
        assert_eq!(c.end(), Some(TargetId::from("up")));
        assert_eq!(ids(&log), vec!["up"]);
        assert_eq!(*c.state(), GestureState::neutral());
    }

    #[test]
    fn scenario_radial_twelve_o_clock() {
        let (log, cb) = recorder();
        let mut c = GestureController::new(clock(), cb);
        c.start(0.0, 0.0);
        c.move_to(0.0, -80.0);
        assert_eq!(c.state().active_target, Some(TargetId::from("home")));
        assert_eq!(c.state().progress, 1.0);
        c.end();
        assert_eq!(ids(&log), vec!["home"]);
    }

    #[test]
    fn scenario_radial_diagonal_picks_sixty() {
        let (log, cb) = recorder();
        let mut c = GestureController::new(clock(), cb);
        c.start(100.0, 100.0);
        c.move_to(150.0, 50.0);
        assert_eq!(c.state().active_target, Some(TargetId::from("garage")));
        c.end();
        assert_eq!(ids(&log), vec!["garage"]);
    }

    #[test]
    fn scenario_drag_back_aborts() {
        let (log, cb) = recorder();
        let mut c = GestureController::new(clock(), cb);
        c.start(0.0, 0.0);
        c.move_to(0.0, -90.0);
        assert!(c.state().is_armed());
        c.move_to(0.0, 0.0);
        assert_eq!(c.state().active_target, None);
        assert!(c.state().is_dragging);
        assert_eq!(c.end(), None);
        assert!(log.borrow().is_empty());
        assert_eq!(*c.state(), GestureState::neutral());
    }

    #[test]
    fn below_threshold_release_does_not_navigate() {
        let (log, cb) = recorder();
        let mut c = GestureController::new(GestureConfig::orthogonal(), cb);
        c.start(0.0, 0.0);
        c.move_to(0.0, -40.0);
        assert_eq!(c.state().active_target, Some(TargetId::from("up")));
        assert!(c.state().progress < 1.0);
        assert_eq!(c.end(), None);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn navigation_fires_at_most_once() {
        let (log, cb) = recorder();
        let mut c = GestureController::new(GestureConfig::orthogonal(), cb);
        c.start(0.0, 0.0);
        for i in 0..50 {
            let y = if i % 2 == 0 { -200.0 } else { -61.0 };
            c.move_to(0.0, y);
        }
        c.end();
        c.end();
        assert!(!c.move_to(0.0, -200.0));
        c.end();
        assert_eq!(ids(&log), vec!["up"]);
    }

    #[test]
    fn reentrant_end_from_navigate_fires_once() {
        type Shared = Rc<RefCell<GestureController>>;
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let busy = Rc::new(RefCell::new(0));
        let slot: Rc<RefCell<Option<std::rc::Weak<RefCell<GestureController>>>>> =
            Rc::new(RefCell::new(None));
        let cb = {
            let (log, busy, slot) = (log.clone(), busy.clone(), slot.clone());
            Callback::from(move |id: TargetId| {
                log.borrow_mut().push(id);
                let Some(c) = slot.borrow().as_ref().and_then(|w| w.upgrade()) else {
                    return;
                };
                match c.try_borrow_mut() {
                    Ok(mut c) => {
                        c.end();
                        c.start(0.0, 0.0);
                    }
                    Err(_) => *busy.borrow_mut() += 1,
                };
            })
        };
        let c: Shared = Rc::new(RefCell::new(GestureController::new(clock(), cb)));
        *slot.borrow_mut() = Some(Rc::downgrade(&c));
        c.borrow_mut().start(0.0, 0.0);
        c.borrow_mut().move_to(0.0, 90.0);
        assert_eq!(c.borrow_mut().end(), Some(TargetId::from("chat")));
        assert_eq!(ids(&log), vec!["chat"]);
        assert_eq!(*busy.borrow(), 1);
        assert_eq!(*c.borrow().state(), GestureState::neutral());
        assert!(!c.borrow().is_dragging());
        assert_eq!(c.borrow_mut().end(), None);
        assert_eq!(ids(&log), vec!["chat"]);
    }

    #[test]
    fn session_less_calls_are_no_ops() {
        let (log, cb) = recorder();
        let mut c = GestureController::new(GestureConfig::orthogonal(), cb);
        assert!(!c.move_to(0.0, -500.0));
        assert_eq!(c.end(), None);
        assert!(!c.cancel());
        assert_eq!(*c.state(), GestureState::neutral());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn start_while_dragging_restarts() {
        let (log, cb) = recorder();
        let mut c = GestureController::new(GestureConfig::orthogonal(), cb);
        c.start(0.0, 0.0);
        c.move_to(0.0, -100.0);
        c.start(500.0, 500.0);
        assert!(log.borrow().is_empty());
        assert_eq!(*c.state(), GestureState::pressed());
        // deltas are now measured from the new anchor
        c.move_to(500.0, 400.0);
        assert_eq!(c.state().active_target, Some(TargetId::from("up")));
        c.move_to(500.0, 510.0);
        assert_eq!(c.state().active_target, None);
        assert_eq!(c.end(), None);
    }

    #[test]
    fn cancel_never_navigates() {
        let (log, cb) = recorder();
        let mut c = GestureController::new(clock(), cb);
        c.start(0.0, 0.0);
        c.move_to(0.0, 120.0);
        assert!(c.state().is_armed());
        assert!(c.cancel());
        assert!(log.borrow().is_empty());
        assert_eq!(*c.state(), GestureState::neutral());
        assert!(!c.is_dragging());
    }

    #[test]
    fn observer_sees_every_publish() {
        let (_log, cb) = recorder();
        let seen: Rc<RefCell<Vec<GestureState>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut c = GestureController::new(GestureConfig::orthogonal(), cb)
            .with_observer(Callback::from(move |s| sink.borrow_mut().push(s)));
        c.start(0.0, 0.0);
        c.move_to(0.0, -10.0);
        c.move_to(0.0, -10.0);
        c.move_to(0.0, -70.0);
        c.end();
        let seen = seen.borrow();
        assert_eq!(seen.len(), 5);
        assert!(seen[..4].iter().all(|s| s.is_dragging));
        assert_eq!(seen[4], GestureState::neutral());
        for s in seen.iter() {
            assert!(s.active_target.is_none() || s.progress > 0.0);
            assert!(s.offset.length() <= 120.0 + 1e-9);
        }
    }

    #[test]
    fn invalid_config_is_sanitized() {
        let (_log, cb) = recorder();
        let cfg = GestureConfig {
            threshold: -1.0,
            ..GestureConfig::orthogonal()
        };
        let c = GestureController::new(cfg, cb);
        assert_eq!(c.config().threshold, 60.0);
    }
}
