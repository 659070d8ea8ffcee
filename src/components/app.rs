use super::{
    gesture_pad::GesturePad,
    nav_log::{NavEntry, NavLog},
};
use crate::config::{GestureConfig, STORAGE_KEY_CLOCK, STORAGE_KEY_ORTHOGONAL};
use crate::topology::{TargetId, Topology};
use yew::prelude::*;

const MAX_LOG: usize = 12;

/// Clock-face slots, clockwise from twelve o'clock.
pub const CLOCK_TARGETS: [&str; 6] = [
    "assistant",
    "vehicles",
    "documents",
    "reminders",
    "service",
    "settings",
];

#[function_component(App)]
pub fn app() -> Html {
    let orthogonal = use_state(|| {
        GestureConfig::load_or(STORAGE_KEY_ORTHOGONAL, GestureConfig::orthogonal())
    });
    let clock = use_state(|| {
        GestureConfig::load_or(
            STORAGE_KEY_CLOCK,
            GestureConfig::radial(Topology::clock_face(CLOCK_TARGETS)),
        )
    });
    let log = use_reducer(NavLogState::default);

    let navigate = |source: &'static str| {
        let log = log.clone();
        Callback::from(move |id: TargetId| {
            log.dispatch(NavAction::Push(NavEntry {
                at_ms: js_sys::Date::now(),
                source,
                target: id.to_string(),
            }))
        })
    };
    let clear = {
        let log = log.clone();
        Callback::from(move |_| log.dispatch(NavAction::Clear))
    };

    html! {
        <div style="min-height:100vh; background:#010409; color:#e6edf3; font-family:system-ui, sans-serif; display:flex; flex-direction:column; align-items:center; gap:24px; padding:24px; box-sizing:border-box;">
            <h2 style="margin:0; font-size:20px;">{"Gesture navigation"}</h2>
            <div style="display:flex; flex-wrap:wrap; gap:32px; justify-content:center;">
                <GesturePad title="4-way" config={(*orthogonal).clone()} on_navigate={navigate("4-way")} />
                <GesturePad title="Clock face" config={(*clock).clone()} on_navigate={navigate("clock")} />
            </div>
            <NavLog entries={log.entries.clone()} on_clear={clear} />
        </div>
    }
}

#[derive(Clone, Default, PartialEq)]
pub struct NavLogState {
    pub entries: Vec<NavEntry>,
}

pub enum NavAction {
    Push(NavEntry),
    Clear,
}

impl Reducible for NavLogState {
    type Action = NavAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::Push(entry) => {
                next.entries.push(entry);
                if next.entries.len() > MAX_LOG {
                    let excess = next.entries.len() - MAX_LOG;
                    next.entries.drain(..excess);
                }
            }
            NavAction::Clear => next.entries.clear(),
        }
        next.into()
    }
}
