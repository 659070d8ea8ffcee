use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::GestureConfig;
use crate::controller::GestureController;
use crate::geometry::polar_offset;
use crate::input::GestureBinding;
use crate::state::GestureState;
use crate::topology::TargetId;
use crate::util::cwarn;

const NODE_MARGIN: f64 = 36.0;
const KNOB_SIZE: f64 = 56.0;

#[derive(Properties, PartialEq, Clone)]
pub struct GesturePadProps {
    pub config: GestureConfig,
    pub on_navigate: Callback<TargetId>,
    #[prop_or_default]
    pub title: AttrValue,
}

#[function_component(GesturePad)]
pub fn gesture_pad(props: &GesturePadProps) -> Html {
    let pad_ref = use_node_ref();
    let gesture = use_state(GestureState::neutral);
    // always the latest navigate callback, without rebinding listeners
    let navigate_ref = use_mut_ref(|| props.on_navigate.clone());
    *navigate_ref.borrow_mut() = props.on_navigate.clone();

    {
        let pad_ref = pad_ref.clone();
        let gesture = gesture.clone();
        let navigate_ref = navigate_ref.clone();
        use_effect_with(props.config.clone(), move |config| {
            let on_navigate = Callback::from(move |id: TargetId| navigate_ref.borrow().emit(id));
            let reset = gesture.clone();
            let controller = GestureController::new(config.clone(), on_navigate)
                .with_observer(Callback::from(move |s: GestureState| gesture.set(s)));
            let controller = Rc::new(RefCell::new(controller));
            let binding = pad_ref
                .cast::<HtmlElement>()
                .and_then(|el| GestureBinding::attach(el, controller));
            if binding.is_none() {
                cwarn("gesture pad: nothing to bind to");
            }
            move || {
                drop(binding);
                reset.set(GestureState::neutral());
            }
        });
    }

    let cfg = &props.config;
    let state = &*gesture;
    let radius = cfg.max_drag + NODE_MARGIN;
    let size = 2.0 * (radius + NODE_MARGIN);
    let center = size / 2.0;

    let nodes = cfg.topology.target_ids().into_iter().map(|id| {
        let angle = cfg.topology.anchor_angle(&id).unwrap_or(0.0);
        let p = polar_offset(angle, radius);
        let active = state.is_active(&id);
        let armed = active && state.progress >= 1.0;
        let (bg, border) = match (active, armed) {
            (true, true) => ("#2ea043", "#3fb950"),
            (true, false) => ("#1f6feb", "#58a6ff"),
            _ => ("#161b22", "#30363d"),
        };
        html! {
            <div key={id.to_string()} style={format!(
                "position:absolute; left:{:.1}px; top:{:.1}px; transform:translate(-50%,-50%); padding:4px 8px; border-radius:12px; font-size:12px; background:{}; border:1px solid {}; pointer-events:none; white-space:nowrap;",
                center + p.x, center + p.y, bg, border
            )}>{ id.to_string() }</div>
        }
    });

    let knob_transition = if state.is_dragging { "none" } else { "transform 180ms ease-out" };
    let knob_style = format!(
        "position:absolute; left:{:.1}px; top:{:.1}px; width:{}px; height:{}px; border-radius:50%; background:#58a6ff; box-shadow:0 0 0 {:.1}px rgba(88,166,255,0.35); transform:translate({:.1}px,{:.1}px); transition:{}; pointer-events:none;",
        center - KNOB_SIZE / 2.0,
        center - KNOB_SIZE / 2.0,
        KNOB_SIZE,
        KNOB_SIZE,
        state.progress * 10.0,
        state.offset.x,
        state.offset.y,
        knob_transition,
    );
    let deadzone_d = 2.0 * cfg.effective_deadzone();
    let threshold_d = 2.0 * cfg.threshold;
    let ring = |d: f64, color: &str| {
        format!(
            "position:absolute; left:{:.1}px; top:{:.1}px; width:{:.1}px; height:{:.1}px; border-radius:50%; border:1px dashed {}; pointer-events:none;",
            center - d / 2.0,
            center - d / 2.0,
            d,
            d,
            color
        )
    };

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:8px;">
            { if props.title.is_empty() { html!{} } else { html!{ <div style="font-weight:600;">{ props.title.clone() }</div> } } }
            <div ref={pad_ref} style={format!("position:relative; width:{:.0}px; height:{:.0}px; touch-action:none; user-select:none; cursor:grab; background:#0d1117; border:1px solid #30363d; border-radius:50%;", size, size)}>
                <div style={ring(threshold_d, "#30363d")}></div>
                <div style={ring(deadzone_d, "#21262d")}></div>
                { for nodes }
                <div style={knob_style}></div>
            </div>
            <div style="width:160px; height:6px; background:#21262d; border-radius:3px; overflow:hidden;">
                <div style={format!("width:{:.0}%; height:100%; background:{};", state.progress * 100.0, if state.is_armed() { "#3fb950" } else { "#58a6ff" })}></div>
            </div>
        </div>
    }
}
