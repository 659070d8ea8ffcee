use crate::util::format_clock;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct NavEntry {
    pub at_ms: f64,
    pub source: &'static str,
    pub target: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct NavLogProps {
    pub entries: Vec<NavEntry>,
    pub on_clear: Callback<()>,
}

#[function_component(NavLog)]
pub fn nav_log(props: &NavLogProps) -> Html {
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let row_style = "display:flex; align-items:center; gap:8px; font-size:13px;";
    let time_style = "min-width:70px; font-variant-numeric:tabular-nums; opacity:0.7;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:260px; display:flex; flex-direction:column; gap:6px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <span style="font-weight:600;">{"Navigations"}</span>
                <button onclick={clear_cb} style="padding:2px 8px; font-size:12px;">{"Clear"}</button>
            </div>
            { if props.entries.is_empty() {
                html!{ <div style="font-size:12px; opacity:0.6;">{"Drag a knob past the outer ring and release."}</div> }
            } else { html!{} } }
            { for props.entries.iter().rev().map(|e| html!{
                <div style={row_style}>
                    <span style={time_style}>{ format_clock(e.at_ms) }</span>
                    <span style="opacity:0.7;">{ e.source }</span>
                    <span style="font-weight:600; color:#3fb950;">{ e.target.clone() }</span>
                </div>
            }) }
        </div>
    }
}
