use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::{MAX_TRAIL, MIN_TRAIL, Settings};

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub settings: Settings,
    pub swipes: u32,
    pub on_toggle_trail: Callback<()>,
    pub on_trail_limit: Callback<usize>,
    pub on_clear: Callback<()>,
}

#[function_component]
pub fn SettingsPanel(props: &SettingsPanelProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle_trail.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let limit_cb = {
        let cb = props.on_trail_limit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(n) = input.value().parse::<usize>() {
                cb.emit(n);
            }
        })
    };

    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; gap:14px; align-items:center; flex-wrap:wrap; font-size:14px;">
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={props.settings.show_trail} onclick={toggle_cb} />
            <span>{"Show Trail"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px;">
            <span>{"Trail Length"}</span>
            <input type="number" min={MIN_TRAIL.to_string()} max={MAX_TRAIL.to_string()}
                value={props.settings.trail_limit.to_string()} onchange={limit_cb} style="width:70px;" />
        </label>
        <span style="font-variant-numeric:tabular-nums;">{ format!("Swipes: {}", props.swipes) }</span>
        <button onclick={clear_cb} style="margin-left:auto;">{"Clear"}</button>
    </div>}
}
