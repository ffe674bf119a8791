use super::{settings_panel::SettingsPanel, swipe_pad::SwipePad};
use crate::model::{PadAction, PadState, SETTINGS_KEY, Settings};
use crate::util::clog;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let pad = use_reducer(PadState::default);

    // Load persisted settings
    {
        let pad = pad.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                        match serde_json::from_str::<Settings>(&raw) {
                            Ok(settings) => pad.dispatch(PadAction::LoadSettings(settings)),
                            Err(e) => clog(&format!("ignoring stored settings: {}", e)),
                        }
                    }
                }
            }
            || ()
        });
    }
    // Persist settings changes
    {
        let settings = pad.settings.clone();
        use_effect_with(settings, move |settings| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(settings) {
                        let _ = store.set_item(SETTINGS_KEY, &s);
                    }
                }
            }
            || ()
        });
    }

    let on_toggle_trail = {
        let pad = pad.clone();
        Callback::from(move |_| pad.dispatch(PadAction::ToggleTrail))
    };
    let on_trail_limit = {
        let pad = pad.clone();
        Callback::from(move |n: usize| pad.dispatch(PadAction::SetTrailLimit(n)))
    };
    let on_clear = {
        let pad = pad.clone();
        Callback::from(move |_| pad.dispatch(PadAction::Clear))
    };

    html! {
        <div id="root" style="display:flex; flex-direction:column; gap:12px; padding:12px; height:100vh; box-sizing:border-box; background:#0e1116; color:#c9d1d9;">
            <SettingsPanel
                settings={pad.settings.clone()}
                swipes={pad.swipes}
                {on_toggle_trail}
                {on_trail_limit}
                {on_clear}
            />
            <SwipePad pad={pad.clone()} />
        </div>
    }
}
