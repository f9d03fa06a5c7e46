//! Full-viewport branded overlay shown while the page-load sequencer
//! is in its opening phases. Purely presentational; the phase prop
//! drives opacity and pointer interception.

use yew::prelude::*;

use crate::config;
use crate::load::LoadPhase;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub phase: LoadPhase,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    // Stops intercepting pointer input the moment the fade starts.
    let done = !props.phase.overlay_interactive();

    html! {
        <div class={classes!("loading-screen", done.then(|| "loading-screen-done"))}>
            <div class="loading-screen-inner">
                <div class="loading-mark animate-spin">{"♻"}</div>
                <div class="loading-brand animate-pulse">{config::SITE_NAME}</div>
            </div>
        </div>
    }
}
