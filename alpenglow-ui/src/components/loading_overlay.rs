//! Splash overlay shown while the loading sequence runs.

use leptos::*;

use alpenglow_core::LoadingPhase;

/// Default id of the intro animation container, used when no intro
/// animation is configured.
pub const INTRO_CONTAINER_ID: &str = "lottie-container";

#[component]
pub fn LoadingOverlay(
    phase: ReadSignal<LoadingPhase>,
    progress: ReadSignal<u32>,
    /// id the intro container renders with; the page root passes the
    /// configured intro animation's container id so load and destroy
    /// always target the element the overlay actually mounted.
    #[prop(default = INTRO_CONTAINER_ID.to_string())]
    container_id: String,
) -> impl IntoView {
    let overlay_class = move || {
        let mut classes = String::from("loading-screen");
        let phase = phase.get();
        if phase >= LoadingPhase::Zoom {
            classes.push_str(" zoom-in");
        }
        if phase >= LoadingPhase::Revealed {
            classes.push_str(" fade-out");
        }
        classes
    };

    // Pulse runs from its deadline until completion; zoom-focus stays
    // once applied.
    let container_class = move || {
        let mut classes = String::from("intro-animation");
        let phase = phase.get();
        if matches!(phase, LoadingPhase::Pulse | LoadingPhase::Zoom) {
            classes.push_str(" pulse");
        }
        if phase >= LoadingPhase::Zoom {
            classes.push_str(" zoom-focus");
        }
        classes
    };

    view! {
        <div
            id="loading-screen"
            class=overlay_class
            style:display=move || if phase.get() == LoadingPhase::Done { "none" } else { "flex" }
        >
            <div id=container_id class=container_class></div>
            <div class="progress-track">
                <div
                    id="progress-bar"
                    style:width=move || format!("{}%", progress.get())
                ></div>
            </div>
        </div>
    }
}
