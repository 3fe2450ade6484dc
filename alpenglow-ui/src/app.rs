//! Page root: parses the site configuration, renders the components, and
//! wires the behavior controllers to the mounted DOM.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::animations::{AnimationManager, REVEAL_CLASS};
use crate::components::loading_overlay::INTRO_CONTAINER_ID;
use crate::components::{
    ArtDirection, ContactModal, ContactSection, Footer, Header, Hero, LoadingOverlay, Services,
    WhatWeDo,
};
use crate::contact::ContactActions;
use crate::effects::UiEffects;
use crate::hooks::use_loading_sequence;
use crate::lottie::{LottieBackend, LottieOptions};
use alpenglow_core::{SequenceEvent, SiteConfig};

/// Site configuration shipped alongside the bundle. The animation roster,
/// reveal selectors, and contact details live there, not in code.
const SITE_CONFIG_JSON: &str = include_str!("../site.json");

/// Delay before the hero shapes get their entrance reveal, in
/// milliseconds.
const HERO_REVEAL_DELAY_MS: u32 = 1000;

const HERO_SHAPES_SELECTOR: &str = ".hero-container .shape, .hero-container .sphere";

/// The page-facing trigger surface. Components receive this instead of
/// reaching for globals; every trigger goes through the same signal or
/// helper the controllers use themselves.
#[derive(Clone, Copy)]
pub struct SiteActions {
    pub open_modal: Callback<()>,
    pub close_modal: Callback<()>,
    pub scroll_to_next: Callback<()>,
}

impl SiteActions {
    /// Wire the trigger surface to the modal signal. The callbacks flip
    /// the same signal the modal component reads, so triggering through
    /// here is equivalent to setting the signal directly.
    pub fn new(modal_open: RwSignal<bool>) -> Self {
        Self {
            open_modal: Callback::new(move |_| modal_open.set(true)),
            close_modal: Callback::new(move |_| modal_open.set(false)),
            scroll_to_next: Callback::new(|_| scroll_to_next_section()),
        }
    }
}

/// Smooth-scroll one viewport height down.
pub fn scroll_to_next_section() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let options = ScrollToOptions::new();
    options.set_top(height);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_by_with_scroll_to_options(&options);
}

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::from_json(SITE_CONFIG_JSON).expect("site.json must be valid");

    let modal_open = create_rw_signal(false);
    let actions = SiteActions::new(modal_open);

    let manager = Rc::new(
        AnimationManager::new(LottieBackend).expect("IntersectionObserver must be available"),
    );

    // The splash starts immediately; the intro animation is released once
    // the sequence reports cleanup.
    let on_sequence_event = {
        let manager = Rc::clone(&manager);
        let intro = config.intro_animation.clone();
        Callback::new(move |event: SequenceEvent| {
            if event == SequenceEvent::CleanedUp {
                if let Some(intro) = &intro {
                    manager.destroy_animation(&intro.container_id);
                }
            }
        })
    };
    let loading = use_loading_sequence(config.loading, on_sequence_event);

    // Controllers attach on the first frame, once the view below is in
    // the document.
    {
        let manager = Rc::clone(&manager);
        let config = config.clone();
        request_animation_frame(move || {
            if let Some(intro) = &config.intro_animation {
                manager.load(&intro.container_id, &intro.path, &LottieOptions::default());
            }
            manager.initialize(&config.animations);
            for selector in &config.reveal_selectors {
                manager.observe_elements(selector);
            }
            if let Err(err) = manager.observe_footer() {
                log::warn!("footer reveal not installed: {err:?}");
            }

            if let Err(err) = UiEffects::new(config.shape_selector.clone()).attach() {
                log::error!("ui effects not installed: {err:?}");
            }
            if let Err(err) = ContactActions::new(config.contact.clone()).attach() {
                log::error!("contact actions not installed: {err:?}");
            }

            Timeout::new(HERO_REVEAL_DELAY_MS, reveal_hero_shapes).forget();
        });
    }

    let intro_container_id = config
        .intro_animation
        .as_ref()
        .map(|intro| intro.container_id.clone())
        .unwrap_or_else(|| INTRO_CONTAINER_ID.to_string());

    let is_loading = loading.is_loading;
    view! {
        <LoadingOverlay
            phase=loading.phase
            progress=loading.progress
            container_id=intro_container_id
        />
        <Header actions=actions/>
        <main
            class="main-content"
            class:show=move || !is_loading.get()
        >
            <Hero actions=actions/>
            <WhatWeDo/>
            <Services/>
            <ArtDirection/>
            <ContactSection contact=config.contact.clone()/>
            <Footer/>
        </main>
        <ContactModal open=modal_open contact=config.contact.clone()/>
        <div id="copied-animation" class="copied-overlay" style="display: none;">
            <div id="copied-lottie-container"></div>
            <span>"Copied to clipboard"</span>
        </div>
    }
}

fn reveal_hero_shapes() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(shapes) = document.query_selector_all(HERO_SHAPES_SELECTOR) else {
        return;
    };
    for i in 0..shapes.length() {
        if let Some(shape) = shapes
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        {
            _ = shape.class_list().add_1(REVEAL_CLASS);
        }
    }
}
