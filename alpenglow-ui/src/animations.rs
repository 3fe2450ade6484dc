//! Animation manager: named vector animations plus the scroll-reveal
//! observers.
//!
//! Missing DOM elements are never errors here; every operation degrades
//! to a no-op, matching the site-wide missing-element policy.

use std::cell::RefCell;
use std::collections::HashMap;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::lottie::{AnimationBackend, AnimationHandle, LottieOptions};
use alpenglow_core::AnimationSpec;

/// Class added when an observed element scrolls into view. Added once,
/// never removed (one-way reveal).
pub const REVEAL_CLASS: &str = "animate-in";

/// Visibility fraction at which the reveal fires.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom margin for the footer observer, so the footer reveals only once
/// it is well inside the viewport.
const FOOTER_ROOT_MARGIN: &str = "0px 0px -100px 0px";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns the running animation handles (at most one per container id) and
/// the shared reveal observer.
pub struct AnimationManager<B: AnimationBackend> {
    backend: B,
    animations: RefCell<HashMap<String, B::Handle>>,
    reveal_observer: IntersectionObserver,
    _reveal_callback: ObserverCallback,
}

impl<B: AnimationBackend> AnimationManager<B> {
    pub fn new(backend: B) -> Result<Self, JsValue> {
        let callback: ObserverCallback = Closure::new(|entries: Array, _observer| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    _ = entry.target().class_list().add_1(REVEAL_CLASS);
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin("0px");
        let reveal_observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            backend,
            animations: RefCell::new(HashMap::new()),
            reveal_observer,
            _reveal_callback: callback,
        })
    }

    /// Start the animation for `container_id`, replacing (and destroying)
    /// any previous animation under that id. Returns false when the
    /// container is not in the document.
    pub fn load(&self, container_id: &str, path: &str, options: &LottieOptions) -> bool {
        let Some(container) = document().and_then(|d| d.get_element_by_id(container_id)) else {
            log::debug!("animation container #{container_id} not in document, skipping");
            return false;
        };

        let handle = self.backend.load(&container, path, options);
        if let Some(previous) = self
            .animations
            .borrow_mut()
            .insert(container_id.to_string(), handle)
        {
            previous.destroy();
        }
        true
    }

    /// Load every configured (container, asset) pair.
    pub fn initialize(&self, specs: &[AnimationSpec]) {
        for spec in specs {
            self.load(&spec.container_id, &spec.path, &LottieOptions::default());
        }
    }

    /// Register every element matching `selector` with the shared reveal
    /// observer.
    pub fn observe_elements(&self, selector: &str) {
        let Some(document) = document() else {
            return;
        };
        let Ok(elements) = document.query_selector_all(selector) else {
            log::warn!("invalid reveal selector: {selector}");
            return;
        };
        for i in 0..elements.length() {
            if let Some(element) = elements.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                self.reveal_observer.observe(&element);
            }
        }
    }

    /// Fade/slide the footer in once it is well inside the viewport. Uses
    /// its own observer because of the extra bottom margin.
    pub fn observe_footer(&self) -> Result<(), JsValue> {
        let Some(footer) = document()
            .and_then(|d| d.query_selector(".footer").ok().flatten())
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        else {
            return Ok(());
        };

        let style = footer.style();
        style.set_property("opacity", "0")?;
        style.set_property("transform", "translateY(50px)")?;
        style.set_property("transition", "all 0.8s ease-out")?;

        let callback: ObserverCallback = Closure::new(|entries: Array, _observer| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(target) = entry.target().dyn_ref::<HtmlElement>() {
                    _ = target.style().set_property("opacity", "1");
                    _ = target.style().set_property("transform", "translateY(0)");
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(FOOTER_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&footer);

        // The footer observer lives for the page; there is no teardown path.
        callback.forget();
        Ok(())
    }

    /// Destroy the animation under `container_id`, if any.
    pub fn destroy_animation(&self, container_id: &str) -> bool {
        match self.animations.borrow_mut().remove(container_id) {
            Some(handle) => {
                handle.destroy();
                true
            }
            None => false,
        }
    }

    /// Destroy every tracked animation and clear the map.
    pub fn destroy_all_animations(&self) {
        for (_, handle) in self.animations.borrow_mut().drain() {
            handle.destroy();
        }
    }

    /// Number of tracked handles.
    pub fn tracked_count(&self) -> usize {
        self.animations.borrow().len()
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}
