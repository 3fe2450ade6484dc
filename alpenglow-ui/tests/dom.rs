//! DOM-facing behavior tests. These run in a browser via
//! `wasm-pack test --headless`; the animation backend is stubbed so no
//! Lottie player is required.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlInputElement};

use alpenglow_core::{ContactConfig, LoadingPhase};
use alpenglow_ui::animations::AnimationManager;
use alpenglow_ui::app::SiteActions;
use alpenglow_ui::components::contact_modal::set_body_scroll_locked;
use alpenglow_ui::components::{ContactModal, LoadingOverlay};
use alpenglow_ui::contact::mailto_url;
use alpenglow_ui::lottie::{AnimationBackend, AnimationHandle, LottieOptions};

wasm_bindgen_test_configure!(run_in_browser);

/// Backend that records every handle it hands out and how often each one
/// was destroyed.
#[derive(Clone, Default)]
struct RecordingBackend {
    handles: Rc<RefCell<Vec<Rc<Cell<u32>>>>>,
}

impl RecordingBackend {
    fn destroy_counts(&self) -> Vec<u32> {
        self.handles.borrow().iter().map(|c| c.get()).collect()
    }
}

struct RecordingHandle {
    destroys: Rc<Cell<u32>>,
}

impl AnimationHandle for RecordingHandle {
    fn destroy(&self) {
        self.destroys.set(self.destroys.get() + 1);
    }
}

impl AnimationBackend for RecordingBackend {
    type Handle = RecordingHandle;

    fn load(&self, _container: &Element, _path: &str, _options: &LottieOptions) -> Self::Handle {
        let destroys = Rc::new(Cell::new(0));
        self.handles.borrow_mut().push(Rc::clone(&destroys));
        RecordingHandle { destroys }
    }
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_div(id: &str) -> Element {
    let el = document().create_element("div").unwrap();
    el.set_id(id);
    document().body().unwrap().append_child(&el).unwrap();
    el
}

/// Wrapper element a component test mounts into; removed at the end of
/// the test so ids do not collide across tests.
fn mount_wrapper() -> web_sys::HtmlElement {
    let wrapper = document().create_element("section").unwrap();
    document().body().unwrap().append_child(&wrapper).unwrap();
    wrapper.unchecked_into()
}

fn test_contact() -> ContactConfig {
    ContactConfig {
        form_endpoint: "https://relay.example/ajax/hello".to_string(),
        email: "hello@example.com".to_string(),
        phone: "+1 555 0100".to_string(),
        mail_subject: "Contact Request".to_string(),
        mail_body: "Hello".to_string(),
    }
}

#[wasm_bindgen_test]
fn load_for_missing_container_is_an_empty_result() {
    let backend = RecordingBackend::default();
    let manager = AnimationManager::new(backend.clone()).unwrap();

    let loaded = manager.load("no-such-container", "assets/x.json", &LottieOptions::default());

    assert!(!loaded);
    assert_eq!(manager.tracked_count(), 0);
    assert!(backend.destroy_counts().is_empty());
}

#[wasm_bindgen_test]
fn reloading_a_container_destroys_the_previous_handle() {
    let backend = RecordingBackend::default();
    let manager = AnimationManager::new(backend.clone()).unwrap();
    let container = mount_div("reload-target");

    assert!(manager.load("reload-target", "assets/a.json", &LottieOptions::default()));
    assert!(manager.load("reload-target", "assets/b.json", &LottieOptions::default()));

    assert_eq!(manager.tracked_count(), 1);
    // First handle destroyed exactly once, replacement still alive.
    assert_eq!(backend.destroy_counts(), vec![1, 0]);

    container.remove();
}

#[wasm_bindgen_test]
fn destroy_all_empties_the_map_and_destroys_each_handle_once() {
    let backend = RecordingBackend::default();
    let manager = AnimationManager::new(backend.clone()).unwrap();
    let a = mount_div("anim-a");
    let b = mount_div("anim-b");

    manager.load("anim-a", "assets/a.json", &LottieOptions::default());
    manager.load("anim-b", "assets/b.json", &LottieOptions::default());
    assert_eq!(manager.tracked_count(), 2);

    manager.destroy_all_animations();

    assert_eq!(manager.tracked_count(), 0);
    assert_eq!(backend.destroy_counts(), vec![1, 1]);

    // Destroying again is a no-op, not a double free.
    manager.destroy_all_animations();
    assert_eq!(backend.destroy_counts(), vec![1, 1]);

    a.remove();
    b.remove();
}

#[wasm_bindgen_test]
fn destroying_an_untracked_id_reports_false() {
    let backend = RecordingBackend::default();
    let manager = AnimationManager::new(backend).unwrap();
    assert!(!manager.destroy_animation("never-loaded"));
}

#[wasm_bindgen_test]
fn observing_an_unmatched_selector_is_a_no_op() {
    let backend = RecordingBackend::default();
    let manager = AnimationManager::new(backend).unwrap();
    manager.observe_elements(".definitely-not-present");
}

#[wasm_bindgen_test]
fn body_scroll_lock_toggles_overflow() {
    let body = document().body().unwrap();

    set_body_scroll_locked(true);
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    set_body_scroll_locked(false);
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "auto");
}

#[wasm_bindgen_test]
fn closing_the_modal_resets_fields_and_unlocks_scroll() {
    let wrapper = mount_wrapper();
    let open = create_rw_signal(false);
    mount_to(wrapper.clone(), move || {
        view! { <ContactModal open=open contact=test_contact()/> }
    });

    open.set(true);
    let body = document().body().unwrap();
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    let name: HtmlInputElement = wrapper
        .query_selector("input[name='name']")
        .unwrap()
        .unwrap()
        .unchecked_into();
    name.set_value("Ada Lovelace");

    // Simulate a played success animation; the close path must clear it.
    let success = document()
        .get_element_by_id("success-lottie-container")
        .unwrap();
    success.set_inner_html("<svg></svg>");

    open.set(false);

    assert_eq!(body.style().get_property_value("overflow").unwrap(), "auto");
    assert_eq!(name.value(), "");
    assert_eq!(success.inner_html(), "");

    wrapper.remove();
}

#[wasm_bindgen_test]
fn site_actions_match_direct_signal_flips() {
    let wrapper = mount_wrapper();
    let open = create_rw_signal(false);
    mount_to(wrapper.clone(), move || {
        view! { <ContactModal open=open contact=test_contact()/> }
    });
    let actions = SiteActions::new(open);

    let modal = wrapper.query_selector("#contactModal").unwrap().unwrap();

    actions.open_modal.call(());
    assert!(open.get_untracked());
    assert!(modal.class_list().contains("active"));

    // Direct signal flip lands the modal in the same state a trigger does.
    open.set(false);
    assert!(!modal.class_list().contains("active"));
    open.set(true);
    assert!(modal.class_list().contains("active"));

    actions.close_modal.call(());
    assert!(!open.get_untracked());
    assert!(!modal.class_list().contains("active"));

    wrapper.remove();
}

#[wasm_bindgen_test]
fn overlay_renders_the_configured_intro_container() {
    let wrapper = mount_wrapper();
    let (phase, _set_phase) = create_signal(LoadingPhase::Intro);
    let (progress, _set_progress) = create_signal(0u32);
    mount_to(wrapper.clone(), move || {
        view! {
            <LoadingOverlay
                phase=phase
                progress=progress
                container_id="custom-intro".to_string()
            />
        }
    });

    assert!(wrapper.query_selector("#custom-intro").unwrap().is_some());

    wrapper.remove();
}

#[wasm_bindgen_test]
fn mailto_url_percent_encodes_subject_and_body() {
    let url = mailto_url("hi@example.com", "Contact Request", "Hello & welcome?");
    assert_eq!(
        url,
        "mailto:hi@example.com?subject=Contact%20Request&body=Hello%20%26%20welcome%3F"
    );
}
