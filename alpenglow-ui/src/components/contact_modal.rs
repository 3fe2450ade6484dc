//! Contact form modal.
//!
//! Closed ⇄ open, with a one-way submit lifecycle while open:
//! idle → sending → success (auto-close) or back to idle on failure.
//! Failure surfaces a blocking alert and keeps the modal open; there is
//! no retry and no request timeout beyond the browser default.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{FormData, HtmlFormElement, Request, RequestInit, Response};

use crate::lottie::{self, LottieAnimation, LottieOptions};
use alpenglow_core::ContactConfig;

/// id of the container the success animation mounts into.
const SUCCESS_CONTAINER_ID: &str = "success-lottie-container";

/// Asset played on successful submission.
const SUCCESS_ANIMATION_PATH: &str = "assets/success.json";

/// Delay before a successful submission closes the modal, in
/// milliseconds.
const SUCCESS_CLOSE_DELAY_MS: u32 = 4500;

/// Captcha-disable flag the form relay expects.
const CAPTCHA_FIELD: (&str, &str) = ("_captcha", "false");

/// Submit lifecycle of the form while the modal is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Success,
}

impl SubmitState {
    pub fn button_label(self) -> &'static str {
        match self {
            SubmitState::Sending => "Sending...",
            _ => "Send Message",
        }
    }

    pub fn is_loading(self) -> bool {
        self == SubmitState::Sending
    }

    pub fn is_success(self) -> bool {
        self == SubmitState::Success
    }
}

/// Lock or unlock body scrolling behind the modal.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "auto" };
    _ = body.style().set_property("overflow", value);
}

#[component]
pub fn ContactModal(
    /// Shared open/closed state; `SiteActions` flips the same signal.
    open: RwSignal<bool>,
    contact: ContactConfig,
) -> impl IntoView {
    let submit_state = create_rw_signal(SubmitState::default());
    let form_ref = create_node_ref::<html::Form>();
    let success_handle: Rc<RefCell<Option<LottieAnimation>>> = Rc::new(RefCell::new(None));

    // Every way of closing (backdrop, close button, success timeout,
    // SiteActions) funnels through this effect, so the reset is uniform:
    // unlock scroll, revert the button, restore the form view, clear
    // fields, release the success animation.
    {
        let success_handle = Rc::clone(&success_handle);
        create_effect(move |was_open: Option<bool>| {
            let is_open = open.get();
            if is_open {
                set_body_scroll_locked(true);
            } else if was_open == Some(true) {
                set_body_scroll_locked(false);
                submit_state.set(SubmitState::Idle);
                if let Some(handle) = success_handle.borrow_mut().take() {
                    handle.destroy();
                }
                if let Some(container) = get_element_by_id(SUCCESS_CONTAINER_ID) {
                    container.set_inner_html("");
                }
                if let Some(form) = form_ref.get_untracked() {
                    form.unchecked_ref::<HtmlFormElement>().reset();
                }
            }
            is_open
        });
    }

    let endpoint = contact.form_endpoint.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submit_state.get_untracked() != SubmitState::Idle {
            return;
        }
        let Some(form_el) = form_ref.get_untracked() else {
            return;
        };
        let form = form_el.unchecked_ref::<HtmlFormElement>().clone();
        submit_state.set(SubmitState::Sending);

        let endpoint = endpoint.clone();
        let success_handle = Rc::clone(&success_handle);
        spawn_local(async move {
            match post_form(&endpoint, &form).await {
                Ok(()) => {
                    submit_state.set(SubmitState::Success);
                    if let Some(container) = get_element_by_id(SUCCESS_CONTAINER_ID) {
                        let handle = lottie::load_animation(
                            &container,
                            SUCCESS_ANIMATION_PATH,
                            &LottieOptions::once(),
                        );
                        if let Some(old) = success_handle.borrow_mut().replace(handle) {
                            old.destroy();
                        }
                    }
                    Timeout::new(SUCCESS_CLOSE_DELAY_MS, move || {
                        // The close effect empties the success container
                        // and releases the animation.
                        open.set(false);
                    })
                    .forget();
                }
                Err(err) => {
                    log::error!("contact form submission failed: {err:?}");
                    alert("Failed to send message. Please try again.");
                    submit_state.set(SubmitState::Idle);
                }
            }
        });
    };

    view! {
        <div
            id="contactModal"
            class="modal-overlay"
            class:active=move || open.get()
            on:click=move |_| open.set(false)
        >
            <div class="modal" on:click=|e| e.stop_propagation()>
                <button class="modal-close" on:click=move |_| open.set(false)>
                    "\u{00d7}"
                </button>

                <div
                    id="form-wrapper"
                    style:display=move || if submit_state.get().is_success() { "none" } else { "block" }
                >
                    <h2>"Tell us about your project"</h2>
                    <form id="contactForm" node_ref=form_ref on:submit=on_submit>
                        <input type="text" name="name" placeholder="Your name" required=true/>
                        <input type="email" name="email" placeholder="Your email" required=true/>
                        <textarea name="message" placeholder="What are you building?" required=true></textarea>
                        <button
                            id="submitBtn"
                            type="submit"
                            class:loading=move || submit_state.get().is_loading()
                        >
                            {move || submit_state.get().button_label()}
                        </button>
                    </form>
                </div>

                <div
                    id="success-animation"
                    style:display=move || if submit_state.get().is_success() { "block" } else { "none" }
                >
                    <div id=SUCCESS_CONTAINER_ID></div>
                    <p>"Thanks! We will be in touch shortly."</p>
                </div>
            </div>
        </div>
    }
}

/// Serialize the form and POST it to the relay. Any HTTP-ok status is
/// success; the response body is not parsed.
async fn post_form(endpoint: &str, form: &HtmlFormElement) -> Result<(), JsValue> {
    let data = FormData::new_with_form(form)?;
    data.append_with_str(CAPTCHA_FIELD.0, CAPTCHA_FIELD.1)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(data.as_ref());
    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if response.ok() {
        Ok(())
    } else {
        Err(JsValue::from_str(&format!(
            "form relay returned {}",
            response.status()
        )))
    }
}

fn get_element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_and_success_share_the_resting_label() {
        assert_eq!(SubmitState::Idle.button_label(), "Send Message");
        assert_eq!(SubmitState::Success.button_label(), "Send Message");
    }

    #[test]
    fn sending_shows_the_loading_affordance() {
        assert_eq!(SubmitState::Sending.button_label(), "Sending...");
        assert!(SubmitState::Sending.is_loading());
        assert!(!SubmitState::Idle.is_loading());
        assert!(!SubmitState::Success.is_loading());
    }

    #[test]
    fn failure_reverts_to_idle_semantics() {
        // The failure path sets Idle; Idle must both drop the loading
        // affordance and restore the resting label.
        let reverted = SubmitState::Idle;
        assert!(!reverted.is_loading());
        assert_eq!(reverted.button_label(), "Send Message");
    }
}
