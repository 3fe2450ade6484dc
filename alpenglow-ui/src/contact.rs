//! Phone and email contact affordances.
//!
//! On devices without native tel/mailto handlers, both actions fall back
//! to copying the address to the clipboard and showing a transient
//! confirmation. Clipboard failures are logged only; none of these paths
//! may take the page down.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlElement, HtmlTextAreaElement, MouseEvent};

use crate::lottie::{self, LottieOptions};
use alpenglow_core::{ContactConfig, DeviceCapabilities};

/// Selector for the phone affordance.
const CALL_LINK_SELECTOR: &str = ".call-link";

/// id of the email affordance.
const EMAIL_BUTTON_ID: &str = "emailBtn";

/// id of the copied-confirmation overlay and its animation container.
const COPIED_OVERLAY_ID: &str = "copied-animation";
const COPIED_CONTAINER_ID: &str = "copied-lottie-container";

/// How long the copied confirmation stays up, in milliseconds.
const COPIED_LIFETIME_MS: u32 = 3000;

/// Grace period before concluding the mail client did not launch, in
/// milliseconds.
const MAIL_WINDOW_GRACE_MS: u32 = 1000;

/// Asset played by the copied confirmation.
const COPIED_ANIMATION_PATH: &str = "assets/copy-confirm.json";

pub struct ContactActions {
    capabilities: DeviceCapabilities,
    contact: ContactConfig,
}

impl ContactActions {
    pub fn new(contact: ContactConfig) -> Self {
        let user_agent = web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        Self {
            capabilities: DeviceCapabilities::from_user_agent(&user_agent),
            contact,
        }
    }

    /// Install the click handlers. Missing affordances are skipped.
    pub fn attach(&self) -> Result<(), JsValue> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Ok(());
        };
        self.attach_phone(&document)?;
        self.attach_email(&document)?;
        Ok(())
    }

    /// Desktop: intercept the tel: link and copy the number instead of
    /// letting the browser dead-end on it. Mobile: let the native dialer
    /// take it.
    fn attach_phone(&self, document: &Document) -> Result<(), JsValue> {
        let Some(link) = document.query_selector(CALL_LINK_SELECTOR)? else {
            return Ok(());
        };

        let native = self.capabilities.native_handlers;
        let phone = self.contact.phone.clone();
        let closure: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |event: MouseEvent| {
            if !native {
                event.prevent_default();
                copy_to_clipboard(phone.clone());
            }
        });
        link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Mobile: navigate straight to the mailto draft. Desktop: open it in
    /// a new tab and, if that window failed to open or was closed within
    /// the grace period, assume no mail client and copy the address.
    fn attach_email(&self, document: &Document) -> Result<(), JsValue> {
        let Some(button) = document.get_element_by_id(EMAIL_BUTTON_ID) else {
            return Ok(());
        };

        let native = self.capabilities.native_handlers;
        let email = self.contact.email.clone();
        let mailto = mailto_url(
            &self.contact.email,
            &self.contact.mail_subject,
            &self.contact.mail_body,
        );
        let closure: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |_: MouseEvent| {
            let Some(window) = web_sys::window() else {
                return;
            };
            if native {
                _ = window.location().set_href(&mailto);
                return;
            }

            let opened = window
                .open_with_url_and_target(&mailto, "_blank")
                .ok()
                .flatten();
            let email = email.clone();
            Timeout::new(MAIL_WINDOW_GRACE_MS, move || {
                // Best-effort heuristic; a mail-client launch cannot be
                // detected reliably.
                let launched = matches!(opened.as_ref().map(|w| w.closed()), Some(Ok(false)));
                if !launched {
                    copy_to_clipboard(email);
                }
            })
            .forget();
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

/// Build a mailto URL with percent-encoded subject and body.
pub fn mailto_url(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{email}?subject={}&body={}",
        String::from(js_sys::encode_uri_component(subject)),
        String::from(js_sys::encode_uri_component(body)),
    )
}

/// Copy `text` to the clipboard and show the copied confirmation.
/// Failures are logged, never surfaced.
pub fn copy_to_clipboard(text: String) {
    spawn_local(async move {
        match write_clipboard(&text).await {
            Ok(()) => show_copied_confirmation(),
            Err(err) => log::error!("failed to copy to clipboard: {err:?}"),
        }
    });
}

/// Async clipboard API when present, legacy select-and-copy otherwise.
async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let navigator = window.navigator();

    let has_async_clipboard = js_sys::Reflect::get(navigator.as_ref(), &"clipboard".into())
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);

    if has_async_clipboard {
        JsFuture::from(navigator.clipboard().write_text(text)).await?;
        return Ok(());
    }

    // Legacy path: select the text in an off-screen textarea and copy it.
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    textarea.set_value(text);
    body.append_child(&textarea)?;
    textarea.select();
    let copied = document
        .unchecked_ref::<web_sys::HtmlDocument>()
        .exec_command("copy")
        .unwrap_or(false);
    body.remove_child(&textarea)?;
    if copied {
        Ok(())
    } else {
        Err(JsValue::from_str("execCommand copy failed"))
    }
}

/// Show the copied overlay with its one-shot animation, then clear both
/// after three seconds.
fn show_copied_confirmation() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let overlay = document
        .get_element_by_id(COPIED_OVERLAY_ID)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    if let Some(overlay) = &overlay {
        _ = overlay.style().set_property("display", "block");
    }

    let container = document.get_element_by_id(COPIED_CONTAINER_ID);
    let handle = container
        .as_ref()
        .map(|c| lottie::load_animation(c, COPIED_ANIMATION_PATH, &LottieOptions::once()));

    Timeout::new(COPIED_LIFETIME_MS, move || {
        if let Some(handle) = &handle {
            handle.destroy();
        }
        if let Some(container) = &container {
            container.set_inner_html("");
        }
        if let Some(overlay) = &overlay {
            _ = overlay.style().set_property("display", "none");
        }
    })
    .forget();
}
