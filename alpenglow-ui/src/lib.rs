//! Browser presentation layer for the Alpenglow marketing site.
//!
//! Renders the page with leptos and wires the behavior controllers
//! (animations, loading splash, decorative effects, contact affordances)
//! to the mounted DOM.

pub mod animations;
pub mod app;
pub mod components;
pub mod contact;
pub mod effects;
pub mod hooks;
pub mod lottie;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(app::App);
}
