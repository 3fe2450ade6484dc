//! Bindings to the page-global `lottie` player.
//!
//! The player is consumed through a load/destroy contract only; nothing
//! here inspects animation internals. [`AnimationBackend`] abstracts the
//! boundary so the animation manager can be exercised in tests without
//! the real player present.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// Opaque handle to a running animation instance.
    pub type LottieAnimation;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &LottieAnimation);

    #[wasm_bindgen(js_namespace = lottie, js_name = loadAnimation)]
    fn load_animation_raw(config: &JsValue) -> LottieAnimation;
}

/// Player configuration merged over the defaults (SVG renderer, looping,
/// autoplay).
#[derive(Clone, Debug)]
pub struct LottieOptions {
    pub renderer: &'static str,
    pub looped: bool,
    pub autoplay: bool,
}

impl Default for LottieOptions {
    fn default() -> Self {
        Self {
            renderer: "svg",
            looped: true,
            autoplay: true,
        }
    }
}

impl LottieOptions {
    /// One-shot variant used by the success and copied confirmations.
    pub fn once() -> Self {
        Self {
            looped: false,
            ..Self::default()
        }
    }
}

fn set(config: &Object, key: &str, value: &JsValue) {
    // Reflect::set only fails on frozen/sealed objects; ours is fresh.
    Reflect::set(config, &JsValue::from_str(key), value).expect("config object is writable");
}

/// Start an animation against `container`. The caller owns the returned
/// handle and is responsible for destroying it.
pub fn load_animation(container: &Element, path: &str, options: &LottieOptions) -> LottieAnimation {
    let config = Object::new();
    set(&config, "container", container.as_ref());
    set(&config, "renderer", &JsValue::from_str(options.renderer));
    set(&config, "loop", &JsValue::from_bool(options.looped));
    set(&config, "autoplay", &JsValue::from_bool(options.autoplay));
    set(&config, "path", &JsValue::from_str(path));
    load_animation_raw(&config)
}

/// A running animation that can be torn down.
pub trait AnimationHandle {
    fn destroy(&self);
}

impl AnimationHandle for LottieAnimation {
    fn destroy(&self) {
        LottieAnimation::destroy(self);
    }
}

/// Seam between the animation manager and the player.
pub trait AnimationBackend {
    type Handle: AnimationHandle + 'static;

    fn load(&self, container: &Element, path: &str, options: &LottieOptions) -> Self::Handle;
}

/// The production backend: the page-global `lottie` object.
#[derive(Clone, Copy, Debug, Default)]
pub struct LottieBackend;

impl AnimationBackend for LottieBackend {
    type Handle = LottieAnimation;

    fn load(&self, container: &Element, path: &str, options: &LottieOptions) -> LottieAnimation {
        load_animation(container, path, options)
    }
}
