//! Scroll, pointer, and parallax effects on the decorative layer.
//!
//! Four behaviors share one controller: the header scroll treatment, the
//! pointer-enter ripple, scroll parallax, and mouse tracking. Parallax and
//! mouse tracking share frame state: each input stores its latest value
//! and schedules at most one animation frame ("ticking" guard), and the
//! frame callback writes every shape's transform as an absolute value
//! computed in `alpenglow_core::effects`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use alpenglow_core::effects::{
    header_scrolled, shape_transform, MOUSE_DEBOUNCE_MS, RIPPLE_LIFETIME_MS, SCROLL_DEBOUNCE_MS,
};

/// Class toggled (both directions) on the header past the scroll
/// threshold.
const SCROLLED_CLASS: &str = "scrolled";

/// Elements beyond the shapes that get the pointer ripple.
const RIPPLE_EXTRA_SELECTOR: &str = ".service-card";

/// id of the injected ripple keyframes stylesheet.
const RIPPLE_STYLE_ID: &str = "ripple-styles";

const RIPPLE_KEYFRAMES: &str = "\
@keyframes rippleEffect {
    0% { transform: translate(-50%, -50%) scale(0); opacity: 1; }
    100% { transform: translate(-50%, -50%) scale(4); opacity: 0; }
}";

/// Latest inputs for the shape transform, written by the event listeners
/// and read by the frame callback.
struct FrameState {
    scroll_y: Cell<f64>,
    /// Cursor position normalized over the viewport; None until the first
    /// pointer move.
    mouse: Cell<Option<(f64, f64)>>,
    /// At most one animation frame pending at a time.
    ticking: Cell<bool>,
}

pub struct UiEffects {
    shape_selector: Rc<String>,
    state: Rc<FrameState>,
}

impl UiEffects {
    pub fn new(shape_selector: String) -> Self {
        Self {
            shape_selector: Rc::new(shape_selector),
            state: Rc::new(FrameState {
                scroll_y: Cell::new(0.0),
                mouse: Cell::new(None),
                ticking: Cell::new(false),
            }),
        }
    }

    /// Install all listeners. They live for the page; there is no
    /// teardown path.
    pub fn attach(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        inject_ripple_styles(&document)?;
        self.attach_scroll(&window)?;
        self.attach_ripple(&document)?;
        self.attach_mouse_tracking(&document, &window)?;
        Ok(())
    }

    /// Scroll drives both the debounced header treatment and the parallax
    /// frame.
    fn attach_scroll(&self, window: &Window) -> Result<(), JsValue> {
        let state = Rc::clone(&self.state);
        let selector = Rc::clone(&self.shape_selector);
        let pending_header: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let closure: Closure<dyn FnMut()> = Closure::new(move || {
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);

            state.scroll_y.set(scroll_y);
            request_shape_frame(&state, &selector);

            // Each scroll event restarts the quiet period; dropping the
            // previous Timeout cancels it. The offset is re-read once the
            // burst settles.
            pending_header
                .borrow_mut()
                .replace(Timeout::new(SCROLL_DEBOUNCE_MS, || {
                    let scroll_y = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    apply_header_state(scroll_y);
                }));
        });

        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Capture-phase mouseenter delegation; mouseenter does not bubble.
    fn attach_ripple(&self, document: &Document) -> Result<(), JsValue> {
        let ripple_selector = format!("{}, {}", self.shape_selector, RIPPLE_EXTRA_SELECTOR);

        let closure: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |event: MouseEvent| {
            let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            if target.matches(&ripple_selector).unwrap_or(false) {
                if let Err(err) = spawn_ripple(&target) {
                    log::debug!("ripple failed: {err:?}");
                }
            }
        });

        let options = web_sys::AddEventListenerOptions::new();
        options.set_capture(true);
        document.add_event_listener_with_callback_and_add_event_listener_options(
            "mouseenter",
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        closure.forget();
        Ok(())
    }

    /// Pointer moves are debounced to roughly one update per frame before
    /// feeding the shared frame state.
    fn attach_mouse_tracking(&self, document: &Document, window: &Window) -> Result<(), JsValue> {
        let state = Rc::clone(&self.state);
        let selector = Rc::clone(&self.shape_selector);
        let window = window.clone();
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let closure: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |event: MouseEvent| {
            let (w, h) = viewport_size(&window);
            if w <= 0.0 || h <= 0.0 {
                return;
            }
            let normalized = (event.client_x() as f64 / w, event.client_y() as f64 / h);

            let state = Rc::clone(&state);
            let selector = Rc::clone(&selector);
            pending
                .borrow_mut()
                .replace(Timeout::new(MOUSE_DEBOUNCE_MS, move || {
                    state.mouse.set(Some(normalized));
                    request_shape_frame(&state, &selector);
                }));
        });

        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

fn apply_header_state(scroll_y: f64) {
    let Some(header) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".header").ok().flatten())
    else {
        return;
    };
    let class_list = header.class_list();
    if header_scrolled(scroll_y) {
        _ = class_list.add_1(SCROLLED_CLASS);
    } else {
        _ = class_list.remove_1(SCROLLED_CLASS);
    }
}

/// Schedule one animation frame that repositions every shape, unless a
/// frame is already pending.
fn request_shape_frame(state: &Rc<FrameState>, selector: &Rc<String>) {
    if state.ticking.get() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    state.ticking.set(true);

    let state = Rc::clone(state);
    let selector = Rc::clone(selector);
    let frame_state = Rc::clone(&state);
    let frame = Closure::once_into_js(move || {
        frame_state.ticking.set(false);
        apply_shape_transforms(&frame_state, &selector);
    });
    if window
        .request_animation_frame(frame.unchecked_ref())
        .is_err()
    {
        state.ticking.set(false);
    }
}

fn apply_shape_transforms(state: &FrameState, selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(shapes) = document.query_selector_all(selector) else {
        return;
    };

    let scroll_y = state.scroll_y.get();
    let mouse = state.mouse.get();
    for index in 0..shapes.length() {
        let Some(shape) = shapes
            .item(index)
            .and_then(|n| n.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let transform = shape_transform(scroll_y, mouse, index as usize);
        _ = shape.style().set_property("transform", &transform);
    }
}

/// Append a transient expanding circle to `element`; it removes itself
/// after the ripple animation finishes.
fn spawn_ripple(element: &HtmlElement) -> Result<(), JsValue> {
    let document = element.owner_document().ok_or("no owner document")?;
    let ripple = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()?;

    let style = ripple.style();
    style.set_property("position", "absolute")?;
    style.set_property("width", "10px")?;
    style.set_property("height", "10px")?;
    style.set_property("background", "rgba(255, 255, 255, 0.3)")?;
    style.set_property("border-radius", "50%")?;
    style.set_property("top", "50%")?;
    style.set_property("left", "50%")?;
    style.set_property("transform", "translate(-50%, -50%)")?;
    style.set_property("animation", "rippleEffect 0.6s ease-out")?;
    style.set_property("pointer-events", "none")?;

    element.append_child(&ripple)?;
    Timeout::new(RIPPLE_LIFETIME_MS, move || {
        ripple.remove();
    })
    .forget();
    Ok(())
}

/// Add the ripple keyframes stylesheet once per document.
fn inject_ripple_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(RIPPLE_STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(RIPPLE_STYLE_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    document
        .head()
        .ok_or_else(|| JsValue::from_str("no head"))?
        .append_child(&style)?;
    Ok(())
}
