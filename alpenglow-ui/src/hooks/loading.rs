//! Loading splash orchestration.
//!
//! Two 30 ms intervals drive the splash: one ticks the cosmetic progress
//! bar and pauses itself at 100%, the other feeds real elapsed time into
//! the [`LoadingSequence`] state machine and pauses itself once the
//! sequence is done. While the sequence has not revealed the page, a
//! `loading` marker sits on `<body>`/`<html>` and scroll input is
//! suppressed so the user cannot scroll behind the splash.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, KeyboardEvent};

use alpenglow_core::sequence::PROGRESS_TICK_MS;
use alpenglow_core::{LoadingPhase, LoadingSchedule, LoadingSequence, ProgressBar, SequenceEvent};

/// Marker class present on `<body>` and `<html>` while the splash runs.
const LOADING_CLASS: &str = "loading";

/// Key codes that scroll the page (space, page up/down, end, home,
/// arrows).
const NAV_KEY_CODES: [u32; 9] = [32, 33, 34, 35, 36, 37, 38, 39, 40];

/// Signals exposed to the overlay and main-content components.
#[derive(Clone, Copy)]
pub struct LoadingHandle {
    pub phase: ReadSignal<LoadingPhase>,
    pub progress: ReadSignal<u32>,
    pub is_loading: Signal<bool>,
}

type PauseSlot = Rc<RefCell<Option<Rc<dyn Fn()>>>>;

fn pause_via(slot: &PauseSlot) {
    let pause = slot.borrow().clone();
    if let Some(pause) = pause {
        pause();
    }
}

/// Drive the splash sequence. `on_event` fires for every sequence
/// transition; the caller uses it to release the intro animation on
/// cleanup.
pub fn use_loading_sequence(
    schedule: LoadingSchedule,
    on_event: Callback<SequenceEvent>,
) -> LoadingHandle {
    let (phase, set_phase) = create_signal(LoadingPhase::Intro);
    let (progress, set_progress) = create_signal(0u32);

    set_loading_marker(true);

    // Cosmetic progress bar: +1% per tick, driver stops at 100.
    let bar = Rc::new(RefCell::new(ProgressBar::new()));
    let bar_pause: PauseSlot = Rc::new(RefCell::new(None));
    {
        let bar_pause_inner = Rc::clone(&bar_pause);
        let pausable = leptos_use::use_interval_fn(
            move || {
                let percent = bar.borrow_mut().tick();
                set_progress.set(percent);
                if percent >= 100 {
                    pause_via(&bar_pause_inner);
                }
            },
            PROGRESS_TICK_MS as u64,
        );
        bar_pause.borrow_mut().replace(Rc::new(pausable.pause));
    }

    // Sequence driver: real elapsed time in, phase transitions out.
    let started_at = now_ms();
    let sequence = Rc::new(RefCell::new(LoadingSequence::new(schedule)));
    let seq_pause: PauseSlot = Rc::new(RefCell::new(None));
    {
        let seq_pause_inner = Rc::clone(&seq_pause);
        let pausable = leptos_use::use_interval_fn(
            move || {
                let events = sequence.borrow_mut().advance(now_ms() - started_at);
                if events.is_empty() {
                    return;
                }
                for event in &events {
                    match event {
                        SequenceEvent::Completed => set_loading_marker(false),
                        SequenceEvent::CleanedUp => pause_via(&seq_pause_inner),
                        _ => {}
                    }
                    on_event.call(*event);
                }
                set_phase.set(sequence.borrow().phase());
            },
            PROGRESS_TICK_MS as u64,
        );
        seq_pause.borrow_mut().replace(Rc::new(pausable.pause));
    }

    let is_loading = Signal::derive(move || phase.get() < LoadingPhase::Revealed);
    suppress_scroll_input(is_loading);

    LoadingHandle {
        phase,
        progress,
        is_loading,
    }
}

/// Block wheel, touch, and keyboard scrolling while the splash is up.
/// The listeners stay installed for the page and become no-ops once the
/// content is revealed. Wheel and touchmove must be registered
/// non-passive or preventDefault is ignored.
fn suppress_scroll_input(is_loading: Signal<bool>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let options = AddEventListenerOptions::new();
    options.set_passive(false);

    for kind in ["wheel", "touchmove"] {
        let closure: Closure<dyn FnMut(Event)> = Closure::new(move |event: Event| {
            if is_loading.get_untracked() {
                event.prevent_default();
            }
        });
        if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("failed to install {kind} lock: {err:?}");
        }
        closure.forget();
    }

    let closure: Closure<dyn FnMut(KeyboardEvent)> = Closure::new(move |event: KeyboardEvent| {
        if is_loading.get_untracked() && NAV_KEY_CODES.contains(&event.key_code()) {
            event.prevent_default();
        }
    });
    if let Err(err) = document
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
    {
        log::warn!("failed to install keydown lock: {err:?}");
    }
    closure.forget();
}

fn set_loading_marker(on: bool) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let mut targets: Vec<web_sys::Element> = Vec::new();
    if let Some(body) = document.body() {
        targets.push(body.into());
    }
    if let Some(root) = document.document_element() {
        targets.push(root);
    }
    for target in targets {
        if on {
            _ = target.class_list().add_1(LOADING_CLASS);
        } else {
            _ = target.class_list().remove_1(LOADING_CLASS);
        }
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
