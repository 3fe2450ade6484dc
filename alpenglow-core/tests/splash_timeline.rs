//! End-to-end timeline tests: drive the splash state machine and progress
//! bar the way the UI's 30 ms interval does, with a simulated clock.

use alpenglow_core::{
    sequence::PROGRESS_TICK_MS, LoadingPhase, LoadingSchedule, LoadingSequence, ProgressBar,
    SequenceEvent, SiteConfig,
};

/// Run the sequence on a fixed tick, collecting (elapsed_ms, event) pairs.
fn run_timeline(schedule: LoadingSchedule, until_ms: f64) -> Vec<(f64, SequenceEvent)> {
    let mut seq = LoadingSequence::new(schedule);
    let mut log = Vec::new();
    let tick = PROGRESS_TICK_MS as f64;
    let mut elapsed = 0.0;
    while elapsed <= until_ms {
        for event in seq.advance(elapsed) {
            log.push((elapsed, event));
        }
        elapsed += tick;
    }
    log
}

#[test]
fn default_schedule_fires_at_expected_ticks() {
    let log = run_timeline(LoadingSchedule::default(), 4000.0);
    let events: Vec<_> = log.iter().map(|(_, e)| *e).collect();
    assert_eq!(
        events,
        vec![
            SequenceEvent::PulseStarted,
            SequenceEvent::ZoomStarted,
            SequenceEvent::Completed,
            SequenceEvent::CleanedUp,
        ]
    );

    // Each event lands on the first tick at or after its deadline.
    let at = |e: SequenceEvent| log.iter().find(|(_, ev)| *ev == e).unwrap().0;
    assert!(at(SequenceEvent::PulseStarted) >= 500.0);
    assert!(at(SequenceEvent::PulseStarted) < 500.0 + 30.0);
    assert!(at(SequenceEvent::ZoomStarted) >= 2500.0);
    assert!(at(SequenceEvent::Completed) >= 3000.0);
    assert!(at(SequenceEvent::CleanedUp) >= 3800.0);
    assert!(at(SequenceEvent::CleanedUp) < 3800.0 + 30.0);
}

#[test]
fn progress_bar_fills_before_completion_on_default_schedule() {
    // 100 ticks * 30 ms = 3000 ms, the same wall-clock moment the overlay
    // starts fading. The bar must be full no later than completion.
    let mut bar = ProgressBar::new();
    let mut seq = LoadingSequence::new(LoadingSchedule::default());
    let tick = PROGRESS_TICK_MS as f64;
    let mut elapsed = 0.0;
    loop {
        bar.tick();
        let events = seq.advance(elapsed);
        if events.contains(&SequenceEvent::Completed) {
            break;
        }
        elapsed += tick;
    }
    assert!(bar.is_full());
    assert_eq!(bar.percent(), 100);
}

#[test]
fn compressed_schedule_from_config_still_orders_events() {
    let json = r#"{
        "contact": { "form_endpoint": "e", "email": "a", "phone": "p" },
        "loading": { "pulse_ms": 10, "zoom_ms": 20, "complete_ms": 30, "cleanup_delay_ms": 5 }
    }"#;
    let config = SiteConfig::from_json(json).unwrap();
    let log = run_timeline(config.loading, 120.0);
    let events: Vec<_> = log.iter().map(|(_, e)| *e).collect();
    assert_eq!(
        events,
        vec![
            SequenceEvent::PulseStarted,
            SequenceEvent::ZoomStarted,
            SequenceEvent::Completed,
            SequenceEvent::CleanedUp,
        ]
    );
}

#[test]
fn stalled_tab_catches_up_in_one_tick() {
    // Browsers throttle background-tab timers; a single late tick must
    // carry the sequence all the way through.
    let mut seq = LoadingSequence::new(LoadingSchedule::default());
    seq.advance(0.0);
    let events = seq.advance(60_000.0);
    assert_eq!(events.len(), 4);
    assert_eq!(seq.phase(), LoadingPhase::Done);
}
