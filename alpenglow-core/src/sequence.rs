//! Loading splash sequence.
//!
//! The splash is an explicit state machine driven by elapsed time supplied
//! by the caller, so the whole sequence is testable with a fake clock. The
//! UI crate owns the single interval that feeds it `performance.now()`
//! deltas and maps the emitted events onto DOM classes.

use serde::Deserialize;

/// Timings for the splash sequence, in milliseconds since the sequence
/// started. Deadlines are "no earlier than": a late tick that lands past
/// several deadlines fires all of them, in order.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct LoadingSchedule {
    /// When the intro animation starts pulsing
    #[serde(default = "default_pulse_ms")]
    pub pulse_ms: f64,
    /// When the zoom-focus treatment begins
    #[serde(default = "default_zoom_ms")]
    pub zoom_ms: f64,
    /// When the overlay fades and main content is revealed
    #[serde(default = "default_complete_ms")]
    pub complete_ms: f64,
    /// Delay after completion before the overlay is removed outright and
    /// the intro animation is released
    #[serde(default = "default_cleanup_delay_ms")]
    pub cleanup_delay_ms: f64,
}

fn default_pulse_ms() -> f64 {
    500.0
}

fn default_zoom_ms() -> f64 {
    2500.0
}

fn default_complete_ms() -> f64 {
    3000.0
}

fn default_cleanup_delay_ms() -> f64 {
    800.0
}

impl Default for LoadingSchedule {
    fn default() -> Self {
        Self {
            pulse_ms: default_pulse_ms(),
            zoom_ms: default_zoom_ms(),
            complete_ms: default_complete_ms(),
            cleanup_delay_ms: default_cleanup_delay_ms(),
        }
    }
}

/// Phases of the splash, in order. Transitions are monotone; there is no
/// way back to an earlier phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadingPhase {
    /// Intro animation playing, progress bar filling
    Intro,
    /// Pulse treatment active
    Pulse,
    /// Zoom-focus treatment active
    Zoom,
    /// Overlay fading out, main content shown, input unlocked
    Revealed,
    /// Overlay removed, intro animation released
    Done,
}

/// One-shot transitions emitted by [`LoadingSequence::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceEvent {
    PulseStarted,
    ZoomStarted,
    Completed,
    CleanedUp,
}

/// The splash state machine. Feed it elapsed milliseconds; it emits each
/// [`SequenceEvent`] exactly once, in order.
#[derive(Clone, Debug)]
pub struct LoadingSequence {
    schedule: LoadingSchedule,
    phase: LoadingPhase,
}

impl LoadingSequence {
    pub fn new(schedule: LoadingSchedule) -> Self {
        Self {
            schedule,
            phase: LoadingPhase::Intro,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == LoadingPhase::Done
    }

    /// Advance to the phase matching `elapsed_ms`, returning every
    /// transition crossed on the way. Time moving backwards is treated as
    /// no time passing.
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<SequenceEvent> {
        let mut events = Vec::new();

        if self.phase < LoadingPhase::Pulse && elapsed_ms >= self.schedule.pulse_ms {
            self.phase = LoadingPhase::Pulse;
            events.push(SequenceEvent::PulseStarted);
        }
        if self.phase < LoadingPhase::Zoom && elapsed_ms >= self.schedule.zoom_ms {
            self.phase = LoadingPhase::Zoom;
            events.push(SequenceEvent::ZoomStarted);
        }
        if self.phase < LoadingPhase::Revealed && elapsed_ms >= self.schedule.complete_ms {
            self.phase = LoadingPhase::Revealed;
            events.push(SequenceEvent::Completed);
        }
        if self.phase < LoadingPhase::Done
            && elapsed_ms >= self.schedule.complete_ms + self.schedule.cleanup_delay_ms
        {
            self.phase = LoadingPhase::Done;
            events.push(SequenceEvent::CleanedUp);
        }

        events
    }
}

/// Interval between progress bar ticks, in milliseconds.
pub const PROGRESS_TICK_MS: u32 = 30;

/// The cosmetic splash progress bar: one percent per tick, capped at 100.
/// It is not tied to real asset loading; with the 30 ms tick it fills in
/// about three seconds regardless of network state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressBar {
    percent: u32,
}

impl ProgressBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn is_full(&self) -> bool {
        self.percent >= 100
    }

    /// Advance one tick and return the new fill percentage. Ticking a full
    /// bar is a no-op; the caller should stop its driver once full.
    pub fn tick(&mut self) -> u32 {
        if self.percent < 100 {
            self.percent += 1;
        }
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_in_intro() {
        let seq = LoadingSequence::new(LoadingSchedule::default());
        assert_eq!(seq.phase(), LoadingPhase::Intro);
        assert!(!seq.is_done());
    }

    #[test]
    fn advance_before_first_deadline_emits_nothing() {
        let mut seq = LoadingSequence::new(LoadingSchedule::default());
        assert!(seq.advance(499.9).is_empty());
        assert_eq!(seq.phase(), LoadingPhase::Intro);
    }

    #[test]
    fn events_fire_in_order_with_small_steps() {
        let mut seq = LoadingSequence::new(LoadingSchedule::default());
        assert_eq!(seq.advance(500.0), vec![SequenceEvent::PulseStarted]);
        assert_eq!(seq.advance(2500.0), vec![SequenceEvent::ZoomStarted]);
        assert_eq!(seq.advance(3000.0), vec![SequenceEvent::Completed]);
        assert_eq!(seq.advance(3800.0), vec![SequenceEvent::CleanedUp]);
        assert!(seq.is_done());
    }

    #[test]
    fn late_tick_fires_all_skipped_events_in_order() {
        let mut seq = LoadingSequence::new(LoadingSchedule::default());
        let events = seq.advance(10_000.0);
        assert_eq!(
            events,
            vec![
                SequenceEvent::PulseStarted,
                SequenceEvent::ZoomStarted,
                SequenceEvent::Completed,
                SequenceEvent::CleanedUp,
            ]
        );
        assert!(seq.is_done());
    }

    #[test]
    fn events_are_emitted_exactly_once() {
        let mut seq = LoadingSequence::new(LoadingSchedule::default());
        assert_eq!(seq.advance(600.0), vec![SequenceEvent::PulseStarted]);
        assert!(seq.advance(700.0).is_empty());
        assert!(seq.advance(600.0).is_empty());
    }

    #[test]
    fn time_moving_backwards_does_not_regress_phase() {
        let mut seq = LoadingSequence::new(LoadingSchedule::default());
        seq.advance(2600.0);
        assert_eq!(seq.phase(), LoadingPhase::Zoom);
        assert!(seq.advance(100.0).is_empty());
        assert_eq!(seq.phase(), LoadingPhase::Zoom);
    }

    #[test]
    fn done_sequence_emits_nothing_further() {
        let mut seq = LoadingSequence::new(LoadingSchedule::default());
        seq.advance(10_000.0);
        assert!(seq.advance(20_000.0).is_empty());
    }

    #[test]
    fn progress_bar_fills_one_percent_per_tick() {
        let mut bar = ProgressBar::new();
        assert_eq!(bar.percent(), 0);
        assert_eq!(bar.tick(), 1);
        assert_eq!(bar.tick(), 2);
    }

    #[test]
    fn progress_bar_caps_at_one_hundred() {
        let mut bar = ProgressBar::new();
        for _ in 0..150 {
            bar.tick();
        }
        assert_eq!(bar.percent(), 100);
        assert!(bar.is_full());
        assert_eq!(bar.tick(), 100);
    }

    #[test]
    fn progress_bar_reaches_full_after_exactly_one_hundred_ticks() {
        let mut bar = ProgressBar::new();
        for _ in 0..99 {
            bar.tick();
        }
        assert!(!bar.is_full());
        bar.tick();
        assert!(bar.is_full());
    }
}
