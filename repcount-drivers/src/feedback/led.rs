//! Per-exercise LED feedback
//!
//! One LED per exercise, lit while its counter is below the target. A
//! counted repetition blinks the LED (off, then back on after a short
//! pause); reaching the target leaves it dark. The pause is a deadline
//! serviced from `poll`, never a sleep.

use embedded_hal::digital::OutputPin;
use repcount_core::traits::{Feedback, FeedbackOutput};
use repcount_core::{Exercise, FeedbackAction, RepCounters, RepTarget};

/// Default dark time of a completion blink (ms)
pub const DEFAULT_BLINK_OFF_MS: u64 = 50;

/// Four active-high LEDs indexed by `Exercise::index()`
pub struct LedBank<P> {
    leds: [P; Exercise::COUNT],
    /// When each LED should come back on
    relight_at: [Option<u64>; Exercise::COUNT],
    blink_off_ms: u64,
}

impl<P: OutputPin> LedBank<P> {
    /// Create a bank; every LED starts lit
    pub fn new(leds: [P; Exercise::COUNT], blink_off_ms: u64) -> Self {
        let mut bank = Self {
            leds,
            relight_at: [None; Exercise::COUNT],
            blink_off_ms,
        };
        for exercise in Exercise::ALL {
            bank.set(exercise, true);
        }
        bank
    }

    /// Check if a blink is still waiting to relight
    pub fn is_blinking(&self, exercise: Exercise) -> bool {
        self.relight_at[exercise.index()].is_some()
    }

    /// Access an LED pin
    pub fn led(&self, exercise: Exercise) -> &P {
        &self.leds[exercise.index()]
    }

    fn set(&mut self, exercise: Exercise, on: bool) {
        let pin = &mut self.leds[exercise.index()];
        // GPIO writes are infallible on supported boards
        let _ = if on { pin.set_high() } else { pin.set_low() };
    }
}

impl<P: OutputPin> FeedbackOutput for LedBank<P> {
    fn notify(&mut self, feedback: Feedback, now_ms: u64) {
        let slot = feedback.exercise.index();
        match feedback.action {
            FeedbackAction::Blink => {
                self.set(feedback.exercise, false);
                self.relight_at[slot] = Some(now_ms.saturating_add(self.blink_off_ms));
            }
            FeedbackAction::Latch => {
                self.set(feedback.exercise, false);
                self.relight_at[slot] = None;
            }
            FeedbackAction::Suppress => {}
        }
    }

    fn refresh(&mut self, counters: &RepCounters, target: &RepTarget) {
        for (exercise, count) in counters.iter() {
            self.relight_at[exercise.index()] = None;
            self.set(exercise, !target.is_reached(count));
        }
    }

    fn poll(&mut self, now_ms: u64) {
        for exercise in Exercise::ALL {
            if let Some(deadline) = self.relight_at[exercise.index()] {
                if now_ms >= deadline {
                    self.relight_at[exercise.index()] = None;
                    self.set(exercise, true);
                }
            }
        }
    }
}
