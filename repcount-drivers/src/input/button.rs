//! Repetition target button
//!
//! Fires once on the press edge. Contact bounce is masked by a hold-off
//! window after each accepted press.

use embedded_hal::digital::InputPin;
use repcount_core::traits::TargetInput;

/// Default hold-off after an accepted press (ms)
pub const DEFAULT_HOLDOFF_MS: u64 = 100;

/// Active-high push button
pub struct TargetButton<P> {
    pin: P,
    holdoff_ms: u64,
    was_pressed: bool,
    ignore_until: u64,
}

impl<P: InputPin> TargetButton<P> {
    /// Create a button with the given hold-off
    pub fn new(pin: P, holdoff_ms: u64) -> Self {
        Self {
            pin,
            holdoff_ms,
            was_pressed: false,
            ignore_until: 0,
        }
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> TargetInput for TargetButton<P> {
    fn poll_pressed(&mut self, now_ms: u64) -> bool {
        if now_ms < self.ignore_until {
            return false;
        }

        // A failed read counts as released
        let pressed = self.pin.is_high().unwrap_or(false);
        let fired = pressed && !self.was_pressed;
        self.was_pressed = pressed;

        if fired {
            self.ignore_until = now_ms.saturating_add(self.holdoff_ms);
        }
        fired
    }
}
