//! Per-tick classifier output

use core::fmt::{self, Write};

use heapless::String;

use crate::catalog::Exercise;
use crate::sample::OrientationSample;
use crate::signal::Averages;
use crate::state::{Event, State};

/// Longest rendered diagnostic line
pub const MAX_DIAGNOSTIC_LEN: usize = 64;

/// A state change taken this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: State,
    pub to: State,
    pub event: Event,
    /// Signal reported with the transition
    pub reading: OrientationSample,
    /// Time the transition was taken (ms)
    pub at_ms: u64,
}

/// A counted repetition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Completion {
    pub exercise: Exercise,
    /// Counter value after the increment
    pub count: u32,
}

/// Everything one tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub averages: Averages,
    pub transition: Option<Transition>,
    pub completion: Option<Completion>,
}

impl TickReport {
    /// The inactivity timeout fired this tick
    pub fn timed_out(&self) -> bool {
        self.transition.is_some_and(|t| t.event.is_timeout())
    }

    /// State after this tick, if it changed (or was forced)
    pub fn new_state(&self) -> Option<State> {
        self.transition.map(|t| t.to)
    }

    /// Human-readable event for the diagnostic sink
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        let transition = self.transition?;
        if transition.event.is_timeout() {
            Some(Diagnostic::Timeout {
                from: transition.from,
            })
        } else {
            Some(Diagnostic::Transition {
                reading: transition.reading,
                state: transition.to,
            })
        }
    }
}

/// Diagnostic event
///
/// Renders as `"<roll>, <pitch>; <state>"` for transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// Classifier moved to `state`
    Transition {
        reading: OrientationSample,
        state: State,
    },
    /// Inactivity timeout forced `Original`
    Timeout { from: State },
}

impl Diagnostic {
    /// Render into a fixed-capacity line
    pub fn to_line(&self) -> String<MAX_DIAGNOSTIC_LEN> {
        let mut line = String::new();
        // Longest variant fits; truncation only drops trailing text
        let _ = write!(line, "{}", self);
        line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Transition { reading, state } => {
                write!(f, "{}, {}; {}", reading.roll, reading.pitch, state.name())
            }
            Diagnostic::Timeout { from } => {
                write!(f, "{} -> original: no action updates", from.name())
            }
        }
    }
}
