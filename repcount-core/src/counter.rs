//! Repetition counters and the shared repetition target
//!
//! Counters only ever move up, by one, on a completed cycle. The target is
//! a ceiling the feedback side compares against; classification ignores it.

use crate::catalog::Exercise;
use crate::config::DEFAULT_REP_TARGET;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One counter per exercise
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepCounters {
    counts: [u32; Exercise::COUNT],
}

impl RepCounters {
    /// All counters at zero
    pub const fn new() -> Self {
        Self {
            counts: [0; Exercise::COUNT],
        }
    }

    /// Record one completed cycle and return the new count
    pub(crate) fn increment(&mut self, exercise: Exercise) -> u32 {
        let slot = &mut self.counts[exercise.index()];
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Current count for an exercise
    pub fn get(&self, exercise: Exercise) -> u32 {
        self.counts[exercise.index()]
    }

    /// All counters in `Exercise::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Exercise, u32)> + '_ {
        Exercise::ALL.iter().map(move |&e| (e, self.get(e)))
    }

    /// Sum over all exercises
    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0u32, |acc, &c| acc.saturating_add(c))
    }
}

/// What the feedback side should show after a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedbackAction {
    /// Below target: off, short pause, on
    Blink,
    /// Target just reached: stay off
    Latch,
    /// Already past target: leave the indicator alone
    Suppress,
}

/// Shared repetition ceiling, raised in fixed steps by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepTarget {
    value: u32,
    step: u32,
}

impl Default for RepTarget {
    fn default() -> Self {
        Self::new(DEFAULT_REP_TARGET, DEFAULT_REP_TARGET)
    }
}

impl RepTarget {
    /// Create a target with an initial value and raise step
    pub const fn new(value: u32, step: u32) -> Self {
        Self { value, step }
    }

    /// Current target
    pub fn get(&self) -> u32 {
        self.value
    }

    /// Raise the target by one step and return the new value
    pub fn raise(&mut self) -> u32 {
        self.value = self.value.saturating_add(self.step);
        self.value
    }

    /// Check if `count` has reached the target
    pub fn is_reached(&self, count: u32) -> bool {
        count >= self.value
    }

    /// Feedback for a counter that just became `count`
    pub fn feedback_for(&self, count: u32) -> FeedbackAction {
        if count < self.value {
            FeedbackAction::Blink
        } else if count == self.value {
            FeedbackAction::Latch
        } else {
            FeedbackAction::Suppress
        }
    }
}
