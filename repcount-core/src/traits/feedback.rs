//! Physical feedback trait

use crate::catalog::Exercise;
use crate::counter::{FeedbackAction, RepCounters, RepTarget};

/// Completion notification for the feedback side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Feedback {
    /// Exercise that completed a cycle
    pub exercise: Exercise,
    /// Counter value after the increment
    pub count: u32,
    /// Counter has reached the current target
    pub target_reached: bool,
    /// Indicator pattern to show
    pub action: FeedbackAction,
}

impl Feedback {
    /// Build the notification for a counter that just became `count`
    pub fn new(exercise: Exercise, count: u32, target: &RepTarget) -> Self {
        Self {
            exercise,
            count,
            target_reached: target.is_reached(count),
            action: target.feedback_for(count),
        }
    }
}

/// Trait for indicator outputs (LEDs, buzzers)
///
/// Implementations must never delay the caller: timed patterns are kept as
/// deadlines and advanced from [`FeedbackOutput::poll`].
pub trait FeedbackOutput {
    /// A repetition was counted
    fn notify(&mut self, feedback: Feedback, now_ms: u64);

    /// Re-derive every indicator after the target changed
    fn refresh(&mut self, counters: &RepCounters, target: &RepTarget);

    /// Advance pending timed patterns
    fn poll(&mut self, _now_ms: u64) {}
}
