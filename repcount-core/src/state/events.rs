//! Events that trigger state transitions

/// Motions recognised by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Entry poses
    /// Raw sample inside the stand window
    Stood,
    /// avg2 inside the sit-up lying window
    LayDown,

    // Sit-up
    /// avg2 inside the sit-up sit window
    SatUp,

    // Squat and push-up
    /// avg2 and avg20 inside the squat down window
    SquatLowered,
    /// avg2 inside the push-up down window
    PushupLowered,
    /// avg2 back inside the stand window
    Rose,

    // Jumping-jack
    /// Arms horizontal
    HorizontalReached,
    /// Arms overhead
    VerticalReached,

    // Recovery
    /// No transition for longer than the inactivity timeout
    InactivityTimeout,
}

impl Event {
    /// Diagnostic label for the event
    pub fn label(&self) -> &'static str {
        match self {
            Event::Stood => "stand",
            Event::LayDown => "situp_lying",
            Event::SatUp => "situp_sit",
            Event::SquatLowered => "squat_down",
            Event::PushupLowered => "pushup_down",
            Event::Rose => "original",
            Event::HorizontalReached => "jump_horizontal",
            Event::VerticalReached => "jump_vertical",
            Event::InactivityTimeout => "timeout",
        }
    }

    /// Check if this event is the timeout recovery
    pub fn is_timeout(&self) -> bool {
        matches!(self, Event::InactivityTimeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Exercise;

    #[test]
    fn test_timeout_event() {
        assert!(Event::InactivityTimeout.is_timeout());
        assert!(!Event::Rose.is_timeout());
    }

    #[test]
    fn test_labels_are_distinct() {
        let events = [
            Event::Stood,
            Event::LayDown,
            Event::SatUp,
            Event::SquatLowered,
            Event::PushupLowered,
            Event::Rose,
            Event::HorizontalReached,
            Event::VerticalReached,
            Event::InactivityTimeout,
        ];
        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_exercise_names_differ_from_labels() {
        // Counters are reported by exercise name, never by event label
        assert_ne!(Exercise::Squat.name(), Event::SquatLowered.label());
    }
}
