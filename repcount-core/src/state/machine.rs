//! State machine definition
//!
//! Which predicates the classifier evaluates, and which counter a return to
//! rest completes, are both a function of the current state.

use super::events::Event;
use crate::catalog::Exercise;

/// Classifier states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Idle/rest, initial state
    #[default]
    Original,
    /// Upright, ready for squat, push-up or jumping-jack
    Standing,
    /// Lying on the back, sit-up started
    SitupLying,
    /// Bottom of a squat
    SquatDown,
    /// Bottom of a push-up
    PushupDown,
    /// Arms horizontal on the way up
    JumpHorizontal1,
    /// Arms overhead
    JumpVertical,
    /// Arms horizontal on the way down
    JumpHorizontal2,
}

impl State {
    /// Diagnostic name
    pub fn name(&self) -> &'static str {
        match self {
            State::Original => "original",
            State::Standing => "stand",
            State::SitupLying => "situp_lying",
            State::SquatDown => "squat_down",
            State::PushupDown => "pushup_down",
            State::JumpHorizontal1 => "jump_horizontal1",
            State::JumpVertical => "jump_vertical",
            State::JumpHorizontal2 => "jump_horizontal2",
        }
    }

    /// Check if this is the rest state
    pub fn is_idle(&self) -> bool {
        matches!(self, State::Original)
    }

    /// Exercise this state is committed to, if any
    ///
    /// `Standing` is shared by three exercises and returns `None`.
    pub fn exercise(&self) -> Option<Exercise> {
        match self {
            State::SitupLying => Some(Exercise::SitUp),
            State::SquatDown => Some(Exercise::Squat),
            State::PushupDown => Some(Exercise::PushUp),
            State::JumpHorizontal1 | State::JumpVertical | State::JumpHorizontal2 => {
                Some(Exercise::JumpingJack)
            }
            State::Original | State::Standing => None,
        }
    }

    /// Exercise completed by taking `event` from this state
    ///
    /// Only the final return to `Original` of a full cycle counts.
    pub fn completes(&self, event: Event) -> Option<Exercise> {
        match (self, event) {
            (State::SitupLying, Event::SatUp)
            | (State::SquatDown, Event::Rose)
            | (State::PushupDown, Event::Rose)
            | (State::JumpHorizontal2, Event::Stood) => self.exercise(),
            _ => None,
        }
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Timeout recovers from anywhere
            (_, InactivityTimeout) => Original,

            // Original transitions
            (Original, Stood) => Standing,
            (Original, LayDown) => SitupLying,

            // Sit-up
            (SitupLying, SatUp) => Original,

            // Standing branches into the three standing exercises
            (Standing, SquatLowered) => SquatDown,
            (Standing, HorizontalReached) => JumpHorizontal1,
            (Standing, PushupLowered) => PushupDown,

            // Squat and push-up return
            (SquatDown, Rose) => Original,
            (PushupDown, Rose) => Original,

            // Jumping-jack cycle
            (JumpHorizontal1, VerticalReached) => JumpVertical,
            (JumpVertical, HorizontalReached) => JumpHorizontal2,
            (JumpHorizontal2, Stood) => Original,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_original() {
        assert_eq!(State::default(), State::Original);
        assert!(State::default().is_idle());
    }

    #[test]
    fn test_timeout_from_any_state() {
        let states = [
            State::Original,
            State::Standing,
            State::SitupLying,
            State::SquatDown,
            State::PushupDown,
            State::JumpHorizontal1,
            State::JumpVertical,
            State::JumpHorizontal2,
        ];

        for state in states {
            assert_eq!(state.transition(Event::InactivityTimeout), State::Original);
        }
    }

    #[test]
    fn test_situp_flow() {
        let lying = State::Original.transition(Event::LayDown);
        assert_eq!(lying, State::SitupLying);
        assert_eq!(lying.completes(Event::SatUp), Some(Exercise::SitUp));
        assert_eq!(lying.transition(Event::SatUp), State::Original);
    }

    #[test]
    fn test_squat_flow() {
        let standing = State::Original.transition(Event::Stood);
        let down = standing.transition(Event::SquatLowered);
        assert_eq!(down, State::SquatDown);
        assert_eq!(down.completes(Event::Rose), Some(Exercise::Squat));
        assert_eq!(down.transition(Event::Rose), State::Original);
    }

    #[test]
    fn test_pushup_flow() {
        let down = State::Standing.transition(Event::PushupLowered);
        assert_eq!(down, State::PushupDown);
        assert_eq!(down.completes(Event::Rose), Some(Exercise::PushUp));
    }

    #[test]
    fn test_jumping_jack_counts_only_at_the_end() {
        let mut state = State::Standing;
        let steps = [
            (Event::HorizontalReached, State::JumpHorizontal1),
            (Event::VerticalReached, State::JumpVertical),
            (Event::HorizontalReached, State::JumpHorizontal2),
        ];
        for (event, expected) in steps {
            assert_eq!(state.completes(event), None);
            state = state.transition(event);
            assert_eq!(state, expected);
        }
        assert_eq!(state.completes(Event::Stood), Some(Exercise::JumpingJack));
        assert_eq!(state.transition(Event::Stood), State::Original);
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        assert_eq!(State::Original.transition(Event::Rose), State::Original);
        assert_eq!(State::Standing.transition(Event::Stood), State::Standing);
        assert_eq!(State::SquatDown.transition(Event::SatUp), State::SquatDown);
        assert_eq!(State::Standing.completes(Event::Rose), None);
    }

    #[test]
    fn test_standing_is_not_committed() {
        assert_eq!(State::Standing.exercise(), None);
        assert_eq!(State::JumpVertical.exercise(), Some(Exercise::JumpingJack));
    }
}
