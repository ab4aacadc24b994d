//! Classifier state machine
//!
//! The state machine is explicit, finite, and deterministic. Recognised
//! motions arrive as events; the transition table decides the next state.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
