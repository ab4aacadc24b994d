//! Collaborator traits
//!
//! These traits define the interface between the classification engine
//! and the hardware-specific code around it.

pub mod diagnostic;
pub mod feedback;
pub mod input;
pub mod sensor;

pub use diagnostic::{DiagnosticSink, NullSink};
pub use feedback::{Feedback, FeedbackOutput};
pub use input::{Clock, ManualClock, TargetInput};
pub use sensor::OrientationSensor;
