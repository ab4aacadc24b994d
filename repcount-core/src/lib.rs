//! Board-agnostic core logic for the repetition counter firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Orientation samples and the fixed-capacity sample history
//! - Short and long window smoothing
//! - Exercise calibration catalog
//! - Classifier state machine with inactivity timeout
//! - Repetition counters and the shared repetition target
//! - Collaborator traits (sensor, feedback, diagnostics, clock)
//! - The per-tick session loop body

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod counter;
pub mod sample;
pub mod session;
pub mod signal;
pub mod state;
pub mod traits;

pub use catalog::{AngleWindow, Catalog, Exercise};
pub use classifier::{Completion, Diagnostic, Engine, TickReport, Transition};
pub use config::EngineConfig;
pub use counter::{FeedbackAction, RepCounters, RepTarget};
pub use sample::OrientationSample;
pub use session::{Session, SessionError};
pub use state::{Event, State};
