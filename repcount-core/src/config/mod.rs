//! Configuration types
//!
//! Board-agnostic tuning values. Calibration windows live in
//! [`crate::catalog`]; nothing here is persisted.

pub mod types;

pub use types::*;
