//! Indicator outputs

pub mod led;

pub use led::LedBank;
