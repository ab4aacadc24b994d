//! Sample history and smoothing
//!
//! The buffer keeps the most recent samples; the filter derives the two
//! rolling averages the classifier consumes.

pub mod buffer;
pub mod filter;

pub use buffer::{SampleBuffer, Window, BUFFER_CAPACITY};
pub use filter::{mean, Averages, LONG_WINDOW, SHORT_WINDOW};
