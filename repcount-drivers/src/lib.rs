//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in repcount-core on top of `embedded-hal` 1.0:
//!
//! - Orientation sensor (LIS3DSH accelerometer over SPI)
//! - Per-exercise LED feedback with non-blocking blink
//! - Debounced repetition target button

#![no_std]
#![deny(unsafe_code)]

pub mod feedback;
pub mod input;
pub mod sensor;
