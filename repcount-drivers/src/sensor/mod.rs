//! Orientation sensors

pub mod lis3dsh;

pub use lis3dsh::{angles_from_raw, Lis3dsh, Lis3dshError, RawAcceleration};
