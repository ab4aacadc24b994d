//! Orientation samples
//!
//! One roll/pitch pair in whole degrees, produced once per tick by the
//! acquisition collaborator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Device attitude as two independent angles (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationSample {
    /// Roll angle in degrees
    pub roll: i32,
    /// Pitch angle in degrees
    pub pitch: i32,
}

/// Calibration data uses the same pair for centers and tolerances
pub type AnglePair = OrientationSample;

impl OrientationSample {
    /// All-zero sample used to pre-fill the history
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a sample from roll and pitch
    pub const fn new(roll: i32, pitch: i32) -> Self {
        Self { roll, pitch }
    }
}

impl From<(i32, i32)> for OrientationSample {
    fn from((roll, pitch): (i32, i32)) -> Self {
        Self::new(roll, pitch)
    }
}
