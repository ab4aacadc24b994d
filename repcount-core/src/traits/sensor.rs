//! Orientation sensor trait

use crate::sample::OrientationSample;

/// Source of one roll/pitch reading per tick
///
/// Implementations are responsible for filtering sensor faults; every `Ok`
/// sample is treated as valid by the classifier.
pub trait OrientationSensor {
    /// Error type for failed reads
    type Error;

    /// Read the current orientation
    ///
    /// Takes `&mut self` because bus transfers require mutable access.
    fn read(&mut self) -> Result<OrientationSample, Self::Error>;
}
