//! Short and long window rolling averages
//!
//! Both averages are recomputed from the buffer every tick. Integer
//! division truncates toward zero, matching the whole-degree comparisons in
//! the catalog.

use super::buffer::SampleBuffer;
use crate::sample::OrientationSample;

/// Samples in the short (responsive) average
pub const SHORT_WINDOW: usize = 2;

/// Samples in the long (steady pose) average
pub const LONG_WINDOW: usize = 20;

/// Signals derived from the buffer for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Averages {
    /// Newest raw sample
    pub latest: OrientationSample,
    /// Mean of the newest `SHORT_WINDOW` samples (avg2)
    pub short: OrientationSample,
    /// Mean of the newest `LONG_WINDOW` samples (avg20)
    pub long: OrientationSample,
}

impl Averages {
    /// Compute all signals from the current buffer contents
    pub fn compute<const N: usize>(buffer: &SampleBuffer<N>) -> Self {
        Self {
            latest: buffer.latest(),
            short: mean(buffer.window(SHORT_WINDOW, 0)),
            long: mean(buffer.window(LONG_WINDOW, 0)),
        }
    }
}

/// Per-axis arithmetic mean, truncating toward zero
///
/// An empty window yields the zero sample.
pub fn mean<I>(samples: I) -> OrientationSample
where
    I: IntoIterator<Item = OrientationSample>,
{
    let mut roll: i64 = 0;
    let mut pitch: i64 = 0;
    let mut count: i64 = 0;

    for sample in samples {
        roll += i64::from(sample.roll);
        pitch += i64::from(sample.pitch);
        count += 1;
    }

    if count == 0 {
        return OrientationSample::ZERO;
    }

    OrientationSample::new((roll / count) as i32, (pitch / count) as i32)
}
