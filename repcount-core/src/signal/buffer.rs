//! Fixed-capacity circular sample history
//!
//! Always holds exactly `N` samples. The buffer starts zero-filled, so a
//! window reaching past the first real sample reads zero samples instead of
//! failing.

use crate::sample::OrientationSample;

/// Capacity of the reference configuration
pub const BUFFER_CAPACITY: usize = 20;

/// Circular history of the most recent `N` orientation samples
#[derive(Debug, Clone)]
pub struct SampleBuffer<const N: usize = BUFFER_CAPACITY> {
    slots: [OrientationSample; N],
    /// Slot the next push writes
    cursor: usize,
}

impl<const N: usize> Default for SampleBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SampleBuffer<N> {
    /// Create a zero-filled buffer
    pub const fn new() -> Self {
        assert!(N > 0, "sample buffer needs at least one slot");
        Self {
            slots: [OrientationSample::ZERO; N],
            cursor: 0,
        }
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Slot the next push will overwrite
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Slot holding the newest sample
    pub fn newest_index(&self) -> usize {
        self.slot_index(0)
    }

    /// Overwrite the oldest slot and advance the cursor
    pub fn push(&mut self, sample: OrientationSample) {
        self.slots[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % N;
    }

    /// Slot index of the sample `offset` ticks before the newest
    ///
    /// Offsets wrap modulo `N`.
    pub fn slot_index(&self, offset: usize) -> usize {
        (self.cursor + N - 1 - offset % N) % N
    }

    /// Sample `offset` ticks before the newest (0 = newest)
    pub fn get(&self, offset: usize) -> OrientationSample {
        self.slots[self.slot_index(offset)]
    }

    /// Newest sample
    pub fn latest(&self) -> OrientationSample {
        self.get(0)
    }

    /// The `n` most recent samples ending `from_offset` ticks before the
    /// newest, newest first
    ///
    /// `n` is clamped to the capacity.
    pub fn window(&self, n: usize, from_offset: usize) -> Window<'_, N> {
        Window {
            buffer: self,
            offset: from_offset,
            remaining: n.min(N),
        }
    }

    /// Restore the power-on contents
    pub fn clear(&mut self) {
        self.slots = [OrientationSample::ZERO; N];
        self.cursor = 0;
    }
}

/// Iterator over a window of the buffer, newest first
#[derive(Debug, Clone)]
pub struct Window<'a, const N: usize> {
    buffer: &'a SampleBuffer<N>,
    offset: usize,
    remaining: usize,
}

impl<const N: usize> Iterator for Window<'_, N> {
    type Item = OrientationSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let sample = self.buffer.get(self.offset);
        self.offset += 1;
        self.remaining -= 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Window<'_, N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tagged(i: i32) -> OrientationSample {
        OrientationSample::new(i, -i)
    }

    #[test]
    fn test_starts_zero_filled() {
        let buffer: SampleBuffer = SampleBuffer::new();
        assert_eq!(buffer.capacity(), 20);
        assert!(buffer.window(20, 0).all(|s| s == OrientationSample::ZERO));
    }

    #[test]
    fn test_push_advances_and_wraps() {
        let mut buffer: SampleBuffer<4> = SampleBuffer::new();
        for i in 0..5 {
            buffer.push(tagged(i));
        }
        assert_eq!(buffer.cursor(), 1);
        assert_eq!(buffer.newest_index(), 0);
        assert_eq!(buffer.latest(), tagged(4));
        assert_eq!(buffer.get(3), tagged(1));
    }

    #[test]
    fn test_window_across_wraparound() {
        // Newest sample lands in slot 3 after 24 pushes
        let mut buffer: SampleBuffer<20> = SampleBuffer::new();
        for i in 0..24 {
            buffer.push(tagged(i));
        }
        assert_eq!(buffer.newest_index(), 3);

        let slots: [usize; 20] = core::array::from_fn(|k| buffer.slot_index(k));
        let mut expected = [0usize; 20];
        for (k, slot) in expected.iter_mut().enumerate() {
            // 3, 2, 1, 0, 19, ..., 4
            *slot = (3 + 20 - k) % 20;
        }
        assert_eq!(slots, expected);

        // Oldest first that is slots 4..19 then 0..3
        let mut chronological = slots;
        chronological.reverse();
        assert_eq!(&chronological[..16], &core::array::from_fn::<usize, 16, _>(|i| i + 4));
        assert_eq!(&chronological[16..], &[0, 1, 2, 3]);

        let newest_first: [i32; 20] = {
            let mut out = [0; 20];
            for (dst, s) in out.iter_mut().zip(buffer.window(20, 0)) {
                *dst = s.roll;
            }
            out
        };
        assert_eq!(newest_first[0], 23);
        assert_eq!(newest_first[19], 4);
    }

    #[test]
    fn test_window_with_offset() {
        let mut buffer: SampleBuffer<8> = SampleBuffer::new();
        for i in 1..=8 {
            buffer.push(tagged(i));
        }
        let mut window = buffer.window(3, 2);
        assert_eq!(window.len(), 3);
        assert_eq!(window.next(), Some(tagged(6)));
        assert_eq!(window.next(), Some(tagged(5)));
        assert_eq!(window.next(), Some(tagged(4)));
        assert_eq!(window.next(), None);
    }

    #[test]
    fn test_window_reads_zero_fill_before_start() {
        let mut buffer: SampleBuffer<20> = SampleBuffer::new();
        buffer.push(tagged(7));
        let rolls = buffer.window(3, 0).map(|s| s.roll);
        assert!(rolls.eq([7, 0, 0]));
    }

    #[test]
    fn test_window_clamped_to_capacity() {
        let buffer: SampleBuffer<4> = SampleBuffer::new();
        assert_eq!(buffer.window(10, 0).count(), 4);
    }

    #[test]
    fn test_clear_restores_power_on_state() {
        let mut buffer: SampleBuffer<4> = SampleBuffer::new();
        buffer.push(tagged(1));
        buffer.push(tagged(2));
        buffer.clear();
        assert_eq!(buffer.cursor(), 0);
        assert_eq!(buffer.latest(), OrientationSample::ZERO);
    }

    proptest! {
        #[test]
        fn prop_window_matches_push_history(
            rolls in proptest::collection::vec(-360i32..360, 1..64),
            n in 1usize..20,
        ) {
            let mut buffer: SampleBuffer<20> = SampleBuffer::new();
            for &r in &rolls {
                buffer.push(OrientationSample::new(r, 0));
            }
            let expected = rolls
                .iter()
                .rev()
                .copied()
                .chain(core::iter::repeat(0))
                .take(n);
            prop_assert!(buffer.window(n, 0).map(|s| s.roll).eq(expected));
        }
    }
}
