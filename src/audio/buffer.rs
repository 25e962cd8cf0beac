//! Fixed-length recording buffer
//!
//! Holds exactly one recording. Capacity is a const generic and never
//! changes; every capture overwrites all `N` slots.

use crate::sample::{Sample, SILENCE};

use super::normalize::peak;
use super::smoothing::moving_average;

/// Audio buffer with static size
///
/// Index `i` is `i / sample_rate` seconds into the recording.
pub struct AudioBuffer<const N: usize> {
    samples: [Sample; N],
}

impl<const N: usize> AudioBuffer<N> {
    /// Create a silent buffer
    pub const fn new() -> Self {
        // Compile-time check that N is usable
        const { assert!(N > 0, "Buffer must hold at least one sample") };

        Self {
            samples: [SILENCE; N],
        }
    }

    /// Build a buffer from existing samples
    pub const fn from_samples(samples: [Sample; N]) -> Self {
        Self { samples }
    }

    /// Number of samples (always `N`)
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Never true; kept for API symmetry with slices
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Sample at `index`, `None` past the end
    #[inline]
    pub fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    /// Read-only view for playback
    #[inline]
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Writable view for capture
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Sample] {
        &mut self.samples
    }

    /// Loudest sample in the recording
    #[inline]
    pub fn peak(&self) -> Sample {
        peak(&self.samples)
    }

    /// True when every sample is silence
    #[inline]
    pub fn is_silent(&self) -> bool {
        self.peak() == SILENCE
    }

    /// Moving average centred on `index`, see [`moving_average`].
    #[inline]
    pub fn smoothed(&self, index: usize, window: usize) -> Sample {
        moving_average(&self.samples, index, window)
    }

    /// Overwrite every slot with silence
    #[inline]
    pub fn clear(&mut self) {
        self.samples.fill(SILENCE);
    }
}

impl<const N: usize> Default for AudioBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
