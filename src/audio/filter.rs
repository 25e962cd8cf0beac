//! Single-pole low-pass filter
//!
//! `y[n] = alpha * x[n] + (1 - alpha) * y[n-1]`
//!
//! The state is the last stored sample, already truncated and clamped, so
//! the filter reproduces exactly what ends up in the buffer.

use crate::sample::{clamp_to_resolution, Sample};

/// Exponential low-pass filter for one capture run
///
/// Create a fresh one per recording; state starts at 0.
#[derive(Debug, Clone, Copy)]
pub struct LowPassFilter {
    /// Weight of the newest sample, in (0, 1]
    alpha: f32,
    /// Last filtered value
    previous: Sample,
    /// Clamp ceiling `R`
    resolution: Sample,
}

impl LowPassFilter {
    /// Create a filter with zero history
    pub fn new(alpha: f32, resolution: Sample) -> Self {
        Self {
            alpha,
            previous: 0,
            resolution,
        }
    }

    /// Filter one raw reading.
    ///
    /// The result is truncated toward zero and clamped to `[0, R]`; it also
    /// becomes the history for the next call.
    #[inline]
    pub fn apply(&mut self, raw: u16) -> Sample {
        let filtered = self.alpha * raw as f32 + (1.0 - self.alpha) * self.previous as f32;
        // float-to-int casts saturate, negatives land on 0
        let out = clamp_to_resolution(filtered as u32, self.resolution);
        self.previous = out;
        out
    }

    /// Last value produced (0 before the first sample)
    #[inline]
    pub fn previous(&self) -> Sample {
        self.previous
    }
}
