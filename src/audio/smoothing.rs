//! Moving-average smoothing
//!
//! Optional conditioning step. Nothing in the default record path calls
//! it; an integrator can run [`smooth_into`] before normalization.

use crate::sample::{Sample, SILENCE};

/// Mean of `samples[index - window ..= index + window]`.
///
/// Near the edges the window is truncated to the valid range, so
/// `index = 0, window = 5` averages six samples, not eleven. Integer
/// division. Returns silence when the window misses the slice entirely.
pub fn moving_average(samples: &[Sample], index: usize, window: usize) -> Sample {
    let start = index.saturating_sub(window);
    let end = index.saturating_add(window).min(samples.len().saturating_sub(1));

    if samples.is_empty() || start > end {
        return SILENCE;
    }

    let span = &samples[start..=end];
    let sum: u64 = span.iter().map(|&s| s as u64).sum();
    (sum / span.len() as u64) as Sample
}

/// Write the moving average of every position of `src` into `dst`.
///
/// Both slices must have the same length; extra slots in the longer one are
/// left untouched.
pub fn smooth_into(src: &[Sample], dst: &mut [Sample], window: usize) {
    for (index, out) in dst.iter_mut().enumerate().take(src.len()) {
        *out = moving_average(src, index, window);
    }
}
