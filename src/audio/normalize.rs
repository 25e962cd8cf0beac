//! Peak normalization
//!
//! One global scale factor per recording: the loudest sample maps to `R`,
//! everything else scales with it. A silent buffer is left alone.

use crate::sample::{Sample, SILENCE};

/// Loudest sample in `samples`, 0 for an empty slice.
#[inline]
pub fn peak(samples: &[Sample]) -> Sample {
    samples.iter().copied().max().unwrap_or(SILENCE)
}

/// Rescale `samples` in place so the peak becomes `resolution`.
///
/// Each value becomes `floor(v * R / peak)`. Returns the peak found before
/// scaling; a return of 0 means the buffer was silent and nothing changed.
pub fn normalize(samples: &mut [Sample], resolution: Sample) -> Sample {
    let max_val = peak(samples);
    if max_val == SILENCE {
        return SILENCE; // Avoid division by zero
    }

    let max_val_wide = max_val as u32;
    let resolution_wide = resolution as u32;
    for sample in samples.iter_mut() {
        // v <= max_val, so the quotient never exceeds R
        *sample = ((*sample as u32 * resolution_wide) / max_val_wide) as Sample;
    }

    max_val
}
