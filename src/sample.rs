//! Module: sample
//!
//! Purpose: the quantized amplitude unit shared by capture, buffer and
//! playback.
//!
//! Architecture:
//! - One `u16` per time slice, range `[0, R]` with `R` the PWM wrap value
//! - Capture and playback use the same representation, there is no separate
//!   capture resolution
//!
//! Safety: Safe. No unsafe blocks. Copy types only.

/// One quantized amplitude reading.
///
/// Index `i` of a recording corresponds to `i / sample_rate` seconds.
pub type Sample = u16;

/// Minimum output level. Written to both channels when playback ends.
pub const SILENCE: Sample = 0;

/// Saturate a wide intermediate value into `[0, resolution]`.
#[inline]
pub fn clamp_to_resolution(value: u32, resolution: Sample) -> Sample {
    value.min(resolution as u32) as Sample
}
