//! Module: config
//!
//! Purpose: Configuration for the recorder core.
//!
//! Architecture:
//! - Build-time constants are the single source of truth for the firmware
//! - `RecorderConfig` carries the same four values at runtime so tests and
//!   integrators can pick other rates without touching the core
//! - Buffer capacity is a const generic; the config must agree with it
//!
//! Safety: Safe. Plain Copy data, validated once at construction.

use crate::error::ConfigError;
use crate::sample::Sample;

/// Samples per second for both capture and playback.
pub const SAMPLE_RATE: u32 = 16_000;

/// Length of one recording in seconds.
pub const DURATION_SECONDS: u32 = 5;

/// Low-pass filter coefficient (weight of the newest sample).
pub const ALPHA: f32 = 0.1;

/// PWM wrap value: 10 bits, balance between resolution and carrier speed.
pub const OUTPUT_RESOLUTION: Sample = 1023;

/// Buffer capacity for the default configuration.
pub const MAX_SAMPLES: usize = (SAMPLE_RATE * DURATION_SECONDS) as usize;

/// Runtime view of the recorder constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecorderConfig {
    /// Samples per second
    pub sample_rate: u32,
    /// Recording length in seconds
    pub duration_seconds: u32,
    /// Filter coefficient in (0, 1]
    pub alpha: f32,
    /// Highest output level `R`
    pub output_resolution: Sample,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            duration_seconds: DURATION_SECONDS,
            alpha: ALPHA,
            output_resolution: OUTPUT_RESOLUTION,
        }
    }
}

impl RecorderConfig {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.sample_rate > 1_000_000 {
            return Err(ConfigError::SampleRateTooHigh);
        }
        if self.duration_seconds == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.alpha.is_nan() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(ConfigError::AlphaOutOfRange);
        }
        if self.output_resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        Ok(())
    }

    /// Validate and check that a buffer of `capacity` samples fits exactly.
    pub fn validate_for_capacity(&self, capacity: usize) -> Result<(), ConfigError> {
        self.validate()?;
        let expected = self.sample_count();
        if expected != capacity {
            return Err(ConfigError::CapacityMismatch { expected, actual: capacity });
        }
        Ok(())
    }

    /// Number of samples in one recording (`N`).
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_rate as usize * self.duration_seconds as usize
    }

    /// Tick length in microseconds, truncated.
    ///
    /// The rounding error accumulates over a recording and is not corrected.
    #[inline]
    pub fn period_us(&self) -> u32 {
        1_000_000 / self.sample_rate.max(1)
    }
}
