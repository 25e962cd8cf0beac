//! Recorder error types
//!
//! Only configuration and transport contention are errors. Peripheral
//! failures are counted in [`crate::fault::FaultRegistry`] instead.

use crate::transport::TransportState;

/// Invalid recorder configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// C01: Sample rate is zero
    ZeroSampleRate,
    /// C02: Sample rate above 1 MHz gives a zero-length tick
    SampleRateTooHigh,
    /// C03: Recording duration is zero
    ZeroDuration,
    /// C04: Filter coefficient outside (0, 1]
    AlphaOutOfRange,
    /// C05: Output resolution is zero
    ZeroResolution,
    /// C06: `sample_rate * duration` differs from the buffer capacity
    CapacityMismatch { expected: usize, actual: usize },
}

impl ConfigError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroSampleRate => "C01",
            Self::SampleRateTooHigh => "C02",
            Self::ZeroDuration => "C03",
            Self::AlphaOutOfRange => "C04",
            Self::ZeroResolution => "C05",
            Self::CapacityMismatch { .. } => "C06",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::ZeroSampleRate => "sample rate must be non-zero",
            Self::SampleRateTooHigh => "sample rate exceeds 1 MHz",
            Self::ZeroDuration => "duration must be non-zero",
            Self::AlphaOutOfRange => "alpha must be in (0, 1]",
            Self::ZeroResolution => "output resolution must be non-zero",
            Self::CapacityMismatch { .. } => "buffer capacity mismatch",
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CapacityMismatch { expected, actual } => write!(
                f,
                "{}: {} (config needs {}, buffer holds {})",
                self.code(),
                self.message(),
                expected,
                actual
            ),
            _ => write!(f, "{}: {}", self.code(), self.message()),
        }
    }
}

/// Recorder error
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecorderError {
    /// R01: Another pipeline holds the transport
    Busy(TransportState),
    /// R02: Configuration rejected
    Config(ConfigError),
}

impl RecorderError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Busy(_) => "R01",
            Self::Config(_) => "R02",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Busy(_) => "transport busy",
            Self::Config(_) => "invalid configuration",
        }
    }
}

impl From<ConfigError> for RecorderError {
    fn from(e: ConfigError) -> Self {
        RecorderError::Config(e)
    }
}

impl core::fmt::Display for RecorderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Busy(state) => write!(f, "{}: {} ({})", self.code(), self.message(), state.as_str()),
            Self::Config(e) => write!(f, "{}: {}", self.code(), e),
        }
    }
}

impl core::error::Error for ConfigError {}

impl core::error::Error for RecorderError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Busy(_) => None,
        }
    }
}
