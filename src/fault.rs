//! Fault accounting for RustVoiceRecorder.
//!
//! Peripheral calls are not expected to fail. When they do, the pipeline
//! keeps its cadence: the failure is counted here and the run continues.
//! A recording with a few lost samples is better than a stalled loop.

use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

/// Fault codes for peripheral failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FaultCode {
    /// No fault recorded yet.
    None = 0,

    /// ADC read failed. The sample was taken as silence.
    AdcRead = 1,

    /// PWM duty write failed on one channel.
    PwmWrite = 2,

    /// Status LED could not be switched.
    Indicator = 3,
}

impl FaultCode {
    /// Convert from raw u8 value.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => FaultCode::AdcRead,
            2 => FaultCode::PwmWrite,
            3 => FaultCode::Indicator,
            _ => FaultCode::None,
        }
    }

    /// Short name for log output.
    pub fn as_str(self) -> &'static str {
        match self {
            FaultCode::None => "none",
            FaultCode::AdcRead => "adc-read",
            FaultCode::PwmWrite => "pwm-write",
            FaultCode::Indicator => "indicator",
        }
    }
}

/// Thread-safe fault counters.
///
/// Counters are totals since boot and are never cleared.
///
/// # Usage
///
/// ```ignore
/// static FAULTS: FaultRegistry = FaultRegistry::new();
///
/// // In the capture loop:
/// let raw = match mic.read_raw() {
///     Ok(v) => v,
///     Err(_) => {
///         FAULTS.record(FaultCode::AdcRead);
///         SILENCE
///     }
/// };
/// ```
pub struct FaultRegistry {
    /// Code of the most recent fault.
    last: AtomicU8,

    adc_read: AtomicU32,
    pwm_write: AtomicU32,
    indicator: AtomicU32,
}

impl FaultRegistry {
    /// Create a registry with all counters at zero.
    pub const fn new() -> Self {
        Self {
            last: AtomicU8::new(FaultCode::None as u8),
            adc_read: AtomicU32::new(0),
            pwm_write: AtomicU32::new(0),
            indicator: AtomicU32::new(0),
        }
    }

    /// Count one fault.
    #[inline]
    pub fn record(&self, code: FaultCode) {
        let counter = match code {
            FaultCode::None => return,
            FaultCode::AdcRead => &self.adc_read,
            FaultCode::PwmWrite => &self.pwm_write,
            FaultCode::Indicator => &self.indicator,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.last.store(code as u8, Ordering::Release);
    }

    /// Count for a single fault code.
    #[inline]
    pub fn count(&self, code: FaultCode) -> u32 {
        match code {
            FaultCode::None => 0,
            FaultCode::AdcRead => self.adc_read.load(Ordering::Relaxed),
            FaultCode::PwmWrite => self.pwm_write.load(Ordering::Relaxed),
            FaultCode::Indicator => self.indicator.load(Ordering::Relaxed),
        }
    }

    /// Total of all counters.
    #[inline]
    pub fn total(&self) -> u32 {
        self.count(FaultCode::AdcRead)
            .wrapping_add(self.count(FaultCode::PwmWrite))
            .wrapping_add(self.count(FaultCode::Indicator))
    }

    /// Most recent fault code, `FaultCode::None` if nothing failed yet.
    #[inline]
    pub fn last(&self) -> FaultCode {
        FaultCode::from_u8(self.last.load(Ordering::Acquire))
    }

    /// Get a snapshot of the counters.
    #[inline]
    pub fn snapshot(&self) -> FaultSnapshot {
        FaultSnapshot {
            last: self.last(),
            adc_read: self.count(FaultCode::AdcRead),
            pwm_write: self.count(FaultCode::PwmWrite),
            indicator: self.count(FaultCode::Indicator),
        }
    }
}

impl Default for FaultRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the fault counters at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaultSnapshot {
    pub last: FaultCode,
    pub adc_read: u32,
    pub pwm_write: u32,
    pub indicator: u32,
}
