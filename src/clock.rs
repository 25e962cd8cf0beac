//! Sample clock
//!
//! Fixed period gate between sample operations. Each `tick()` is one plain
//! blocking delay of `1_000_000 / sample_rate` microseconds; nothing else
//! runs while it waits. Elapsed wall time is never measured, so truncation
//! drift is accepted as is.

use embedded_hal::delay::DelayNs;

/// Blocking sample clock
pub struct SampleClock<D> {
    delay: D,
    /// Tick length in microseconds (truncated)
    period_us: u32,
    /// Ticks since construction
    ticks: u64,
}

impl<D: DelayNs> SampleClock<D> {
    /// Create a clock for `sample_rate` samples per second.
    ///
    /// A zero rate is treated as 1 Hz; `RecorderConfig::validate` rejects it
    /// before it gets here.
    pub fn new(delay: D, sample_rate: u32) -> Self {
        Self {
            delay,
            period_us: 1_000_000 / sample_rate.max(1),
            ticks: 0,
        }
    }

    /// Block for one period.
    #[inline]
    pub fn tick(&mut self) {
        self.delay.delay_us(self.period_us);
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Tick length in microseconds
    #[inline]
    pub fn period_us(&self) -> u32 {
        self.period_us
    }

    /// Ticks issued since construction
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Nominal time since construction, `ticks * period_us`.
    ///
    /// Used as the log timestamp; it is what the schedule says, not what a
    /// timer would measure.
    #[inline]
    pub fn elapsed_us(&self) -> u64 {
        self.ticks.wrapping_mul(self.period_us as u64)
    }
}
