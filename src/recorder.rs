//! Recorder: record and play one fixed-length clip.
//!
//! # Contract
//!
//! - `record()` claims the transport, lights the capture LED, fills the
//!   whole buffer, normalizes it, then releases everything
//! - `play()` claims the transport, lights the playback LED, plays the whole
//!   buffer, silences both speakers, then releases everything
//! - A call made while the other pipeline runs is rejected, nothing touched
//! - Peripheral failures are counted, never returned
//!
//! # Example
//!
//! ```ignore
//! let mut recorder = Recorder::new(config, buffer, peripherals, shared)?;
//!
//! loop {
//!     if record_button.is_low()? {
//!         recorder.record()?;
//!     }
//!     if play_button.is_low()? {
//!         recorder.play()?;
//!     }
//! }
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::audio::{normalize, AudioBuffer, LowPassFilter};
use crate::capture::capture;
use crate::clock::SampleClock;
use crate::config::RecorderConfig;
use crate::error::{ConfigError, RecorderError};
use crate::fault::FaultRegistry;
use crate::hal::{AnalogInput, Indicators, Speakers};
use crate::logging::LogStream;
use crate::playback::playback;
use crate::sample::Sample;
use crate::transport::{Transport, TransportState};
use crate::{rt_info, rt_warn};

/// Peripherals the recorder drives.
pub struct RecorderPeripherals<A, O, I, D> {
    /// Microphone
    pub mic: A,
    /// Left transducer
    pub left: O,
    /// Right transducer
    pub right: O,
    /// LED lit while recording
    pub capture_led: I,
    /// LED lit while playing
    pub playback_led: I,
    /// Blocking delay for the sample clock
    pub delay: D,
}

/// State shared with the rest of the firmware.
///
/// Typically three statics; tests use locals.
#[derive(Clone, Copy)]
pub struct SharedState<'a> {
    pub transport: &'a Transport,
    pub faults: &'a FaultRegistry,
    pub log: &'a LogStream,
}

/// Outcome of one `record()` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureReport {
    /// Samples written (always `N`)
    pub samples: usize,
    /// Peak before normalization, 0 for a silent take
    pub peak: Sample,
    /// Failed ADC reads during this run
    pub failed_reads: u32,
}

/// Outcome of one `play()` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackReport {
    /// Samples played (always `N`)
    pub samples: usize,
    /// Failed PWM writes during this run
    pub failed_writes: u32,
}

/// Fixed-duration recorder over a buffer of `N` samples.
pub struct Recorder<'a, A, O, I, D, const N: usize> {
    config: RecorderConfig,
    buffer: &'a mut AudioBuffer<N>,
    mic: A,
    speakers: Speakers<O>,
    indicators: Indicators<I>,
    clock: SampleClock<D>,
    shared: SharedState<'a>,
}

impl<'a, A, O, I, D, const N: usize> Recorder<'a, A, O, I, D, N>
where
    A: AnalogInput,
    O: SetDutyCycle,
    I: OutputPin,
    D: DelayNs,
{
    /// Build a recorder.
    ///
    /// Fails if the config is invalid or `sample_rate * duration != N`.
    /// Both LEDs are switched off and both speakers silenced.
    pub fn new(
        config: RecorderConfig,
        buffer: &'a mut AudioBuffer<N>,
        peripherals: RecorderPeripherals<A, O, I, D>,
        shared: SharedState<'a>,
    ) -> Result<Self, ConfigError> {
        config.validate_for_capacity(N)?;

        let mut recorder = Self {
            clock: SampleClock::new(peripherals.delay, config.sample_rate),
            config,
            buffer,
            mic: peripherals.mic,
            speakers: Speakers::new(peripherals.left, peripherals.right),
            indicators: Indicators::new(peripherals.capture_led, peripherals.playback_led),
            shared,
        };

        recorder.indicators.set_capturing(false, shared.faults);
        recorder.indicators.set_playing(false, shared.faults);
        recorder.speakers.silence(shared.faults);

        rt_info!(
            shared.log,
            0,
            "recorder: {} samples @ {} Hz, tick {} us, alpha {}",
            N,
            config.sample_rate,
            recorder.clock.period_us(),
            config.alpha
        );

        Ok(recorder)
    }

    /// Capture a full clip, then normalize it.
    pub fn record(&mut self) -> Result<CaptureReport, RecorderError> {
        let shared = self.shared;
        let _guard = shared.transport.try_begin(TransportState::Recording)?;

        rt_info!(shared.log, self.timestamp(), "record: start");
        self.indicators.set_capturing(true, shared.faults);

        let filter = LowPassFilter::new(self.config.alpha, self.config.output_resolution);
        let failed_reads = capture(
            &mut self.mic,
            filter,
            self.buffer.as_mut_slice(),
            &mut self.clock,
            shared.faults,
        );

        let peak = normalize(self.buffer.as_mut_slice(), self.config.output_resolution);

        self.indicators.set_capturing(false, shared.faults);

        if peak == 0 {
            rt_info!(shared.log, self.timestamp(), "record: done, silent take");
        } else {
            rt_info!(shared.log, self.timestamp(), "record: done, peak {}", peak);
        }
        if failed_reads > 0 {
            rt_warn!(shared.log, self.timestamp(), "record: {} failed ADC reads", failed_reads);
        }

        Ok(CaptureReport {
            samples: N,
            peak,
            failed_reads,
        })
    }

    /// Play the buffer on both speakers, then silence them.
    pub fn play(&mut self) -> Result<PlaybackReport, RecorderError> {
        let shared = self.shared;
        let _guard = shared.transport.try_begin(TransportState::Playing)?;

        rt_info!(shared.log, self.timestamp(), "play: start");
        self.indicators.set_playing(true, shared.faults);

        let failed_writes = playback(
            self.buffer.as_slice(),
            &mut self.speakers,
            &mut self.clock,
            shared.faults,
        );

        self.indicators.set_playing(false, shared.faults);

        rt_info!(shared.log, self.timestamp(), "play: done");
        if failed_writes > 0 {
            rt_warn!(shared.log, self.timestamp(), "play: {} failed PWM writes", failed_writes);
        }

        Ok(PlaybackReport {
            samples: N,
            failed_writes,
        })
    }

    /// The recording
    pub fn buffer(&self) -> &AudioBuffer<N> {
        self.buffer
    }

    /// Configuration in use
    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    /// Sample clock (tick count, nominal time)
    pub fn clock(&self) -> &SampleClock<D> {
        &self.clock
    }

    fn timestamp(&self) -> i64 {
        self.clock.elapsed_us() as i64
    }
}
