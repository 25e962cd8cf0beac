//! # RustVoiceRecorder
//!
//! Fixed-duration voice recorder for ESP32 boards: sample a microphone into
//! a bounded buffer, then replay it on two PWM transducers at the same rate.
//!
//! ## Architecture
//!
//! ```text
//! Mic ──▶ capture (low-pass) ──▶ AudioBuffer<N> ──▶ normalize
//!                                      │
//!                                      ▼
//!                       playback ──▶ left + right PWM
//! ```
//!
//! - One pipeline at a time; [`Transport`] rejects overlapping runs
//! - Every sample operation is gated by [`SampleClock`]
//! - Peripheral failures are counted in [`FaultRegistry`], never fatal
//! - No allocation; the buffer is sized at compile time

#![cfg_attr(not(test), no_std)]

pub mod audio;
pub mod capture;
pub mod clock;
pub mod config;
pub mod error;
pub mod fault;
pub mod hal;
pub mod log_globals;
pub mod logging;
pub mod playback;
pub mod recorder;
pub mod sample;
pub mod transport;
pub mod uart_logger;

pub use audio::AudioBuffer;
pub use clock::SampleClock;
pub use config::RecorderConfig;
pub use error::{ConfigError, RecorderError};
pub use fault::{FaultCode, FaultRegistry};
pub use hal::AnalogInput;
pub use log_globals::LOG_STREAM;
pub use recorder::{CaptureReport, PlaybackReport, Recorder, RecorderPeripherals, SharedState};
pub use sample::{Sample, SILENCE};
pub use transport::{Transport, TransportState};
