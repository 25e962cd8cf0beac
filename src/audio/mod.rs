//! Audio subsystem: recording buffer and signal conditioning
//!
//! Architecture:
//! - Buffer: fixed `N` samples, one recording, owned by the recorder
//! - Filter: single-pole low-pass applied per sample during capture
//! - Normalize: one global peak rescale after capture
//! - Smoothing: moving average, available but not in the default path

pub mod buffer;
pub mod filter;
pub mod normalize;
pub mod smoothing;

pub use buffer::AudioBuffer;
pub use filter::LowPassFilter;
pub use normalize::{normalize, peak};
pub use smoothing::{moving_average, smooth_into};
