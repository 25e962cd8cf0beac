//! Transport state
//!
//! Atomic busy flag that keeps capture and playback on separate turns.
//! The audio buffer is the only shared mutable resource; whoever holds the
//! transport owns it.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::error::RecorderError;

/// What the recorder is doing right now
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    /// Neither pipeline is running
    Idle = 0,
    /// Capture pipeline owns the buffer
    Recording = 1,
    /// Playback pipeline owns the buffer
    Playing = 2,
}

impl TransportState {
    /// Convert from u8
    #[inline]
    pub fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::Recording,
            2 => Self::Playing,
            _ => Self::Idle,
        }
    }

    /// Lowercase name for log output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Playing => "playing",
        }
    }
}

impl From<TransportState> for u8 {
    fn from(s: TransportState) -> Self {
        s as u8
    }
}

/// Thread-safe transport flag
pub struct Transport {
    state: AtomicU8,
}

impl Transport {
    /// Create new transport (starts Idle)
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(TransportState::Idle as u8),
        }
    }

    /// Get current state
    #[inline]
    pub fn state(&self) -> TransportState {
        TransportState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// True when no pipeline is running
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state() == TransportState::Idle
    }

    /// Claim the transport for `next`.
    ///
    /// Fails with `RecorderError::Busy` carrying the current state if the
    /// transport is not idle. The returned guard releases it on drop.
    #[inline]
    pub fn try_begin(&self, next: TransportState) -> Result<TransportGuard<'_>, RecorderError> {
        self.state
            .compare_exchange(
                TransportState::Idle as u8,
                next as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map(|_| TransportGuard { transport: self })
            .map_err(|held| RecorderError::Busy(TransportState::from_u8(held)))
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

/// Held for the duration of one pipeline run
pub struct TransportGuard<'a> {
    transport: &'a Transport,
}

impl TransportGuard<'_> {
    /// State this guard claimed
    pub fn state(&self) -> TransportState {
        self.transport.state()
    }
}

impl Drop for TransportGuard<'_> {
    fn drop(&mut self) {
        self.transport
            .state
            .store(TransportState::Idle as u8, Ordering::Release);
    }
}
