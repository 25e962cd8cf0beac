//! Global log stream instance.
//!
//! Any task may log into it; the UART drain thread is the only consumer.

use crate::logging::LogStream;

/// Log stream for the recorder.
///
/// Shared by the recorder and the dispatch loop, drained by the UART thread.
pub static LOG_STREAM: LogStream = LogStream::new();
