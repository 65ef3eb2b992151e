//! Wall-clock timing for logged operations.

use std::time::{Duration, Instant};

/// Measures how long a named operation takes.
///
/// Finishing the timer emits a `trace` event with the operation name and the
/// elapsed milliseconds, and hands the figure back for richer log lines.
#[derive(Debug, Clone, Copy)]
pub struct SpanTimer {
    operation: &'static str,
    started: Instant,
}

impl SpanTimer {
    /// Starts timing `operation`.
    #[must_use]
    pub fn start(operation: &'static str) -> Self {
        Self {
            operation,
            started: Instant::now(),
        }
    }

    /// The operation being timed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// Time since the timer started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stops the timer, returning the elapsed milliseconds.
    #[must_use]
    pub fn finish(self) -> f64 {
        let duration_ms = self.elapsed().as_secs_f64() * 1000.0;
        tracing::trace!(operation = self.operation, duration_ms, "Operation finished");
        duration_ms
    }
}
