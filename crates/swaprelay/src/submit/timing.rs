//! Latency instrumentation for submission attempts.

use std::time::Duration;

/// Elapsed-duration measurements for one submission attempt.
///
/// Observability only; values never gate control flow.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SubmitTiming {
    /// Decode, sign, and re-encode span.
    pub prepare: Duration,
    /// Relay network span.
    pub request: Duration,
    /// Whole submission span.
    pub total: Duration,
}

impl SubmitTiming {
    /// Formats the spans as seconds with fixed 5-decimal precision.
    ///
    /// The precision is cosmetic.
    #[must_use]
    pub fn report(&self) -> String {
        format!(
            "prepare={:.5}s request={:.5}s total={:.5}s",
            self.prepare.as_secs_f64(),
            self.request.as_secs_f64(),
            self.total.as_secs_f64(),
        )
    }
}
