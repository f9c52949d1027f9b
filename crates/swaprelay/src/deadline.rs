//! Deadline token bounding fetch/submit latency.

use std::{
    future::Future,
    time::{Duration, Instant},
};

/// Marker returned when a [`Deadline`] elapsed before the bounded future.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DeadlineExpired;

/// Optional monotonic deadline carried through one pipeline attempt.
///
/// [`Deadline::none`] disables the bound entirely; a stalled network call can
/// then block until the caller drops the future.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Deadline {
    /// Absolute expiry instant, when bounded.
    expires_at: Option<Instant>,
}

impl Deadline {
    /// Creates an unbounded deadline.
    #[must_use]
    pub const fn none() -> Self {
        Self { expires_at: None }
    }

    /// Creates a deadline expiring after `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now().checked_add(budget),
        }
    }

    /// Creates a deadline from an absolute instant.
    #[must_use]
    pub const fn at(expires_at: Instant) -> Self {
        Self {
            expires_at: Some(expires_at),
        }
    }

    /// Returns true when the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }

    /// Returns the remaining budget, or `None` when unbounded.
    ///
    /// An expired deadline reports a zero remainder.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|expires_at| expires_at.saturating_duration_since(Instant::now()))
    }

    /// Runs a future under this deadline.
    ///
    /// Unbounded deadlines await the future directly; bounded deadlines wrap
    /// it in [`tokio::time::timeout`] with the remaining budget.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineExpired`] when the budget elapses first.
    pub async fn run<F>(&self, future: F) -> Result<F::Output, DeadlineExpired>
    where
        F: Future,
    {
        match self.remaining() {
            None => Ok(future.await),
            Some(remaining) if remaining.is_zero() => Err(DeadlineExpired),
            Some(remaining) => tokio::time::timeout(remaining, future)
                .await
                .map_err(|_elapsed| DeadlineExpired),
        }
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}
