//! Shared fetch types, provider selection, and errors.

use thiserror::Error;

/// Substring markers mapped to the aggregator protocol by [`ProviderProtocol::infer`].
pub const AGGREGATOR_MARKERS: [&str; 2] = ["get_swap_route", "/defi/router/"];

/// Substring markers mapped to the two-step quote protocol by [`ProviderProtocol::infer`].
pub const QUOTE_MARKERS: [&str; 2] = ["quote-api", "/quote"];

/// Opaque base64 transaction payload exchanged between fetch and submit.
///
/// The core never interprets the contents beyond the submission client's
/// decode step.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EncodedTransaction(String);

impl EncodedTransaction {
    /// Wraps an already-encoded payload.
    #[must_use]
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Returns the base64 payload.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the base64 payload.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Provider wire protocol, fixed at fetcher construction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ProviderProtocol {
    /// Custom aggregator: GET, `{data:{swapData}}` body.
    Aggregator,
    /// Two-step quote API: GET quote, POST swap construction.
    Quote,
    /// Direct legacy provider: POST parameters verbatim.
    Legacy,
}

impl ProviderProtocol {
    /// Maps an endpoint URL onto a protocol by substring, first match wins.
    ///
    /// This is a boundary convenience only; protocol choice belongs to
    /// configuration. Priority: aggregator markers, then quote markers, then
    /// legacy as the default.
    #[must_use]
    pub fn infer(endpoint: &str) -> Self {
        if AGGREGATOR_MARKERS
            .iter()
            .any(|marker| endpoint.contains(marker))
        {
            return Self::Aggregator;
        }
        if QUOTE_MARKERS.iter().any(|marker| endpoint.contains(marker)) {
            return Self::Quote;
        }
        Self::Legacy
    }
}

/// Fetch-side errors.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Fetcher construction failed.
    #[error("fetcher configuration invalid: {message}")]
    Config {
        /// Human-readable description.
        message: String,
    },
    /// Provider returned a non-2xx status.
    #[error("provider returned status {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Best-effort response body text.
        body: String,
    },
    /// Provider body parsed as JSON but carried none of the expected fields.
    #[error("provider response missing expected field(s) {expected}: {body}")]
    InvalidResponseShape {
        /// Fields probed, in priority order.
        expected: &'static str,
        /// Offending body, for diagnostics.
        body: String,
    },
    /// Request transport failed before a status was available.
    #[error("provider request failed: {message}")]
    Transport {
        /// Human-readable description.
        message: String,
    },
    /// Deadline expired before the fetch completed.
    #[error("fetch deadline expired")]
    Timeout,
}
