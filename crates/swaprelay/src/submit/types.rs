//! Shared submission types, errors, and transport traits.

use async_trait::async_trait;
use thiserror::Error;

use crate::signing::SigningError;

/// Relay wire protocol, fixed by configuration at construction.
///
/// Never inferred from the relay endpoint string.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RelayProtocol {
    /// JSON-RPC 2.0 `sendTransaction` envelope.
    JsonRpc,
    /// Raw signed-bytes broadcast through a caller-supplied transport.
    Broadcast,
}

/// Relay submit tuning.
///
/// `max_retries: 0` is intentional; retry policy belongs to the caller.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RelaySubmitConfig {
    /// Skip preflight simulation when true.
    pub skip_preflight: bool,
    /// Preflight commitment string.
    pub preflight_commitment: String,
    /// Relay-side retry budget.
    pub max_retries: u8,
}

impl Default for RelaySubmitConfig {
    fn default() -> Self {
        Self {
            skip_preflight: true,
            preflight_commitment: "processed".to_owned(),
            max_retries: 0,
        }
    }
}

/// Broadcast tuning handed to [`BroadcastTransport`] implementations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BroadcastConfig {
    /// Skip preflight simulation when true.
    pub skip_preflight: bool,
    /// Relay-side retry budget.
    pub max_retries: u8,
}

/// Low-level transport errors surfaced by relay backends.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum RelayTransportError {
    /// Invalid transport configuration.
    #[error("relay transport configuration invalid: {message}")]
    Config {
        /// Human-readable description.
        message: String,
    },
    /// Relay returned an explicit rejection or a non-200 status.
    #[error("relay rejected transaction: {message}")]
    Rejected {
        /// Relay-provided message, or raw body text appended to a generic message.
        message: String,
        /// Relay-provided numeric code, when parseable.
        code: Option<i64>,
    },
    /// Relay returned 200 with a shape matching no known field.
    #[error("relay response unrecognized: {body}")]
    Unrecognized {
        /// Offending body, for diagnostics.
        body: String,
    },
    /// Request failed before a relay status was available.
    #[error("relay transport failure: {message}")]
    Failure {
        /// Human-readable description.
        message: String,
    },
}

/// Submission-level errors.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Encoded payload could not be decoded into a transaction.
    #[error("failed to decode encoded transaction: {message}")]
    MalformedTransaction {
        /// Decode-layer failure description.
        message: String,
    },
    /// Signing capability failed.
    #[error("signing failed: {source}")]
    Signing {
        /// Signing-layer failure.
        source: SigningError,
    },
    /// Broadcast protocol selected but no broadcast transport configured.
    #[error("broadcast transport is not configured")]
    MissingBroadcastTransport,
    /// JSON-RPC protocol selected but no RPC transport configured.
    #[error("rpc relay transport is not configured")]
    MissingRpcTransport,
    /// Relay returned an explicit error or non-200 status.
    #[error("relay rejected transaction: {message}")]
    RelayRejected {
        /// Relay-provided or best-effort message.
        message: String,
        /// Relay-provided numeric code, when parseable.
        code: Option<i64>,
    },
    /// Relay returned 200 with a shape matching no known field.
    #[error("relay response unrecognized: {body}")]
    UnrecognizedResponse {
        /// Offending body.
        body: String,
    },
    /// Request failed at the transport layer.
    #[error("relay transport failure: {message}")]
    Transport {
        /// Human-readable description.
        message: String,
    },
    /// Deadline expired before submission completed.
    #[error("submission deadline expired")]
    Timeout,
}

impl From<RelayTransportError> for SubmitError {
    fn from(error: RelayTransportError) -> Self {
        match error {
            RelayTransportError::Config { message } | RelayTransportError::Failure { message } => {
                Self::Transport { message }
            }
            RelayTransportError::Rejected { message, code } => {
                Self::RelayRejected { message, code }
            }
            RelayTransportError::Unrecognized { body } => Self::UnrecognizedResponse { body },
        }
    }
}

/// JSON-RPC relay transport interface (Protocol A).
#[async_trait]
pub trait RpcRelayTransport: Send + Sync {
    /// Submits signed transaction bytes and returns the confirmation identifier.
    async fn submit_rpc(
        &self,
        tx_bytes: &[u8],
        config: &RelaySubmitConfig,
    ) -> Result<String, RelayTransportError>;
}

/// Raw broadcast transport interface (Protocol B).
///
/// The caller's network client supplies the broadcast primitive; its return
/// value is the confirmation identifier.
#[async_trait]
pub trait BroadcastTransport: Send + Sync {
    /// Broadcasts signed transaction bytes and returns the confirmation identifier.
    async fn broadcast(
        &self,
        tx_bytes: &[u8],
        config: &BroadcastConfig,
    ) -> Result<String, RelayTransportError>;
}
