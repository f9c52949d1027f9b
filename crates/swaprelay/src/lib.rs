#![forbid(unsafe_code)]

//! Swap pipeline for fetching provider-built transactions, signing them, and
//! submitting them through a low-latency relay.
//!
//! The crate is two components composed only through an opaque
//! [`EncodedTransaction`] value: [`TransactionFetcher`] negotiates one of
//! three provider protocols and returns the encoded payload;
//! [`RelaySubmitter`] decodes it, runs one signing pass, and submits through
//! the configured relay protocol, returning a confirmation identifier.

/// Environment-variable construction helpers.
pub mod config;
/// Deadline token threaded through fetch and submit.
pub mod deadline;
/// Provider protocol adapters and fetch orchestration.
pub mod fetch;
/// Validated swap parameters.
pub mod request;
/// Signing boundary trait and local keypair adapter.
pub mod signing;
/// Relay submission client, transports, and timing.
pub mod submit;

pub use config::{ConfigError, fetcher_from_env, submitter_from_env};
pub use deadline::{Deadline, DeadlineExpired};
pub use fetch::{EncodedTransaction, FetchError, ProviderProtocol, TransactionFetcher};
pub use request::{SwapRequest, SwapRequestError};
pub use signing::{KeypairSigner, SigningError, TransactionSigner};
pub use submit::{
    BroadcastConfig, BroadcastTransport, JsonRpcRelayTransport, RelayProtocol, RelaySubmitConfig,
    RelaySubmitter, RelayTransportError, RpcRelayTransport, SubmitError, SubmitReceipt,
    SubmitTiming,
};
