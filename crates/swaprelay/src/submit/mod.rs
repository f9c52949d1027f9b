//! Relay submission client and protocol transports.

/// Submission client implementation.
mod client;
/// JSON-RPC relay transport (Protocol A).
mod rpc;
/// Latency instrumentation.
mod timing;
/// Shared submission types, errors, and transport traits.
mod types;

pub use client::{RelaySubmitter, SubmitReceipt, decode_transaction, encode_transaction};
pub use rpc::{FALLBACK_SIGNATURE_FIELDS, JsonRpcRelayTransport};
pub use timing::SubmitTiming;
pub use types::{
    BroadcastConfig, BroadcastTransport, RelayProtocol, RelaySubmitConfig, RelayTransportError,
    RpcRelayTransport, SubmitError,
};
