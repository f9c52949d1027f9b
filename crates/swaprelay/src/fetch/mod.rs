//! Transaction acquisition across differently-shaped swap providers.

/// Custom aggregator protocol adapter.
mod aggregator;
/// Fetch orchestration client.
mod client;
/// Shared HTTP plumbing.
mod http;
/// Direct legacy protocol adapter.
mod legacy;
/// Two-step quote protocol adapter.
mod quote;
#[cfg(test)]
/// Fetch module unit tests.
mod tests;
/// Shared fetch types and errors.
mod types;

pub use client::{DEFAULT_SWAP_BUILD_URL, TransactionFetcher};
pub use types::{
    AGGREGATOR_MARKERS, EncodedTransaction, FetchError, ProviderProtocol, QUOTE_MARKERS,
};
