//! Environment-variable construction helpers for the pipeline components.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    fetch::{FetchError, ProviderProtocol, TransactionFetcher},
    signing::TransactionSigner,
    submit::{JsonRpcRelayTransport, RelayProtocol, RelaySubmitter, RelayTransportError},
};

/// Provider endpoint URL.
pub const ENV_PROVIDER_URL: &str = "SWAPRELAY_PROVIDER_URL";
/// Optional explicit provider protocol (`aggregator`, `quote`, `legacy`).
pub const ENV_PROVIDER_PROTOCOL: &str = "SWAPRELAY_PROVIDER_PROTOCOL";
/// Optional swap-construction URL override for the quote protocol.
pub const ENV_SWAP_BUILD_URL: &str = "SWAPRELAY_SWAP_BUILD_URL";
/// Relay endpoint URL.
pub const ENV_RELAY_URL: &str = "SWAPRELAY_RELAY_URL";
/// Relay protocol selector (`json-rpc` or `broadcast`).
pub const ENV_RELAY_PROTOCOL: &str = "SWAPRELAY_RELAY_PROTOCOL";

/// Errors raised while building components from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset.
    #[error("environment variable {name} is not set")]
    Missing {
        /// Variable name.
        name: &'static str,
    },
    /// A variable holds an unrecognized value.
    #[error("invalid {name} value `{value}`: expected one of {expected}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
        /// Accepted values.
        expected: &'static str,
    },
    /// Fetcher construction failed.
    #[error("failed to build fetcher: {source}")]
    Fetcher {
        /// Fetch-layer failure.
        source: FetchError,
    },
    /// Relay transport construction failed.
    #[error("failed to build relay transport: {source}")]
    Relay {
        /// Transport-layer failure.
        source: RelayTransportError,
    },
}

/// Reads one environment variable, treating empty values as unset.
fn read_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Builds a [`TransactionFetcher`] from `SWAPRELAY_*` variables.
///
/// The provider protocol is inferred from the endpoint URL unless
/// [`ENV_PROVIDER_PROTOCOL`] pins it explicitly.
///
/// # Errors
///
/// Returns [`ConfigError`] when the endpoint is unset, the protocol value is
/// unrecognized, or client construction fails.
pub fn fetcher_from_env() -> Result<TransactionFetcher, ConfigError> {
    let endpoint = read_env_var(ENV_PROVIDER_URL).ok_or(ConfigError::Missing {
        name: ENV_PROVIDER_URL,
    })?;

    let fetcher = match read_env_var(ENV_PROVIDER_PROTOCOL) {
        None => TransactionFetcher::new(endpoint),
        Some(value) => {
            let protocol = match value.as_str() {
                "aggregator" => ProviderProtocol::Aggregator,
                "quote" => ProviderProtocol::Quote,
                "legacy" => ProviderProtocol::Legacy,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: ENV_PROVIDER_PROTOCOL,
                        value,
                        expected: "aggregator|quote|legacy",
                    });
                }
            };
            TransactionFetcher::with_protocol(endpoint, protocol)
        }
    }
    .map_err(|source| ConfigError::Fetcher { source })?;

    Ok(match read_env_var(ENV_SWAP_BUILD_URL) {
        Some(url) => fetcher.with_swap_build_url(url),
        None => fetcher,
    })
}

/// Builds a [`RelaySubmitter`] from `SWAPRELAY_*` variables.
///
/// Only the JSON-RPC protocol can be fully constructed here; `broadcast`
/// selects Protocol B and leaves the transport for the caller to attach.
///
/// # Errors
///
/// Returns [`ConfigError`] when the relay URL is unset (for JSON-RPC), the
/// protocol value is unrecognized, or transport construction fails.
pub fn submitter_from_env(signer: Arc<dyn TransactionSigner>) -> Result<RelaySubmitter, ConfigError> {
    let protocol = match read_env_var(ENV_RELAY_PROTOCOL).as_deref() {
        None | Some("json-rpc") => RelayProtocol::JsonRpc,
        Some("broadcast") => RelayProtocol::Broadcast,
        Some(value) => {
            return Err(ConfigError::Invalid {
                name: ENV_RELAY_PROTOCOL,
                value: value.to_owned(),
                expected: "json-rpc|broadcast",
            });
        }
    };

    let submitter = RelaySubmitter::new(signer, protocol);
    if protocol == RelayProtocol::Broadcast {
        return Ok(submitter);
    }

    let relay_url = read_env_var(ENV_RELAY_URL).ok_or(ConfigError::Missing {
        name: ENV_RELAY_URL,
    })?;
    let transport =
        JsonRpcRelayTransport::new(relay_url).map_err(|source| ConfigError::Relay { source })?;
    Ok(submitter.with_rpc_transport(Arc::new(transport)))
}
