//! Fetch orchestration across the provider protocols.

use tracing::debug;

use super::{EncodedTransaction, FetchError, ProviderProtocol, aggregator, legacy, quote};
use crate::{deadline::Deadline, request::SwapRequest};

/// Default swap-construction endpoint for the two-step quote protocol.
pub const DEFAULT_SWAP_BUILD_URL: &str = "https://quote-api.jup.ag/v6/swap";

/// Provider client resolving one protocol per configured endpoint.
#[derive(Debug, Clone)]
pub struct TransactionFetcher {
    /// HTTP client shared across fetch calls.
    http: reqwest::Client,
    /// Provider endpoint URL.
    endpoint: String,
    /// Protocol fixed at construction.
    protocol: ProviderProtocol,
    /// Swap-construction URL for the two-step quote protocol.
    swap_build_url: String,
}

impl TransactionFetcher {
    /// Creates a fetcher, inferring the protocol from the endpoint URL.
    ///
    /// Inference is a boundary convenience; use [`Self::with_protocol`] to
    /// pin the protocol explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Config`] when HTTP client creation fails.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let endpoint = endpoint.into();
        let protocol = ProviderProtocol::infer(&endpoint);
        Self::with_protocol(endpoint, protocol)
    }

    /// Creates a fetcher with an explicitly selected protocol.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Config`] when HTTP client creation fails.
    pub fn with_protocol(
        endpoint: impl Into<String>,
        protocol: ProviderProtocol,
    ) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|error| FetchError::Config {
                message: error.to_string(),
            })?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            protocol,
            swap_build_url: DEFAULT_SWAP_BUILD_URL.to_owned(),
        })
    }

    /// Overrides the swap-construction URL used by the quote protocol.
    #[must_use]
    pub fn with_swap_build_url(mut self, url: impl Into<String>) -> Self {
        self.swap_build_url = url.into();
        self
    }

    /// Returns the configured protocol.
    #[must_use]
    pub const fn protocol(&self) -> ProviderProtocol {
        self.protocol
    }

    /// Fetches one encoded transaction for the swap request.
    ///
    /// Exactly one encoded transaction is produced per successful call; all
    /// protocols return the identical opaque shape.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, non-2xx provider status,
    /// unrecognized response shape, or deadline expiry.
    pub async fn fetch(
        &self,
        request: &SwapRequest,
        deadline: &Deadline,
    ) -> Result<EncodedTransaction, FetchError> {
        let fetched = deadline
            .run(self.fetch_inner(request))
            .await
            .map_err(|_expired| FetchError::Timeout)?;
        match &fetched {
            Ok(_tx) => debug!(protocol = ?self.protocol, "provider returned encoded transaction"),
            Err(error) => debug!(protocol = ?self.protocol, %error, "provider fetch failed"),
        }
        fetched
    }

    /// Dispatches to the configured protocol adapter.
    async fn fetch_inner(&self, request: &SwapRequest) -> Result<EncodedTransaction, FetchError> {
        match self.protocol {
            ProviderProtocol::Aggregator => {
                aggregator::fetch(&self.http, &self.endpoint, request).await
            }
            ProviderProtocol::Quote => {
                quote::fetch(&self.http, &self.endpoint, &self.swap_build_url, request).await
            }
            ProviderProtocol::Legacy => legacy::fetch(&self.http, &self.endpoint, request).await,
        }
    }
}
