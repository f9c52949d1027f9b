//! Relay submission client: decode, sign, re-encode, dispatch.

use std::{sync::Arc, time::Instant};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use solana_transaction::versioned::VersionedTransaction;
use tracing::{debug, warn};

use super::{
    BroadcastConfig, BroadcastTransport, RelayProtocol, RelaySubmitConfig, RelayTransportError,
    RpcRelayTransport, SubmitError, SubmitTiming,
};
use crate::{deadline::Deadline, fetch::EncodedTransaction, signing::TransactionSigner};

/// Receipt for one successful submission.
#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    /// Confirmation identifier returned by the relay.
    pub confirmation: String,
    /// Protocol that carried the submission.
    pub protocol: RelayProtocol,
    /// Elapsed-duration measurements, observability only.
    pub timing: SubmitTiming,
}

/// Decodes an opaque encoded payload into a structured transaction.
///
/// # Errors
///
/// Returns [`SubmitError::MalformedTransaction`] when base64 or wire decoding
/// fails.
pub fn decode_transaction(encoded: &EncodedTransaction) -> Result<VersionedTransaction, SubmitError> {
    let bytes =
        BASE64_STANDARD
            .decode(encoded.as_str())
            .map_err(|error| SubmitError::MalformedTransaction {
                message: error.to_string(),
            })?;
    bincode::deserialize(&bytes).map_err(|error| SubmitError::MalformedTransaction {
        message: error.to_string(),
    })
}

/// Re-encodes a structured transaction into the opaque transport form.
///
/// # Errors
///
/// Returns [`SubmitError::MalformedTransaction`] when wire encoding fails.
pub fn encode_transaction(tx: &VersionedTransaction) -> Result<EncodedTransaction, SubmitError> {
    let bytes = bincode::serialize(tx).map_err(|error| SubmitError::MalformedTransaction {
        message: error.to_string(),
    })?;
    Ok(EncodedTransaction::new(BASE64_STANDARD.encode(bytes)))
}

/// Submission client orchestrating one decode → sign → encode → relay pass.
pub struct RelaySubmitter {
    /// Caller-supplied signing capability.
    signer: Arc<dyn TransactionSigner>,
    /// Relay protocol fixed by configuration.
    protocol: RelayProtocol,
    /// Protocol A transport.
    rpc_transport: Option<Arc<dyn RpcRelayTransport>>,
    /// Protocol B transport.
    broadcast_transport: Option<Arc<dyn BroadcastTransport>>,
    /// Relay tuning.
    config: RelaySubmitConfig,
}

impl RelaySubmitter {
    /// Creates a submitter with no transports preconfigured.
    #[must_use]
    pub fn new(signer: Arc<dyn TransactionSigner>, protocol: RelayProtocol) -> Self {
        Self {
            signer,
            protocol,
            rpc_transport: None,
            broadcast_transport: None,
            config: RelaySubmitConfig::default(),
        }
    }

    /// Sets the Protocol A transport.
    #[must_use]
    pub fn with_rpc_transport(mut self, transport: Arc<dyn RpcRelayTransport>) -> Self {
        self.rpc_transport = Some(transport);
        self
    }

    /// Sets the Protocol B transport.
    #[must_use]
    pub fn with_broadcast_transport(mut self, transport: Arc<dyn BroadcastTransport>) -> Self {
        self.broadcast_transport = Some(transport);
        self
    }

    /// Sets relay tuning.
    #[must_use]
    pub fn with_config(mut self, config: RelaySubmitConfig) -> Self {
        self.config = config;
        self
    }

    /// Submits one encoded transaction and returns the confirmation identifier.
    ///
    /// Runs exactly one signing pass. Every failure is surfaced unchanged
    /// after the total elapsed time is recorded; nothing is retried here.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] on decode, signing, transport, relay
    /// rejection, unrecognized response, or deadline expiry.
    pub async fn submit(
        &self,
        encoded: &EncodedTransaction,
        deadline: &Deadline,
    ) -> Result<SubmitReceipt, SubmitError> {
        let started = Instant::now();
        let outcome = self.submit_inner(encoded, deadline, started).await;
        match &outcome {
            Ok(receipt) => {
                debug!(protocol = ?receipt.protocol, timing = %receipt.timing.report(), "submission confirmed");
            }
            Err(error) => {
                let total = started.elapsed();
                warn!(protocol = ?self.protocol, %error, total_s = %format_args!("{:.5}", total.as_secs_f64()), "submission failed");
            }
        }
        outcome
    }

    /// Decode → sign → re-encode → relay, in strict order.
    async fn submit_inner(
        &self,
        encoded: &EncodedTransaction,
        deadline: &Deadline,
        started: Instant,
    ) -> Result<SubmitReceipt, SubmitError> {
        let tx = decode_transaction(encoded)?;

        // The signing capability may suspend for user or hardware
        // confirmation; it is always awaited to completion and the deadline
        // is only consulted once it resolves.
        let signed = self
            .signer
            .sign(tx)
            .await
            .map_err(|source| SubmitError::Signing { source })?;
        if deadline.is_expired() {
            return Err(SubmitError::Timeout);
        }

        let tx_bytes =
            bincode::serialize(&signed).map_err(|error| SubmitError::MalformedTransaction {
                message: error.to_string(),
            })?;
        let prepare = started.elapsed();

        let request_started = Instant::now();
        let confirmation = self.relay(&tx_bytes, deadline).await?;
        let request = request_started.elapsed();

        Ok(SubmitReceipt {
            confirmation,
            protocol: self.protocol,
            timing: SubmitTiming {
                prepare,
                request,
                total: started.elapsed(),
            },
        })
    }

    /// Dispatches signed bytes through the configured relay protocol.
    async fn relay(&self, tx_bytes: &[u8], deadline: &Deadline) -> Result<String, SubmitError> {
        match self.protocol {
            RelayProtocol::JsonRpc => {
                let transport = self
                    .rpc_transport
                    .as_ref()
                    .ok_or(SubmitError::MissingRpcTransport)?;
                deadline
                    .run(transport.submit_rpc(tx_bytes, &self.config))
                    .await
                    .map_err(|_expired| SubmitError::Timeout)?
                    .map_err(SubmitError::from)
            }
            RelayProtocol::Broadcast => {
                let transport = self
                    .broadcast_transport
                    .as_ref()
                    .ok_or(SubmitError::MissingBroadcastTransport)?;
                let config = BroadcastConfig {
                    skip_preflight: self.config.skip_preflight,
                    max_retries: self.config.max_retries,
                };
                deadline
                    .run(transport.broadcast(tx_bytes, &config))
                    .await
                    .map_err(|_expired| SubmitError::Timeout)?
                    .map_err(|error| match error {
                        // Protocol B has no response body to normalize; any
                        // broadcast failure is the relay rejecting the send.
                        RelayTransportError::Failure { message } => SubmitError::RelayRejected {
                            message,
                            code: None,
                        },
                        other => SubmitError::from(other),
                    })
            }
        }
    }
}
