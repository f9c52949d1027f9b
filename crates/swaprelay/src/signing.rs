//! Signing boundary consumed by the submission client.

use async_trait::async_trait;
use solana_keypair::Keypair;
use solana_signer::SignerError;
use solana_transaction::versioned::VersionedTransaction;
use thiserror::Error;

/// Errors surfaced by signing capabilities.
#[derive(Debug, Error)]
pub enum SigningError {
    /// Local signer failed with a signer-level error.
    #[error("failed to sign transaction: {source}")]
    Signer {
        /// Underlying signer error.
        source: SignerError,
    },
    /// External signing capability declined or failed.
    #[error("signing capability failed: {message}")]
    Capability {
        /// Human-readable description.
        message: String,
    },
}

/// Caller-supplied signing capability.
///
/// Implementations may suspend for user interaction or hardware
/// confirmation; the submission client awaits the call to completion and
/// never cancels it mid-flight.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Signs the decoded transaction and returns the signed form.
    async fn sign(&self, tx: VersionedTransaction) -> Result<VersionedTransaction, SigningError>;
}

/// In-process signer backed by one keypair.
pub struct KeypairSigner {
    /// Fee-payer keypair.
    keypair: Keypair,
}

impl KeypairSigner {
    /// Creates a signer around an owned keypair.
    #[must_use]
    pub const fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }
}

#[async_trait]
impl TransactionSigner for KeypairSigner {
    async fn sign(&self, tx: VersionedTransaction) -> Result<VersionedTransaction, SigningError> {
        VersionedTransaction::try_new(tx.message, &[&self.keypair])
            .map_err(|source| SigningError::Signer { source })
    }
}
