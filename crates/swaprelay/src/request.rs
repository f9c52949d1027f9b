//! Validated swap parameters shared by all provider protocols.

use serde::Serialize;
use thiserror::Error;

/// Default slippage tolerance in basis points.
pub const DEFAULT_SLIPPAGE_BPS: u16 = 50;

/// Maximum representable slippage tolerance (100%).
pub const MAX_SLIPPAGE_BPS: u16 = 10_000;

/// Errors raised by [`SwapRequest`] construction.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SwapRequestError {
    /// Swap amount must be a positive integer in smallest units.
    #[error("swap amount must be greater than zero")]
    ZeroAmount,
    /// Slippage tolerance exceeds 10000 basis points.
    #[error("slippage tolerance {bps} exceeds {MAX_SLIPPAGE_BPS} bps")]
    SlippageOutOfRange {
        /// Rejected basis-point value.
        bps: u16,
    },
}

/// One swap attempt's parameters, immutable once constructed.
///
/// Serializes with the camelCase field names the legacy provider protocol
/// accepts verbatim.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    /// Input asset mint address.
    pub input_mint: String,
    /// Output asset mint address.
    pub output_mint: String,
    /// Swap amount in smallest units.
    pub amount: u64,
    /// Slippage tolerance in basis points.
    pub slippage_bps: u16,
    /// Payer public-key string.
    pub user_public_key: String,
}

impl SwapRequest {
    /// Creates a swap request with the default slippage tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SwapRequestError::ZeroAmount`] when `amount` is zero.
    pub fn new(
        input_mint: impl Into<String>,
        output_mint: impl Into<String>,
        amount: u64,
        payer: impl Into<String>,
    ) -> Result<Self, SwapRequestError> {
        if amount == 0 {
            return Err(SwapRequestError::ZeroAmount);
        }
        Ok(Self {
            input_mint: input_mint.into(),
            output_mint: output_mint.into(),
            amount,
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
            user_public_key: payer.into(),
        })
    }

    /// Sets an explicit slippage tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SwapRequestError::SlippageOutOfRange`] when `bps` exceeds
    /// [`MAX_SLIPPAGE_BPS`].
    pub fn with_slippage_bps(mut self, bps: u16) -> Result<Self, SwapRequestError> {
        if bps > MAX_SLIPPAGE_BPS {
            return Err(SwapRequestError::SlippageOutOfRange { bps });
        }
        self.slippage_bps = bps;
        Ok(self)
    }
}
