//! Two-step quote provider adapter: GET a quote, POST it for swap construction.

use serde_json::json;

use super::{EncodedTransaction, FetchError, http};
use crate::request::SwapRequest;

/// Fetches a quote and exchanges it for an encoded swap transaction.
///
/// The quote body is forwarded to the swap-construction endpoint verbatim;
/// the core never interprets its contents.
pub(super) async fn fetch(
    client: &reqwest::Client,
    endpoint: &str,
    swap_build_url: &str,
    request: &SwapRequest,
) -> Result<EncodedTransaction, FetchError> {
    let amount = request.amount.to_string();
    let slippage_bps = request.slippage_bps.to_string();
    let quote = http::send_json(client.get(endpoint).query(&[
        ("inputMint", request.input_mint.as_str()),
        ("outputMint", request.output_mint.as_str()),
        ("amount", amount.as_str()),
        ("slippageBps", slippage_bps.as_str()),
    ]))
    .await?;

    let body = http::send_json(client.post(swap_build_url).json(&json!({
        "quoteResponse": quote,
        "userPublicKey": request.user_public_key,
        "wrapAndUnwrapSol": true,
        "dynamicComputeUnitLimit": true,
        "prioritizationFeeLamports": "auto",
    })))
    .await?;

    http::first_string_field(&body, &["swapTransaction"])
        .map(EncodedTransaction::new)
        .ok_or_else(|| FetchError::InvalidResponseShape {
            expected: "swapTransaction",
            body: body.to_string(),
        })
}
