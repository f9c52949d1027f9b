//! Custom aggregator provider adapter.

use serde::Deserialize;

use super::{EncodedTransaction, FetchError, http};
use crate::request::SwapRequest;

/// Aggregator response envelope.
#[derive(Debug, Deserialize)]
struct AggregatorBody {
    /// Payload wrapper.
    data: Option<AggregatorData>,
}

/// Aggregator payload.
#[derive(Debug, Deserialize)]
struct AggregatorData {
    /// Encoded swap transaction.
    #[serde(rename = "swapData")]
    swap_data: Option<String>,
}

/// Fetches an encoded transaction through the aggregator GET protocol.
pub(super) async fn fetch(
    client: &reqwest::Client,
    endpoint: &str,
    request: &SwapRequest,
) -> Result<EncodedTransaction, FetchError> {
    let amount = request.amount.to_string();
    let slippage = request.slippage_bps.to_string();
    let body = http::send_json(client.get(endpoint).query(&[
        ("tokenIn", request.input_mint.as_str()),
        ("tokenOut", request.output_mint.as_str()),
        ("amount", amount.as_str()),
        ("sender", request.user_public_key.as_str()),
        ("slippage", slippage.as_str()),
    ]))
    .await?;

    let parsed: AggregatorBody =
        serde_json::from_value(body.clone()).unwrap_or(AggregatorBody { data: None });
    parsed
        .data
        .and_then(|data| data.swap_data)
        .map(EncodedTransaction::new)
        .ok_or_else(|| FetchError::InvalidResponseShape {
            expected: "data.swapData",
            body: body.to_string(),
        })
}
