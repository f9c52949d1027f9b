//! Direct legacy provider adapter: POST the swap parameters verbatim.

use super::{EncodedTransaction, FetchError, http};
use crate::request::SwapRequest;

/// Synonymous transaction fields accepted from legacy providers, in priority order.
pub(super) const TRANSACTION_FIELDS: [&str; 3] = ["transaction", "swapTransaction", "tx"];

/// Fetches an encoded transaction from a legacy provider.
pub(super) async fn fetch(
    client: &reqwest::Client,
    endpoint: &str,
    request: &SwapRequest,
) -> Result<EncodedTransaction, FetchError> {
    let body = http::send_json(client.post(endpoint).json(request)).await?;

    http::first_string_field(&body, &TRANSACTION_FIELDS)
        .map(EncodedTransaction::new)
        .ok_or_else(|| FetchError::InvalidResponseShape {
            expected: "transaction|swapTransaction|tx",
            body: body.to_string(),
        })
}
