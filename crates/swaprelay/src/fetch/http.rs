//! Shared HTTP plumbing for the provider adapters.

use serde_json::Value;

use super::FetchError;

/// Sends a prepared provider request and parses a 2xx JSON body.
///
/// Non-2xx statuses become [`FetchError::Http`] carrying the best-effort body
/// text; transport and JSON-parse failures become [`FetchError::Transport`].
pub(super) async fn send_json(request: reqwest::RequestBuilder) -> Result<Value, FetchError> {
    let response = request
        .send()
        .await
        .map_err(|error| FetchError::Transport {
            message: error.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Http {
            status: status.as_u16(),
            body,
        });
    }

    response.json().await.map_err(|error| FetchError::Transport {
        message: error.to_string(),
    })
}

/// Returns the first present string field from `candidates`, in order.
pub(super) fn first_string_field(body: &Value, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find_map(|field| body.get(*field).and_then(Value::as_str))
        .map(str::to_owned)
}
