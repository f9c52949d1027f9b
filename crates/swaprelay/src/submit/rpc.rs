//! JSON-RPC relay transport (Protocol A).

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use serde::Serialize;
use serde_json::Value;

use super::{RelaySubmitConfig, RelayTransportError, RpcRelayTransport};

/// Fallback confirmation fields probed on a 200 response, in priority order.
pub const FALLBACK_SIGNATURE_FIELDS: [&str; 3] = ["signature", "txid", "txSignature"];

/// Relay transport that submits through a JSON-RPC 2.0 `sendTransaction` envelope.
#[derive(Debug, Clone)]
pub struct JsonRpcRelayTransport {
    /// HTTP client used for relay calls.
    client: reqwest::Client,
    /// Relay endpoint URL.
    relay_url: String,
}

impl JsonRpcRelayTransport {
    /// Creates a JSON-RPC relay transport.
    ///
    /// # Errors
    ///
    /// Returns [`RelayTransportError::Config`] when HTTP client creation fails.
    pub fn new(relay_url: impl Into<String>) -> Result<Self, RelayTransportError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| RelayTransportError::Config {
                message: error.to_string(),
            })?;
        Ok(Self {
            client,
            relay_url: relay_url.into(),
        })
    }
}

/// Send options serialized into the envelope's second parameter.
#[derive(Debug, Serialize)]
struct SendOptions<'config> {
    /// Transaction encoding format.
    encoding: &'static str,
    /// Skip preflight simulation.
    #[serde(rename = "skipPreflight")]
    skip_preflight: bool,
    /// Preflight commitment level.
    #[serde(rename = "preflightCommitment")]
    preflight_commitment: &'config str,
    /// Relay-side retry budget.
    #[serde(rename = "maxRetries")]
    max_retries: u8,
}

/// Extracts the relay's message and code from an error body, best effort.
///
/// Probe order: `error.message`, top-level `message`, `error.code`; callers
/// fall back to the raw body text when all are absent.
fn relay_error_parts(body: &Value) -> (Option<String>, Option<i64>) {
    let error = body.get("error");
    let code = error
        .and_then(|error| error.get("code"))
        .and_then(Value::as_i64);
    let message = error
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .map(str::to_owned)
        .or_else(|| code.map(|code| format!("relay error code {code}")));
    (message, code)
}

/// Normalizes a non-200 relay response into a rejection.
fn rejection_from_status(status: u16, body_text: &str) -> RelayTransportError {
    let (message, code) = serde_json::from_str::<Value>(body_text)
        .map(|body| relay_error_parts(&body))
        .unwrap_or((None, None));
    let message =
        message.unwrap_or_else(|| format!("relay returned status {status}: {body_text}"));
    RelayTransportError::Rejected { message, code }
}

/// Normalizes a 200 relay body per the response union.
///
/// `result` wins, then an explicit `error`, then the fallback signature
/// fields; anything else is unrecognized.
fn normalize_success_body(body: &Value) -> Result<String, RelayTransportError> {
    if let Some(result) = body.get("result").and_then(Value::as_str) {
        return Ok(result.to_owned());
    }
    if body.get("error").is_some() {
        let (message, code) = relay_error_parts(body);
        return Err(RelayTransportError::Rejected {
            message: message.unwrap_or_else(|| body.to_string()),
            code,
        });
    }
    for field in FALLBACK_SIGNATURE_FIELDS {
        if let Some(signature) = body.get(field).and_then(Value::as_str) {
            return Ok(signature.to_owned());
        }
    }
    Err(RelayTransportError::Unrecognized {
        body: body.to_string(),
    })
}

#[async_trait]
impl RpcRelayTransport for JsonRpcRelayTransport {
    async fn submit_rpc(
        &self,
        tx_bytes: &[u8],
        config: &RelaySubmitConfig,
    ) -> Result<String, RelayTransportError> {
        let encoded_tx = BASE64_STANDARD.encode(tx_bytes);
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "sendTransaction",
            "params": [
                encoded_tx,
                SendOptions {
                    encoding: "base64",
                    skip_preflight: config.skip_preflight,
                    preflight_commitment: &config.preflight_commitment,
                    max_retries: config.max_retries,
                }
            ]
        });

        let response = self
            .client
            .post(&self.relay_url)
            .json(&payload)
            .send()
            .await
            .map_err(|error| RelayTransportError::Failure {
                message: error.to_string(),
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body_text = response.text().await.unwrap_or_default();
            return Err(rejection_from_status(status.as_u16(), &body_text));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|error| RelayTransportError::Failure {
                message: error.to_string(),
            })?;
        normalize_success_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn result_field_wins() {
        let normalized = normalize_success_body(&json!({
            "jsonrpc": "2.0", "id": 1, "result": "abc123"
        }));
        assert_eq!(normalized, Ok("abc123".to_owned()));
    }

    #[test]
    fn error_field_becomes_rejection_with_message() {
        let normalized = normalize_success_body(&json!({
            "error": {"message": "blockhash not found", "code": -32002}
        }));
        assert_eq!(
            normalized,
            Err(RelayTransportError::Rejected {
                message: "blockhash not found".to_owned(),
                code: Some(-32002),
            })
        );
    }

    #[test]
    fn error_without_message_reports_code() {
        let normalized = normalize_success_body(&json!({"error": {"code": -32005}}));
        assert_eq!(
            normalized,
            Err(RelayTransportError::Rejected {
                message: "relay error code -32005".to_owned(),
                code: Some(-32005),
            })
        );
    }

    #[test]
    fn fallback_fields_probe_in_priority_order() {
        let normalized = normalize_success_body(&json!({"txid": "sig9"}));
        assert_eq!(normalized, Ok("sig9".to_owned()));

        let normalized = normalize_success_body(&json!({
            "txSignature": "third", "txid": "second", "signature": "first"
        }));
        assert_eq!(normalized, Ok("first".to_owned()));
    }

    #[test]
    fn unknown_shape_is_unrecognized() {
        let normalized = normalize_success_body(&json!({"status": "queued"}));
        assert!(matches!(
            normalized,
            Err(RelayTransportError::Unrecognized { .. })
        ));
    }

    #[test]
    fn non_success_status_prefers_flat_message_field() {
        let rejection = rejection_from_status(429, "{\"message\":\"rate limited\"}");
        assert_eq!(
            rejection,
            RelayTransportError::Rejected {
                message: "rate limited".to_owned(),
                code: None,
            }
        );
    }

    #[test]
    fn non_success_status_with_plain_text_keeps_raw_body() {
        let rejection = rejection_from_status(502, "bad gateway");
        assert!(matches!(
            rejection,
            RelayTransportError::Rejected { message, code: None }
                if message.contains("502") && message.contains("bad gateway")
        ));
    }
}
