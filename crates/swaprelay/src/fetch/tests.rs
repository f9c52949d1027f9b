//! Fetch module unit tests.

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path, query_param},
};

use super::{FetchError, ProviderProtocol, TransactionFetcher};
use crate::{deadline::Deadline, request::SwapRequest};

/// Builds a valid request used across tests.
fn swap_request() -> SwapRequest {
    let request = SwapRequest::new("MintIn1111", "MintOut222", 1_000_000, "PayerKey33");
    assert!(request.is_ok());
    request.unwrap_or_else(|_| unreachable!("request parameters are valid"))
}

/// Builds a fetcher pinned to one protocol for a mock server endpoint.
fn fetcher(endpoint: &str, protocol: ProviderProtocol) -> TransactionFetcher {
    let fetcher = TransactionFetcher::with_protocol(endpoint, protocol);
    assert!(fetcher.is_ok());
    fetcher.unwrap_or_else(|_| unreachable!("client construction is infallible here"))
}

#[tokio::test]
async fn aggregator_returns_swap_data_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/route"))
        .and(query_param("tokenIn", "MintIn1111"))
        .and(query_param("tokenOut", "MintOut222"))
        .and(query_param("amount", "1000000"))
        .and(query_param("sender", "PayerKey33"))
        .and(query_param("slippage", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"swapData": "YWdncmVnYXRvcg==", "quote": {"outAmount": "5"}}
        })))
        .mount(&server)
        .await;

    let fetcher = fetcher(
        &format!("{}/route", server.uri()),
        ProviderProtocol::Aggregator,
    );
    let fetched = fetcher.fetch(&swap_request(), &Deadline::none()).await;
    assert!(fetched.is_ok());
    if let Ok(tx) = fetched {
        assert_eq!(tx.as_str(), "YWdncmVnYXRvcg==");
    }
}

#[tokio::test]
async fn aggregator_without_swap_data_is_invalid_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server.uri(), ProviderProtocol::Aggregator);
    let fetched = fetcher.fetch(&swap_request(), &Deadline::none()).await;
    assert!(matches!(
        fetched,
        Err(FetchError::InvalidResponseShape { expected, .. }) if expected == "data.swapData"
    ));
}

#[tokio::test]
async fn aggregator_non_success_status_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server.uri(), ProviderProtocol::Aggregator);
    let fetched = fetcher.fetch(&swap_request(), &Deadline::none()).await;
    assert!(matches!(
        fetched,
        Err(FetchError::Http { status: 429, body }) if body == "slow down"
    ));
}

#[tokio::test]
async fn quote_protocol_posts_quote_to_swap_build_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v6/quote"))
        .and(query_param("inputMint", "MintIn1111"))
        .and(query_param("outputMint", "MintOut222"))
        .and(query_param("amount", "1000000"))
        .and(query_param("slippageBps", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inAmount": "1000000", "outAmount": "987654", "routePlan": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v6/swap"))
        .and(body_partial_json(json!({
            "quoteResponse": {"inAmount": "1000000", "outAmount": "987654", "routePlan": []},
            "userPublicKey": "PayerKey33",
            "wrapAndUnwrapSol": true,
            "dynamicComputeUnitLimit": true,
            "prioritizationFeeLamports": "auto"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"swapTransaction": "cXVvdGU="})),
        )
        .mount(&server)
        .await;

    let fetcher = fetcher(&format!("{}/v6/quote", server.uri()), ProviderProtocol::Quote)
        .with_swap_build_url(format!("{}/v6/swap", server.uri()));
    let fetched = fetcher.fetch(&swap_request(), &Deadline::none()).await;
    assert!(fetched.is_ok());
    if let Ok(tx) = fetched {
        assert_eq!(tx.as_str(), "cXVvdGU=");
    }
}

#[tokio::test]
async fn quote_protocol_missing_swap_transaction_is_invalid_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"outAmount": "1"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "no route"})))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server.uri(), ProviderProtocol::Quote)
        .with_swap_build_url(server.uri());
    let fetched = fetcher.fetch(&swap_request(), &Deadline::none()).await;
    assert!(matches!(
        fetched,
        Err(FetchError::InvalidResponseShape { expected, .. }) if expected == "swapTransaction"
    ));
}

#[tokio::test]
async fn quote_step_failure_is_surfaced_before_swap_construction() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("quote backend down"))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server.uri(), ProviderProtocol::Quote)
        .with_swap_build_url(server.uri());
    let fetched = fetcher.fetch(&swap_request(), &Deadline::none()).await;
    assert!(matches!(
        fetched,
        Err(FetchError::Http { status: 500, body }) if body == "quote backend down"
    ));
}

#[tokio::test]
async fn legacy_protocol_posts_parameters_and_probes_field_priority() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "inputMint": "MintIn1111",
            "outputMint": "MintOut222",
            "amount": 1_000_000,
            "slippageBps": 50,
            "userPublicKey": "PayerKey33"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tx": "shadowed", "swapTransaction": "bGVnYWN5"
        })))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server.uri(), ProviderProtocol::Legacy);
    let fetched = fetcher.fetch(&swap_request(), &Deadline::none()).await;
    assert!(fetched.is_ok());
    if let Ok(tx) = fetched {
        assert_eq!(tx.as_str(), "bGVnYWN5");
    }
}

#[tokio::test]
async fn legacy_protocol_accepts_tx_field_alone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tx": "dHgtb25seQ=="})))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server.uri(), ProviderProtocol::Legacy);
    let fetched = fetcher.fetch(&swap_request(), &Deadline::none()).await;
    assert!(fetched.is_ok());
    if let Ok(tx) = fetched {
        assert_eq!(tx.as_str(), "dHgtb25seQ==");
    }
}

#[tokio::test]
async fn legacy_protocol_without_any_field_is_invalid_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server.uri(), ProviderProtocol::Legacy);
    let fetched = fetcher.fetch(&swap_request(), &Deadline::none()).await;
    assert!(matches!(
        fetched,
        Err(FetchError::InvalidResponseShape { .. })
    ));
}

#[tokio::test]
async fn expired_deadline_short_circuits_with_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tx": "late"})))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server.uri(), ProviderProtocol::Legacy);
    let deadline = Deadline::after(std::time::Duration::ZERO);
    let fetched = fetcher.fetch(&swap_request(), &deadline).await;
    assert!(matches!(fetched, Err(FetchError::Timeout)));
}
