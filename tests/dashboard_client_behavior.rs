//! Behavior tests for the dashboard client: auth headers, retry budget,
//! and error classification.

use std::sync::Arc;
use std::time::Duration;

use statline_core::{
    ApiErrorKind, ClientConfig, DashboardClient, HttpError, HttpResponse, RetryConfig,
};
use statline_tests::ScriptedHttpClient;

fn client_with(http: Arc<ScriptedHttpClient>, retry: RetryConfig) -> DashboardClient {
    let config = ClientConfig::new("key-1", "token-1")
        .with_api_base("https://dash.test/v1")
        .with_retry(retry);
    DashboardClient::new(http, config)
}

fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig::fixed(Duration::from_millis(1), max_retries)
}

#[tokio::test]
async fn every_request_carries_credentials_and_a_request_id() {
    let http = Arc::new(ScriptedHttpClient::replying_ok(&[r#"{"data": []}"#]));
    let client = client_with(http.clone(), RetryConfig::no_retry());

    client
        .groups_by_name("Ops")
        .await
        .expect("lookup must succeed");

    let request = &http.recorded()[0];
    assert_eq!(request.headers.get("x-api-key").map(String::as_str), Some("key-1"));
    assert_eq!(
        request.headers.get("x-auth-token").map(String::as_str),
        Some("token-1")
    );
    assert!(request
        .headers
        .get("x-request-id")
        .is_some_and(|id| !id.is_empty()));
    assert!(request.url.starts_with("https://dash.test/v1/groups?name=Ops"));
}

#[tokio::test]
async fn transient_service_errors_are_retried_until_success() {
    // Given: one 503 followed by a good answer
    let http = Arc::new(ScriptedHttpClient::new(vec![
        Ok(HttpResponse::with_status(503, "")),
        Ok(HttpResponse::ok_json(r#"{"data": []}"#)),
    ]));
    let client = client_with(http.clone(), fast_retry(2));

    // When
    let list = client.groups_by_name("Ops").await.expect("must recover");

    // Then: exactly two transport calls were made
    assert_eq!(list.data, Some(Vec::new()));
    assert_eq!(http.calls(), 2);
}

#[tokio::test]
async fn retry_budget_exhaustion_surfaces_the_service_error() {
    let http = Arc::new(ScriptedHttpClient::new(vec![
        Ok(HttpResponse::with_status(503, "")),
        Ok(HttpResponse::with_status(503, "")),
        Ok(HttpResponse::with_status(503, "")),
    ]));
    let client = client_with(http.clone(), fast_retry(1));

    let error = client
        .groups_by_name("Ops")
        .await
        .expect_err("budget must run out");

    assert_eq!(error.kind(), ApiErrorKind::Service);
    assert!(error.retryable());
    assert_eq!(http.calls(), 2);
}

#[tokio::test]
async fn auth_rejection_is_never_retried() {
    let http = Arc::new(ScriptedHttpClient::new(vec![Ok(HttpResponse::with_status(
        401, "",
    ))]));
    let client = client_with(http.clone(), fast_retry(3));

    let error = client
        .groups_by_name("Ops")
        .await
        .expect_err("credentials are bad");

    assert_eq!(error.kind(), ApiErrorKind::Auth);
    assert!(!error.retryable());
    assert_eq!(http.calls(), 1);
}

#[tokio::test]
async fn retryable_transport_errors_get_another_attempt() {
    let http = Arc::new(ScriptedHttpClient::new(vec![
        Err(HttpError::new("connection reset")),
        Ok(HttpResponse::ok_json(r#"{"data": []}"#)),
    ]));
    let client = client_with(http.clone(), fast_retry(2));

    client.groups_by_name("Ops").await.expect("must recover");
    assert_eq!(http.calls(), 2);
}

#[tokio::test]
async fn non_retryable_transport_errors_fail_fast() {
    let http = Arc::new(ScriptedHttpClient::new(vec![Err(HttpError::non_retryable(
        "invalid url",
    ))]));
    let client = client_with(http.clone(), fast_retry(3));

    let error = client
        .groups_by_name("Ops")
        .await
        .expect_err("must fail fast");

    assert_eq!(error.kind(), ApiErrorKind::Transport);
    assert_eq!(http.calls(), 1);
}

#[tokio::test]
async fn malformed_response_bodies_are_shape_errors() {
    let http = Arc::new(ScriptedHttpClient::replying_ok(&["not json at all"]));
    let client = client_with(http, RetryConfig::no_retry());

    let error = client
        .groups_by_name("Ops")
        .await
        .expect_err("body is garbage");

    assert_eq!(error.kind(), ApiErrorKind::Shape);
    assert!(!error.retryable());
}
