//! # Request Pipeline Tests
//!
//! Token attachment, 401 handling and error normalization, driven through
//! the real `ApiClient` against a mock server.

mod common;

use std::sync::Arc;

use birr_client::services::api::{currency, transaction};
use birr_client::{ApiError, App, ClientConfig, CountingNavigator, KeyValueStore, MemoryStore, SessionState};
use common::{single_request, spawn_app, spawn_signed_in_app, STORED_TOKEN};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_bearer_token_attached_when_stored() {
    // Arrange
    let t = spawn_signed_in_app().await;
    Mock::given(method("GET"))
        .and(path("/api/currencies"))
        .and(header("authorization", format!("Bearer {}", STORED_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "code": "USD", "name": "US Dollar" }
        ])))
        .expect(1)
        .mount(&t.server)
        .await;

    // Act
    let currencies = currency::get_currencies(&t.app.api).await.unwrap();

    // Assert
    assert_eq!(currencies.len(), 1);
    assert_eq!(currencies[0].code, "USD");
}

#[tokio::test]
async fn test_no_authorization_header_when_anonymous() {
    let t = spawn_app(&[]).await;
    Mock::given(method("GET"))
        .and(path("/api/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&t.server)
        .await;

    currency::get_currencies(&t.app.api).await.unwrap();

    let request = single_request(&t.server).await;
    assert!(request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_json_headers_sent() {
    let t = spawn_app(&[]).await;
    Mock::given(method("GET"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&t.server)
        .await;

    currency::get_popular_rates(&t.app.api).await.unwrap();
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_redirects() {
    // Arrange
    let t = spawn_signed_in_app().await;
    assert!(t.app.session.is_authenticated());
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Token expired" })))
        .mount(&t.server)
        .await;

    // Act
    let err = transaction::get_transactions(&t.app.api, None)
        .await
        .unwrap_err();

    // Assert: the caller still sees the rejection
    match &err {
        ApiError::Unauthorized { message } => assert_eq!(message.as_deref(), Some("Token expired")),
        other => panic!("expected Unauthorized, got {:?}", other),
    }
    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));

    assert_eq!(t.store.get("token").unwrap(), None);
    assert_eq!(t.store.get("user").unwrap(), None);
    assert_eq!(t.app.session.state(), SessionState::Anonymous);
    assert_eq!(t.navigator.redirects(), 1);
}

#[tokio::test]
async fn test_unauthorized_without_body_still_redirects() {
    let t = spawn_app(&[]).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&t.server)
        .await;

    let err = currency::get_currencies(&t.app.api).await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { message: None }));
    assert_eq!(t.navigator.redirects(), 1);
}

#[tokio::test]
async fn test_unauthorized_notifies_subscribers() {
    let t = spawn_signed_in_app().await;
    let mut updates = t.app.session.subscribe();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&t.server)
        .await;

    let _ = currency::get_currencies(&t.app.api).await;

    assert!(updates.has_changed().unwrap());
    assert_eq!(*updates.borrow_and_update(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_other_status_keeps_session_and_message() {
    // Arrange
    let t = spawn_signed_in_app().await;
    Mock::given(method("POST"))
        .and(path("/api/currencies/convert"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "error": "Amount must be positive" })),
        )
        .mount(&t.server)
        .await;

    // Act
    let err = currency::convert_currency(&t.app.api, -5.0, None, "USD")
        .await
        .unwrap_err();

    // Assert
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.server_message(), Some("Amount must be positive"));
    assert!(t.app.session.is_authenticated());
    assert_eq!(t.store.get("token").unwrap().as_deref(), Some(STORED_TOKEN));
    assert_eq!(t.navigator.redirects(), 0);
}

#[tokio::test]
async fn test_server_error_without_json_body() {
    let t = spawn_app(&[]).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&t.server)
        .await;

    let err = currency::get_currencies(&t.app.api).await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 500, message: None }));
    assert_eq!(err.to_string(), "Request failed with status 500");
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let t = spawn_app(&[]).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&t.server)
        .await;

    let err = currency::get_currencies(&t.app.api).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(t.navigator.redirects(), 0);
}

#[tokio::test]
async fn test_missing_base_url_fails_every_call() {
    let store = Arc::new(MemoryStore::new());
    let navigator = Arc::new(CountingNavigator::new());
    let app = App::new(&ClientConfig::default(), store, navigator.clone());

    let err = currency::get_currencies(&app.api).await.unwrap_err();

    assert!(matches!(err, ApiError::MissingBaseUrl));
    assert_eq!(navigator.redirects(), 0);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Grab a free port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let config = ClientConfig::with_base_url(&format!("http://127.0.0.1:{}/api", port)).unwrap();

    let navigator = Arc::new(CountingNavigator::new());
    let app = App::new(&config, Arc::new(MemoryStore::new()), navigator.clone());

    let err = currency::get_currencies(&app.api).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.status(), None);
    assert_eq!(navigator.redirects(), 0);
}
