//! Shared fixtures for the pipeline tests: a mock API server and an `App`
//! wired to it over in-memory storage.

#![allow(dead_code)]

use std::sync::Arc;

use birr_client::{App, ClientConfig, CountingNavigator, MemoryStore};
use wiremock::MockServer;

pub const STORED_USER: &str = r#"{"email":"abebe@example.com","firstName":"Abebe"}"#;
pub const STORED_TOKEN: &str = "stored-token-123";

pub struct TestApp {
    pub server: MockServer,
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<CountingNavigator>,
    pub app: App,
}

/// App pointed at a fresh mock server, storage seeded with `entries`.
pub async fn spawn_app(entries: &[(&str, &str)]) -> TestApp {
    let server = MockServer::start().await;
    let config = ClientConfig::with_base_url(&format!("{}/api", server.uri()))
        .expect("mock server URI should be a valid base URL");

    let store = Arc::new(MemoryStore::with_entries(entries.iter().copied()));
    let navigator = Arc::new(CountingNavigator::new());
    let app = App::new(&config, store.clone(), navigator.clone());

    TestApp {
        server,
        store,
        navigator,
        app,
    }
}

/// App with a stored token and user, so `initialize` restores a session.
pub async fn spawn_signed_in_app() -> TestApp {
    spawn_app(&[("token", STORED_TOKEN), ("user", STORED_USER)]).await
}

/// The only request the server has seen.
pub async fn single_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}
