//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use relation_client::{Config, RelationClient};
use wiremock::MockServer;

pub const TOKEN: &str = "test_token_123";

/// Path prefix every request is sent under.
pub const API: &str = "/api/v2";

/// Returns a client pointed at `server` with fast retries.
pub fn client_for(server: &MockServer) -> RelationClient {
    client_with(server, |config| config)
}

/// Returns a client pointed at `server`, with extra configuration applied.
pub fn client_with(server: &MockServer, configure: impl FnOnce(Config) -> Config) -> RelationClient {
    let config = Config::new(TOKEN, "acme")
        .with_endpoint(server.uri())
        .with_retry_delay(Duration::from_millis(10));
    RelationClient::new(&configure(config)).expect("valid test configuration")
}

/// Joins `path` under the API prefix.
pub fn api(path: &str) -> String {
    format!("{}/{}", API, path)
}
