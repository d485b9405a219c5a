// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use summit_scout::auth::BearerToken;
use summit_scout::config::Config;
use summit_scout::services::ApiClient;
use wiremock::MockServer;

/// Token the test clients authenticate with.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// API client pointed at the mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> ApiClient {
    ApiClient::new(
        &server.uri(),
        Arc::new(BearerToken::new(TEST_TOKEN)),
        Duration::from_secs(5),
    )
    .expect("Failed to create test client")
}

/// Configuration pointing both APIs at the mock server, with no pacing.
#[allow(dead_code)]
pub fn test_config(server: &MockServer, data_dir: &Path) -> Config {
    Config {
        api_base_url: server.uri(),
        api_token: Some(TEST_TOKEN.to_string()),
        route_fetch_delay: Duration::ZERO,
        request_timeout: Duration::from_secs(5),
        data_dir: data_dir.to_path_buf(),
        openai_api_key: Some("sk-test".to_string()),
        openai_base_url: server.uri(),
        ..Config::default()
    }
}

/// `count` synthetic records with ids starting at `first_id`.
#[allow(dead_code)]
pub fn rows(first_id: u64, count: usize) -> Value {
    let rows: Vec<Value> = (0..count as u64)
        .map(|i| json!({ "id": first_id + i, "name": format!("row {}", first_id + i) }))
        .collect();
    Value::Array(rows)
}
