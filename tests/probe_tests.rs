// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Endpoint probe tests.
//!
//! A 404 means "try the next candidate"; any other failure is fatal.

use serde_json::Value;
use summit_scout::services::{ApiClient, EndpointProbe, Lookup};
use summit_scout::AppError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

async fn mount_status(server: &MockServer, route: &str, status: u16, expected: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_probe_uses_first_success_and_stops() {
    let server = MockServer::start().await;
    mount_status(&server, "/a", 404, 1).await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .and(query_param("radius", "20000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::rows(1, 3)))
        .expect(1)
        .mount(&server)
        .await;
    mount_status(&server, "/c", 200, 0).await;

    let client = common::test_client(&server);
    let probe = EndpointProbe::new(["/a", "/b", "/c"]);
    let probed = probe
        .resolve::<Vec<Value>>(&client, &[("radius", "20000".to_string())])
        .await
        .expect("Probe should succeed on /b");

    assert_eq!(probed.path, "/b");
    assert_eq!(probed.value.len(), 3);
}

#[tokio::test]
async fn test_probe_exhausted_when_all_not_found() {
    let server = MockServer::start().await;
    for route in ["/summits", "/summits/", "/summit", "/summit/"] {
        mount_status(&server, route, 404, 1).await;
    }

    let client = common::test_client(&server);
    let err = EndpointProbe::summits()
        .resolve::<Vec<Value>>(&client, &[])
        .await
        .unwrap_err();

    match err {
        AppError::EndpointExhausted { tried } => assert_eq!(tried.len(), 4),
        other => panic!("Expected EndpointExhausted, got {:?}", other),
    }
}

#[tokio::test]
async fn test_probe_aborts_on_other_errors() {
    let server = MockServer::start().await;
    mount_status(&server, "/a", 500, 1).await;
    mount_status(&server, "/b", 200, 0).await;

    let client = common::test_client(&server);
    let err = EndpointProbe::new(["/a", "/b"])
        .resolve::<Vec<Value>>(&client, &[])
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_lookup_distinguishes_not_found() {
    let server = MockServer::start().await;
    mount_status(&server, "/missing", 404, 1).await;

    let client: ApiClient = common::test_client(&server);
    let lookup: Lookup<Value> = client.lookup_json("/missing", &[]).await.unwrap();
    assert_eq!(lookup, Lookup::NotFound);
}
