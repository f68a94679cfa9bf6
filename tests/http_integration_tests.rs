// File: http_integration_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

mod common;

use common::{setup_mock_server, unreachable_url};
use connprobe::config::ConfigParameter;
use connprobe::error::ProbeError;
use connprobe::http::{Http, Transport};
use connprobe::input::RequestSpec;
use serial_test::serial;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http() -> Http {
    let mut config = ConfigParameter::new();
    config.set_timeout(5);
    Http::new(&config).unwrap()
}

#[tokio::test]
#[serial]
async fn test_exchange_reports_connection() {
    let mock_server = setup_mock_server().await;
    let http = http();

    let exchange = http
        .send(&RequestSpec::new(mock_server.uri(), 0, None))
        .await
        .unwrap();

    assert_eq!(exchange.status, 200);
    let connection = exchange.connection.expect("socket addresses on response");
    assert_eq!(connection.remote_addr, *mock_server.address());
    assert!(connection.local_addr.ip().is_loopback());
}

#[tokio::test]
#[serial]
async fn test_shared_client_reuses_connection() {
    let mock_server = setup_mock_server().await;
    let http = http();
    let spec = RequestSpec::new(format!("{}/a", mock_server.uri()), 0, None);

    let first = http.send(&spec).await.unwrap();
    let second = http.send(&spec).await.unwrap();

    assert!(first.connection.is_some());
    assert_eq!(first.connection, second.connection);
}

#[tokio::test]
#[serial]
async fn test_separate_clients_use_separate_connections() {
    let mock_server = setup_mock_server().await;
    let spec = RequestSpec::new(mock_server.uri(), 0, None);
    let (a, b) = (http(), http());

    let first = a.send(&spec).await.unwrap();
    let second = b.send(&spec).await.unwrap();

    assert_ne!(first.connection, second.connection);
}

#[tokio::test]
#[serial]
async fn test_host_header_override_is_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vhost"))
        .and(header("host", "virtual.test"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let spec = RequestSpec::new(
        format!("{}/vhost", mock_server.uri()),
        0,
        Some("virtual.test".to_string()),
    );
    let exchange = http().send(&spec).await.unwrap();

    assert_eq!(exchange.status, 200);
}

#[tokio::test]
#[serial]
async fn test_error_status_is_still_an_exchange() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let exchange = http()
        .send(&RequestSpec::new(mock_server.uri(), 0, None))
        .await
        .unwrap();

    assert_eq!(exchange.status, 404);
    assert!(exchange.connection.is_some());
}

#[tokio::test]
#[serial]
async fn test_redirects_are_not_followed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&mock_server)
        .await;

    let exchange = http()
        .send(&RequestSpec::new(format!("{}/old", mock_server.uri()), 0, None))
        .await
        .unwrap();

    assert_eq!(exchange.status, 301);
    assert_eq!(exchange.url.path(), "/old");
}

#[tokio::test]
#[serial]
async fn test_unreachable_host_is_an_error() {
    let result = http()
        .send(&RequestSpec::new(unreachable_url(), 0, None))
        .await;

    assert!(matches!(result, Err(ProbeError::Client(_))));
}

#[tokio::test]
#[serial]
async fn test_invalid_host_header_is_an_error() {
    let spec = RequestSpec::new(unreachable_url(), 0, Some("bad\nhost".to_string()));

    let result = http().send(&spec).await;

    assert!(matches!(result, Err(ProbeError::InvalidHeader(_))));
}
