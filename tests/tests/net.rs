//! HttpClient behavior against a live server.

use std::time::Duration;

use axum::Router;
use mnemo_net::{CachePreference, Headers, HttpClient, Net, NetError, NetOptions};
use mnemo_tests::{ModelsRoute, TestHttpServer, init_tracing};
use rstest::rstest;

#[rstest]
#[timeout(Duration::from_secs(10))]
#[tokio::test(flavor = "multi_thread")]
async fn get_bytes_returns_full_body() {
    init_tracing();
    let route = ModelsRoute::serving(b"response body");
    let server = TestHttpServer::new(route.router.clone()).await;

    let client = HttpClient::new(NetOptions::default()).unwrap();
    let bytes = client
        .get_bytes(server.url("/models/resnet18.onnx"), CachePreference::Validate, None)
        .await
        .unwrap();

    assert_eq!(&bytes[..], b"response body");
    assert_eq!(route.hits(), 1);
}

#[rstest]
#[timeout(Duration::from_secs(10))]
#[tokio::test(flavor = "multi_thread")]
async fn cache_preference_controls_request_directive() {
    init_tracing();
    let route = ModelsRoute::serving(b"body");
    let server = TestHttpServer::new(route.router.clone()).await;
    let client = HttpClient::new(NetOptions::default()).unwrap();

    client
        .get_bytes(server.url("/models/a.onnx"), CachePreference::Validate, None)
        .await
        .unwrap();
    assert_eq!(route.last_cache_control(), None);

    client
        .get_bytes(server.url("/models/a.onnx"), CachePreference::Reuse, None)
        .await
        .unwrap();
    assert_eq!(route.last_cache_control().as_deref(), Some("max-stale"));
}

#[rstest]
#[timeout(Duration::from_secs(10))]
#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_maps_to_http_status_error() {
    init_tracing();
    let server = TestHttpServer::new(Router::new()).await;
    let client = HttpClient::new(NetOptions::default()).unwrap();

    let result = client
        .get_bytes(server.url("/models/missing.onnx"), CachePreference::Reuse, None)
        .await;

    match result {
        Err(NetError::HttpStatus { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.contains("/models/missing.onnx"));
        }
        other => panic!("expected an HTTP status error, got {other:?}"),
    }
}

#[rstest]
#[timeout(Duration::from_secs(10))]
#[tokio::test(flavor = "multi_thread")]
async fn extra_headers_are_sent() {
    init_tracing();
    let route = ModelsRoute::serving(b"body");
    let server = TestHttpServer::new(route.router.clone()).await;
    let client = HttpClient::new(NetOptions::default()).unwrap();

    let mut headers = Headers::new();
    headers.insert("Cache-Control", "no-cache");

    // Explicit headers ride on top of the preference-derived one.
    client
        .get_bytes(server.url("/models/a.onnx"), CachePreference::Validate, Some(headers))
        .await
        .unwrap();
    assert_eq!(route.last_cache_control().as_deref(), Some("no-cache"));
}

#[rstest]
#[timeout(Duration::from_secs(10))]
#[tokio::test(flavor = "multi_thread")]
async fn connection_failure_maps_to_http_error() {
    init_tracing();
    let client = HttpClient::new(NetOptions {
        request_timeout: Duration::from_secs(2),
        ..NetOptions::default()
    })
    .unwrap();

    // Nothing listens on this port.
    let result = client
        .get_bytes(
            "http://127.0.0.1:9/models/a.onnx".parse().unwrap(),
            CachePreference::Reuse,
            None,
        )
        .await;

    assert!(matches!(result, Err(NetError::Http(_))));
}
