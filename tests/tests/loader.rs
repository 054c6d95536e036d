//! End-to-end loader tests against a real HTTP server and a real store file.

use std::time::Duration;

use axum::Router;
use mnemo::prelude::*;
use mnemo_tests::{ModelsRoute, TestHttpServer, init_tracing};
use rstest::rstest;
use tempfile::TempDir;

const MODEL_BYTES: &[u8] = b"\x08\x01\x12\x07resnet18 fake onnx payload";

fn open_store(dir: &TempDir) -> DiskStore {
    DiskStore::open(
        StoreOptions::new(dir.path().join("models-db.redb"))
            .with_schema_version(1)
            .with_collection("onnx"),
    )
    .expect("open store")
}

#[rstest]
#[timeout(Duration::from_secs(10))]
#[tokio::test(flavor = "multi_thread")]
async fn cold_fetch_populates_cache_and_returns_body() {
    init_tracing();
    let route = ModelsRoute::serving(MODEL_BYTES);
    let server = TestHttpServer::new(route.router.clone()).await;

    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let net = HttpClient::new(NetOptions::default()).unwrap();
    let loader =
        ModelLoader::new(store.clone().into(), net, server.base_url().clone())
            .with_collection("onnx");

    let blob = loader.fetch("resnet18").await.unwrap();

    assert_eq!(&blob[..], MODEL_BYTES);
    assert_eq!(route.hits(), 1);
    assert!(store.contains("onnx", "resnet18").unwrap());
    assert_eq!(
        store.get("onnx", "resnet18").unwrap().as_deref(),
        Some(MODEL_BYTES)
    );
}

#[rstest]
#[timeout(Duration::from_secs(10))]
#[tokio::test(flavor = "multi_thread")]
async fn warm_fetch_skips_the_network() {
    init_tracing();
    let route = ModelsRoute::serving(MODEL_BYTES);
    let server = TestHttpServer::new(route.router.clone()).await;

    let dir = TempDir::new().unwrap();
    let net = HttpClient::new(NetOptions::default()).unwrap();
    let loader = ModelLoader::new(
        open_store(&dir).into(),
        net,
        server.base_url().clone(),
    )
    .with_collection("onnx");

    let first = loader.fetch("resnet18").await.unwrap();
    let second = loader.fetch("resnet18").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(route.hits(), 1, "second fetch must be served from the store");
}

#[rstest]
#[timeout(Duration::from_secs(10))]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_sends_cache_reuse_directive() {
    init_tracing();
    let route = ModelsRoute::serving(MODEL_BYTES);
    let server = TestHttpServer::new(route.router.clone()).await;

    let dir = TempDir::new().unwrap();
    let net = HttpClient::new(NetOptions::default()).unwrap();
    let loader = ModelLoader::new(
        open_store(&dir).into(),
        net,
        server.base_url().clone(),
    )
    .with_collection("onnx");

    loader.fetch("resnet18").await.unwrap();
    assert_eq!(route.last_cache_control().as_deref(), Some("max-stale"));
}

#[rstest]
#[timeout(Duration::from_secs(10))]
#[tokio::test(flavor = "multi_thread")]
async fn missing_model_surfaces_http_status() {
    init_tracing();
    let server = TestHttpServer::new(Router::new()).await;

    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let net = HttpClient::new(NetOptions::default()).unwrap();
    let loader =
        ModelLoader::new(store.clone().into(), net, server.base_url().clone())
            .with_collection("onnx");

    let result = loader.fetch("resnet18").await;
    match result {
        Err(LoaderError::Net(err)) => assert_eq!(err.status_code(), Some(404)),
        other => panic!("expected a fetch error, got {other:?}"),
    }

    // Nothing must be cached for a failed retrieval.
    assert!(!store.contains("onnx", "resnet18").unwrap());
}

#[rstest]
#[timeout(Duration::from_secs(10))]
#[tokio::test(flavor = "multi_thread")]
async fn cache_survives_reopen() {
    init_tracing();
    let route = ModelsRoute::serving(MODEL_BYTES);
    let server = TestHttpServer::new(route.router.clone()).await;
    let dir = TempDir::new().unwrap();

    {
        let net = HttpClient::new(NetOptions::default()).unwrap();
        let loader = ModelLoader::new(
            open_store(&dir).into(),
            net,
            server.base_url().clone(),
        )
        .with_collection("onnx");
        loader.fetch("resnet18").await.unwrap();
    }

    // A fresh handle over the same file serves the model without the network.
    let net = HttpClient::new(NetOptions::default()).unwrap();
    let loader = ModelLoader::new(
        open_store(&dir).into(),
        net,
        server.base_url().clone(),
    )
    .with_collection("onnx");

    let blob = loader.fetch("resnet18").await.unwrap();
    assert_eq!(&blob[..], MODEL_BYTES);
    assert_eq!(route.hits(), 1);
}
