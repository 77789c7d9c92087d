//! HTTP routes exercised in-process through the router.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use gaugeboard::ChartSpec;
use gaugeboard::server::{router, ServerConfig};
use std::fs;
use std::path::PathBuf;
use tower::ServiceExt;

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

fn embedded() -> Router {
    router(ServerConfig::default())
}

/// A fresh directory under the system temp dir holding the given files.
fn static_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gaugeboard-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    for (path, contents) in files {
        fs::write(dir.join(path), contents).unwrap();
    }
    dir
}

#[tokio::test]
async fn test_index_renders_gauges() {
    let (status, content_type, body) = get(embedded(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert_eq!(body.matches(r#"class="gauge-needle""#).count(), 3);
    assert!(body.contains(">Setlist</text>"));
}

#[tokio::test]
async fn test_embedded_stylesheet() {
    let (status, content_type, body) = get(embedded(), "/styles/gauges.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/css"));
    assert!(body.contains(".gauge-needle"));
}

#[tokio::test]
async fn test_unknown_asset_is_404() {
    let (status, _, _) = get(embedded(), "/scripts/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_gauge_list() {
    let (status, _, body) = get(embedded(), "/api/gauges").await;
    assert_eq!(status, StatusCode::OK);
    let charts: Vec<ChartSpec> = serde_json::from_str(&body).unwrap();
    let labels: Vec<_> = charts.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Setlist", "Jams", "Sound"]);
}

#[tokio::test]
async fn test_standalone_svg() {
    let (status, content_type, body) =
        get(embedded(), "/api/gauge.svg?label=Load&value=25&width=400").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    assert!(body.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400">"#));
    assert!(body.contains(r#"transform="rotate(-67.5 200 200)""#));
    assert!(body.contains(">Load</text>"));
}

#[tokio::test]
async fn test_standalone_svg_rejects_bad_width() {
    let (status, _, _) = get(embedded(), "/api/gauge.svg?value=25&width=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_standalone_svg_requires_value() {
    let (status, _, _) = get(embedded(), "/api/gauge.svg?label=x").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_static_dir_serves_from_disk() {
    let dir = static_dir(
        "disk",
        &[
            (
                "index.html",
                r#"<html><body><svg id="jamsChart" width="100"></svg></body></html>"#,
            ),
            ("notes.txt", "encore"),
        ],
    );
    let config = ServerConfig {
        static_dir: Some(dir.clone()),
        ..ServerConfig::default()
    };

    let (status, _, body) = get(router(config.clone()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(">Jams</text>"));
    assert!(!body.contains(">Setlist</text>"));

    let (status, _, body) = get(router(config), "/notes.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "encore");

    fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_html5_index_served_unchanged() {
    let page = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body><svg id=\"jamsChart\" width=10></svg><br></body></html>";
    let dir = static_dir("html5", &[("index.html", page)]);
    let config = ServerConfig {
        static_dir: Some(dir.clone()),
        ..ServerConfig::default()
    };

    let (status, content_type, body) = get(router(config), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert_eq!(body, page);

    fs::remove_dir_all(dir).unwrap();
}
