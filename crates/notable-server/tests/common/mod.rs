#![allow(dead_code)]

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::Utc;
use notable_server::app;
use notable_server::config::ServerConfig;
use notable_server::state::AppState;
use notable_storage::NoteStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub struct TestContext {
    pub temp_dir: TempDir,
    pub state: AppState,
    pub app: axum::Router,
}

pub async fn build_test_context() -> Result<TestContext> {
    let temp_dir = tempfile::tempdir()?;
    let db_url = format!(
        "sqlite://{}/notable.db?mode=rwc",
        temp_dir.path().display()
    );
    let store = Arc::new(NoteStore::new(&db_url).await?);

    let config = ServerConfig {
        http_port: 8080,
        data_dir: temp_dir.path().to_string_lossy().to_string(),
        database_url: Some(db_url),
    };

    let state = AppState {
        store,
        start_time: Utc::now(),
        config: Arc::new(config),
    };

    let app = app::build_http_app(state.clone());

    Ok(TestContext {
        temp_dir,
        state,
        app,
    })
}

pub async fn request_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value, Option<String>) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    let req_body = body.unwrap_or(Value::Null).to_string();
    let req = builder
        .body(Body::from(req_body))
        .expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("request should be handled");

    let status = resp.status();
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };

    (status, json, trace_id)
}

pub async fn request_no_body(
    app: &axum::Router,
    method: &str,
    uri: &str,
) -> (StatusCode, Value, Option<String>) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("request should be handled");
    let status = resp.status();
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };

    (status, json, trace_id)
}

/// Fetch a raw (non-JSON) response, e.g. the documentation page.
pub async fn request_raw(app: &axum::Router, uri: &str) -> (StatusCode, String, Option<String>) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("request should be handled");
    let status = resp.status();
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");

    (
        status,
        String::from_utf8_lossy(&bytes).to_string(),
        content_type,
    )
}

pub async fn register_user(app: &axum::Router, username: &str, password: &str) -> StatusCode {
    let (status, _, _) = request_json(
        app,
        "POST",
        "/register",
        Some(json!({"username": username, "password": password})),
    )
    .await;
    status
}

pub async fn create_note(
    app: &axum::Router,
    title: &str,
    content: &str,
    user_id: Option<i32>,
) -> i32 {
    let mut body = json!({"title": title, "content": content});
    if let Some(user_id) = user_id {
        body["user_id"] = json!(user_id);
    }
    let (status, body, _) = request_json(app, "POST", "/notes", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "The note was created successfully");
    i32::try_from(body["id"].as_i64().expect("created note id should exist"))
        .expect("note id should fit in i32")
}
