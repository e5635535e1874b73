use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn build_app(seed: bool) -> Router {
    let cfg = lumen::config::Config::default();
    let store = lumen::store::spawn(seed).await.expect("spawn store");
    let providers = lumen::providers::Providers::new(&cfg).expect("build providers");
    let ai = lumen::service::AiService::new(providers, store.clone());
    let realtime = lumen::realtime::Broadcaster::new(&cfg.realtime);
    let state = lumen::server::LumenState::new(store, ai, realtime);
    lumen::server::lumen_router(state, true)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body was not JSON")
    };
    (status, value)
}

#[tokio::test]
async fn created_projects_get_increasing_ids_and_defaults() {
    let app = build_app(false).await;

    let (status, first) = send(&app, "POST", "/api/projects", Some(json!({ "name": "alpha" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["id"], 1);
    assert_eq!(first["status"], "active");
    assert_eq!(first["region"], "us-east-1");
    assert!(first["createdAt"].is_string());

    let (status, second) = send(
        &app,
        "POST",
        "/api/projects",
        Some(json!({ "name": "beta", "region": "eu-west-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(second["id"].as_i64() > first["id"].as_i64());
    assert_eq!(second["region"], "eu-west-1");

    let (status, list) = send(&app, "GET", "/api/projects", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = list
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, ["alpha", "beta"]);
}

#[tokio::test]
async fn unknown_project_is_404_with_error_envelope() {
    let app = build_app(true).await;

    let (status, body) = send(&app, "GET", "/api/projects/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "project 999 not found.");

    let (status, _) = send(&app, "PATCH", "/api/projects/999", Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/projects/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_merges_and_delete_removes() {
    let app = build_app(true).await;

    let (status, patched) = send(
        &app,
        "PATCH",
        "/api/projects/1",
        Some(json!({ "status": "paused" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["status"], "paused");
    assert_eq!(patched["name"], "Demo Project");

    let (status, body) = send(&app, "DELETE", "/api/projects/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", "/api/projects/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Children survive their project.
    let (status, dbs) = send(&app, "GET", "/api/projects/1/databases", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dbs.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn null_description_clears_it() {
    let app = build_app(true).await;

    let (status, patched) = send(
        &app,
        "PATCH",
        "/api/projects/1",
        Some(json!({ "region": "eu-west-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["description"], "Sample project created at startup");

    let (status, patched) = send(
        &app,
        "PATCH",
        "/api/projects/1",
        Some(json!({ "description": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(patched.get("description").is_none());
    assert_eq!(patched["region"], "eu-west-1");
}

#[tokio::test]
async fn malformed_input_is_rejected_before_the_store() {
    let app = build_app(false).await;

    let req = Request::builder()
        .method("POST")
        .uri("/api/projects")
        .header("content-type", "application/json")
        .body(Body::from("not-json"))
        .expect("failed to build request");
    let resp = app.clone().oneshot(req).await.expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "POST", "/api/projects", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");

    let (status, body) = send(&app, "POST", "/api/projects", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(body["error"]["details"]["field"], "name");

    let (status, _) = send(&app, "GET", "/api/projects/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was stored.
    let (_, list) = send(&app, "GET", "/api/projects", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn unknown_paths_are_404_and_request_ids_are_reflected() {
    let app = build_app(false).await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("req-123")
    );

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/projects")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert!(resp.headers().contains_key("x-request-id"));
}
