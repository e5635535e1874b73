use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// No API keys configured: every route must answer from canned responses.
async fn build_app() -> Router {
    let cfg = lumen::config::Config::default();
    let store = lumen::store::spawn(true).await.expect("spawn store");
    let providers = lumen::providers::Providers::new(&cfg).expect("build providers");
    let ai = lumen::service::AiService::new(providers, store.clone());
    let realtime = lumen::realtime::Broadcaster::new(&cfg.realtime);
    let state = lumen::server::LumenState::new(store, ai, realtime);
    lumen::server::lumen_router(state, true)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (
        status,
        serde_json::from_slice(&bytes).expect("response body was not JSON"),
    )
}

#[tokio::test]
async fn chat_requires_messages() {
    let app = build_app().await;

    let (status, body) = post(&app, "/api/ai/chat", json!({ "model": "gpt-4o" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");

    let (status, body) = post(&app, "/api/ai/chat", json!({ "messages": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn chat_without_keys_answers_from_keywords() {
    let app = build_app().await;

    let (status, body) = post(
        &app,
        "/api/ai/chat",
        json!({ "messages": [{ "role": "user", "content": "Help me with my schema" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["message"]["role"], "assistant");
    assert!(
        body["message"]["content"]
            .as_str()
            .expect("content")
            .contains("database")
    );
    assert_eq!(body["model"], "gpt-4o-mini");
}

#[tokio::test]
async fn chat_resolves_assistant_ids() {
    let app = build_app().await;

    let (status, body) = post(
        &app,
        "/api/ai/chat",
        json!({ "messages": [{ "role": "user", "content": "hi" }], "assistantId": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "gpt-4o-mini");

    let (status, body) = post(
        &app,
        "/api/ai/chat",
        json!({ "messages": [{ "role": "user", "content": "hi" }], "assistantId": 77 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "AI assistant 77 not found.");
}

#[tokio::test]
async fn code_and_sql_fallbacks() {
    let app = build_app().await;

    let (status, body) = post(
        &app,
        "/api/ai/generate-code",
        json!({ "prompt": "list users", "language": "python" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "python");
    assert_eq!(body["source"], "fallback");
    assert!(body["code"].as_str().expect("code").starts_with("# list users"));

    let (_, body) = post(&app, "/api/ai/generate-code", json!({ "prompt": "x" })).await;
    assert_eq!(body["language"], "typescript");

    let (status, body) = post(&app, "/api/ai/generate-sql", json!({ "prompt": "count orders" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sql"], "SELECT COUNT(*) AS total FROM orders;");

    let (status, _) = post(&app, "/api/ai/generate-sql", json!({ "prompt": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sentiment_summary_and_image_fallbacks() {
    let app = build_app().await;

    let (status, body) = post(
        &app,
        "/api/ai/analyze-sentiment",
        json!({ "text": "This dashboard is great, I love it" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["magnitude"], 2.0);
    assert_eq!(body["source"], "fallback");

    let (status, body) = post(
        &app,
        "/api/ai/summarize",
        json!({ "text": "First point. Second point is longer. Third.", "maxLength": 30 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "First point.");

    let (status, body) = post(
        &app,
        "/api/ai/analyze-image",
        json!({ "image": "aGVsbG8=", "prompt": "what colors?" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["analysis"].as_str().expect("analysis").contains("what colors?"));

    let (status, body) = post(
        &app,
        "/api/ai/generate-image",
        json!({ "prompt": "sunset city", "size": "512x512" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://placehold.co/512x512/png?text=sunset+city");
    assert!(body.get("revisedPrompt").is_none());
}
