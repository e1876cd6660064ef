use axum::{
    Router,
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use slide_explainer::{build_router, routes::AppState};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

mod common;
use common::{five_slide_reply, MockBackend};

fn create_test_app(backend: MockBackend) -> Router {
    let state = AppState { backend: Arc::new(backend) };
    build_router(state, &["http://localhost:5173".to_string()])
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = create_test_app(MockBackend::default());
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn generate_returns_camel_case_slides() {
    let app = create_test_app(MockBackend::with_parts(five_slide_reply()));
    let response = app
        .oneshot(post_json("/generate", json!({"prompt": "fold laundry", "artStyle": "dark-surreal"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["slides"].as_array().unwrap().len(), 5);
    assert!(body["refinedPrompt"].as_str().unwrap().starts_with("Task: fold laundry"));
    let first = &body["slides"][0];
    assert_eq!(first["title"], "Step 1");
    assert_eq!(first["commentary"], "");
    assert!(first["imageUrl"].as_str().unwrap().starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn generate_backend_failure_is_a_soft_error() {
    let app = create_test_app(MockBackend::with_error("network down"));
    let response = app.oneshot(post_json("/generate", json!({"prompt": "anything"}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["slides"], json!([]));
    assert!(body["error"].as_str().unwrap().contains("network down"));
}

#[tokio::test]
async fn refine_prompt_returns_template_without_backend_call() {
    let backend = MockBackend::default();
    let app = create_test_app(backend.clone());
    let response = app
        .oneshot(post_json("/refine-prompt", json!({"originalPrompt": "ignored", "subject": "Kitchen hacks"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let refined = body["refinedPrompt"].as_str().unwrap();
    assert!(refined.contains("cooking instructor"));
    assert!(!refined.contains("Task:"));
    assert!(backend.get_prompts().is_empty());
}

// Refinement fails hard while generation reports errors in-band; the asymmetry is intentional.
#[tokio::test]
async fn refine_prompt_malformed_payload_is_a_hard_error() {
    let app = create_test_app(MockBackend::default());
    let response = app
        .oneshot(post_json("/refine-prompt", json!({"originalPrompt": "no subject"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["detail"].is_string());
}

#[tokio::test]
async fn refine_prompt_requires_original_prompt() {
    let app = create_test_app(MockBackend::default());
    let response = app
        .oneshot(post_json("/refine-prompt", json!({"subject": "physics"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["detail"].as_str().unwrap().contains("originalPrompt"));
}

#[tokio::test]
async fn tts_is_not_implemented() {
    let app = create_test_app(MockBackend::default());
    let response = app.oneshot(post_json("/tts", json!({"text": "hello"}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body_json(response).await["detail"], "TTS not implemented yet");
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let app = create_test_app(MockBackend::default());
    let request = Request::builder()
        .uri("/health")
        .header("origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
}
