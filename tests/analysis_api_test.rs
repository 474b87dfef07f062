use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;

use talent_backend::{store::Ledger, AppState};

/// Boots the app with no generative credential configured, so every AI path
/// must fail closed rather than reach the network.
fn app() -> Router {
    std::env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    std::env::remove_var("GEMINI_API_KEY");
    let _ = talent_backend::config::init_config();
    talent_backend::routes::api_router(AppState::new(Ledger::default()))
}

#[tokio::test]
async fn relay_accepts_post_only() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/ai/generate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn relay_fails_closed_without_a_credential() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ai/generate")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "contents": [{ "parts": [{ "text": "hello" }] }] }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn fit_analysis_rejects_an_empty_job_description() {
    // The empty-input check runs before the credential check and before any
    // network activity.
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analysis/fit")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "resume": "years of experience", "job_description": "  " })
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn fit_analysis_rejects_a_blank_resume() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analysis/fit")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "resume": "", "job_description": "a job" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
