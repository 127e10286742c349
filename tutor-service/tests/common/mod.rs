//! Shared helpers for driving the router in tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use secrecy::Secret;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;
use tutor_core::config::Config;
use tutor_service::config::{OpenRouterSettings, RateLimitSettings, TutorConfig};
use tutor_service::services::providers::CompletionProvider;
use tutor_service::startup::{build_router, AppState};

pub fn test_config(max_requests: u32) -> TutorConfig {
    TutorConfig {
        common: Config {
            port: 0,
            log_level: "info".to_string(),
        },
        openrouter: OpenRouterSettings {
            api_key: Secret::new("test-key".to_string()),
            model: "deepseek/deepseek-chat".to_string(),
        },
        rate_limit: RateLimitSettings {
            max_requests,
            window_seconds: 60,
        },
    }
}

/// Router over the given provider, with a quota high enough that tests
/// never trip the admission gate by accident.
pub fn test_app(provider: Arc<dyn CompletionProvider>) -> Router {
    test_app_with_quota(provider, 1000)
}

pub fn test_app_with_quota(provider: Arc<dyn CompletionProvider>, max_requests: u32) -> Router {
    build_router(AppState {
        config: test_config(max_requests),
        completions: provider,
    })
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}
