//! Router assembly and shared application state.

use crate::config::TutorConfig;
use crate::handlers::{app::health_check, quiz::generate_quiz, summarize::summarize};
use crate::services::providers::CompletionProvider;
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tutor_core::middleware::rate_limit::{create_rate_limiter, rate_limit_middleware};

/// Shared application state. Constructed once at startup and cloned per
/// request; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub config: TutorConfig,
    pub completions: Arc<dyn CompletionProvider>,
}

/// Build the full application router: API routes, static assets from
/// `public/`, and the rate-limit / CORS / trace layers.
pub fn build_router(state: AppState) -> Router {
    let limiter = create_rate_limiter(
        state.config.rate_limit.max_requests,
        state.config.rate_limit.window_seconds,
    );

    Router::new()
        .route("/health", get(health_check))
        .route("/api/summarize", post(summarize))
        .route("/api/generateQuiz", post(generate_quiz))
        .fallback_service(ServeDir::new("public"))
        .layer(from_fn_with_state(limiter, rate_limit_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
