use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tutor_core::observability::init_tracing;
use tutor_service::config::TutorConfig;
use tutor_service::services::providers::openrouter::{OpenRouterConfig, OpenRouterProvider};
use tutor_service::services::providers::CompletionProvider;
use tutor_service::startup::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = TutorConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(&config.common.log_level);

    let completions: Arc<dyn CompletionProvider> = Arc::new(OpenRouterProvider::new(
        OpenRouterConfig {
            api_key: config.openrouter.api_key.clone(),
            model: config.openrouter.model.clone(),
        },
    ));
    info!(model = %config.openrouter.model, "Initialized OpenRouter completion provider");

    let state = AppState {
        config: config.clone(),
        completions,
    };

    let address = SocketAddr::from(([0, 0, 0, 0], config.common.port));
    let listener = TcpListener::bind(address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Study tutor running on http://{}", address);
    axum::serve(listener, build_router(state)).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
