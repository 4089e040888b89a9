//! CureChat — chat relay server binary.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use curechat_chat::{DirectoryService, GeminiClient, HttpDirectory, InferenceService};
use curechat_core::RelayConfig;
use curechat_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RelayConfig::from_env();
    let port = config.port;

    let directory: Arc<dyn DirectoryService> =
        Arc::new(HttpDirectory::new(config.directory_url));
    let inference: Arc<dyn InferenceService> = Arc::new(GeminiClient::new(
        config.gemini_api_key.unwrap_or_default(),
        config.gemini_model,
    ));

    let state = Arc::new(AppState::new(directory, inference));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("CureChat server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
