// ABOUTME: Server bootstrap for Architecture Studio
// ABOUTME: Wires configuration into the database, assistant, and router, then serves until Ctrl-C

pub mod config;

#[cfg(test)]
mod tests;

use archstudio_ai::{ChatError, ChatService, PersonaCatalog, PersonaLoadError};
use archstudio_api::{create_router, ApiState};
use archstudio_storage::{Database, StorageError};
use axum::Router;
use thiserror::Error;
use tracing::{info, warn};

pub use config::{CliOverrides, Config, ConfigError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Personas(#[from] PersonaLoadError),
    #[error("Failed to build chat client: {0}")]
    Chat(#[from] ChatError),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Open the database and build the shared handler state
pub async fn build_state(config: &Config) -> Result<ApiState, ServerError> {
    let db = Database::init_with_path(Some(config.database_path.clone())).await?;
    info!("Using database at {}", config.database_path.display());
    db.ensure_project(config.project).await?;

    let personas = match &config.personas_file {
        Some(path) => PersonaCatalog::with_overrides_from_file(path)?,
        None => PersonaCatalog::builtin(),
    };

    let chat = ChatService::new(
        config.openai_api_key.clone(),
        config.chat_settings(),
        personas,
    )?;

    Ok(ApiState::new(db, config.project, chat))
}

pub async fn build_app(config: &Config) -> Result<Router, ServerError> {
    let state = build_state(config).await?;
    Ok(create_router(state))
}

pub async fn run_server(config: Config) -> Result<(), ServerError> {
    let state = build_state(&config).await?;
    let db = state.db.clone();
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Architecture Studio listening on {} ({})", addr, config.project);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
    }
}
