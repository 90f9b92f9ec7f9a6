mod adapters;
mod config;
mod decoder;
mod domain;
mod error;
mod handlers;
mod ports;
mod server;

use adapters::services::LibreTranslateService;
use adapters::storage::{LocalFileStore, SqliteRecordStore};
use config::Config;
use error::Result;
use handlers::{FileHandler, TextHandler};
use server::AppState;
use std::sync::Arc;

/// Wire the adapters into the handlers
///
/// Runs once at startup; every request shares the resulting state.
fn initialize_app(config: &Config) -> Result<AppState> {
    let records = Arc::new(SqliteRecordStore::new(config.database_path.clone())?);
    records.run_migrations()?;

    let files = Arc::new(LocalFileStore::new(
        config.storage_dir.clone(),
        config.public_url.clone(),
    )?);

    let translator = Arc::new(LibreTranslateService::new(
        config.translate_url.clone(),
        config.translate_api_key.clone(),
        config.translate_timeout,
    )?);
    if !translator.is_configured() {
        log::warn!("Translation service URL is empty; every translation will fail");
    }

    log::info!(
        "Records in {}, documents in {}, translating via {}",
        config.database_path.display(),
        config.storage_dir.display(),
        config.translate_url
    );

    Ok(AppState {
        text_handler: Arc::new(TextHandler::new(records.clone(), translator.clone())),
        file_handler: Arc::new(FileHandler::new(records.clone(), files.clone(), translator)),
        files,
        records,
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let state = initialize_app(&config)?;
    let app = server::create_router(state, config.max_upload_bytes);

    log::info!("Starting server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_initialize_app_wires_local_backends() {
        let dir = tempdir().unwrap();
        let database = dir.path().join("relay.db");
        let storage = dir.path().join("translated");

        let config = Config::from_lookup(|name| match name {
            "RELAY_DATABASE_PATH" => Some(database.display().to_string()),
            "RELAY_STORAGE_DIR" => Some(storage.display().to_string()),
            _ => None,
        })
        .unwrap();

        let state = initialize_app(&config).unwrap();
        assert!(database.exists());
        assert!(storage.is_dir());

        let response = state
            .text_handler
            .handle(&domain::GatewayEvent::with_body(r#"{"lang": "es"}"#))
            .await;
        assert_eq!(response.status_code, "400");
    }
}
