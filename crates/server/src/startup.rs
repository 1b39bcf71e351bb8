use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::{
    runtime,
    sections::SectionTitleService,
    storage::{ConfigStore, JsonFileConfigStore},
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file if present, defaults plus env vars otherwise.
fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Open the file store under `storage.data_dir` and build the router around it.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    runtime::ensure_env(&cfg.storage.data_dir)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    let store = JsonFileConfigStore::new(&cfg.storage.data_dir)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    let store: Arc<dyn ConfigStore> = store;
    let sections = SectionTitleService::new(store, cfg.storage.settings_key.clone(), cfg.site.base_url.clone());
    info!(
        data_dir = %cfg.storage.data_dir,
        key = %cfg.storage.settings_key,
        "section title store ready"
    );
    Ok(routes::build_router(ServerState::new(sections), build_cors()))
}

/// Public entry: build the app and run the HTTP server.
/// Expects `.env` and logging to be set up by the binary.
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting section titles server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
