use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;
use service::{books::BookStore, file::book_store::FileBookStore, runtime};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the book store at the configured path and build the router around it.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let data_file = &cfg.storage.data_file;
    runtime::ensure_data_dir(data_file).await?;

    let file_store = FileBookStore::new(data_file.as_str()).await?;
    info!(path = %file_store.path().display(), "book store ready");
    let books: Arc<dyn BookStore> = file_store;

    Ok(routes::build_router(AppState::new(books), build_cors()))
}

/// Public entry: build the app from an already-validated config and serve it
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr: SocketAddr = cfg
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("{}: {e}", cfg.bind_addr())))?;
    info!(%addr, data_file = %cfg.storage.data_file, "starting book directory server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
