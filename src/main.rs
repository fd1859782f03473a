//! Pooja Store - storefront server

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pooja_store::catalog::Catalog;
use pooja_store::config::Config;
use pooja_store::routes::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    tracing::info!(products = catalog.len(), "catalog loaded");

    let state = AppState {
        catalog: Arc::new(catalog),
    };
    let app = routes::router(state, config.static_dir.as_deref());

    let addr = config.socket_addr();
    tracing::info!("pooja-store listening on {addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
