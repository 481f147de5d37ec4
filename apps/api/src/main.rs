mod analysis;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::engine::Analyzer;
use crate::config::Config;
use crate::db::open_history_slot;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{AnalysisStore, HISTORY_CAPACITY};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Readiness API v{}", env!("CARGO_PKG_VERSION"));

    let slot = open_history_slot(&config)?;
    let store = AnalysisStore::new(slot);
    info!("Analysis history capped at {HISTORY_CAPACITY} records");

    let analyzer = Arc::new(Analyzer::default());
    info!(
        "Analyzer ready: {} skill categories",
        analyzer.taxonomy.categories().len()
    );

    let state = AppState {
        store,
        analyzer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
