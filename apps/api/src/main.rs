mod config;
mod contact;
mod content;
mod db;
mod errors;
mod models;
mod page;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::store::{ContactStore, MemoryContactStore, PgContactStore};
use crate::content::HttpContentSource;
use crate::db::{create_pool, ensure_schema};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Contact store: Postgres when configured, in-memory otherwise
    let contacts: Arc<dyn ContactStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Arc::new(PgContactStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; contact submissions are kept in memory only");
            Arc::new(MemoryContactStore::new())
        }
    };

    let content = Arc::new(HttpContentSource::new(config.content_source_url.clone()));
    info!("Content source: {}", config.content_source_url);

    let state = AppState {
        config: config.clone(),
        contacts,
        content,
    };

    // The static page is served from another origin and posts here
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
