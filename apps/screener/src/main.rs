mod config;
mod document;
mod errors;
mod llm_client;
mod models;
mod routes;
mod screening;
mod session;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS screener v{}", env!("CARGO_PKG_VERSION"));

    if config.google_api_key.is_none() {
        warn!("GOOGLE_API_KEY is not set; every evaluation will fail until it is configured");
    }

    // One model client for the whole process
    let llm = LlmClient::new(
        config.google_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_api_base.clone(),
    )
    .context("Failed to build HTTP client for the model service")?;
    info!("LLM client initialized (model: {})", llm.model());

    let sessions = SessionStore::new();
    sessions.spawn_sweeper(config.session_ttl(), config.session_sweep_period());
    info!("Session sweeper started (ttl: {}s)", config.session_ttl_secs);

    let state = AppState {
        config: config.clone(),
        evaluator: Arc::new(llm),
        sessions,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
