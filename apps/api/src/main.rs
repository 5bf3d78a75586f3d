mod assistant;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::HrGuru;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed numeric settings)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HR Guru API v{}", env!("CARGO_PKG_VERSION"));

    // Conversation history is optional
    let db = match &config.database_url {
        Some(url) => Some(create_pool(url).await?),
        None => {
            warn!("DATABASE_URL not set, conversation history disabled");
            None
        }
    };

    // Initialize LLM client once; every request shares it
    let llm = LlmClient::new(
        config.groq_api_key.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    if config.llm_configured() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("GROQ_API_KEY missing or placeholder, answering with keyword fallback");
    }

    let state = AppState {
        assistant: Arc::new(HrGuru::new(Arc::new(llm))),
        db,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
