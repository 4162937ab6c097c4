mod ask;
mod config;
mod errors;
mod fit;
mod gateway;
mod knowledge;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ask::prompts::build_resume_context;
use crate::config::Config;
use crate::fit::engine::RuleFitAnalyzer;
use crate::gateway::GatewayClient;
use crate::knowledge::KnowledgeBase;
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

    // Build the knowledge base and the system prompt derived from it.
    // The prompt is rendered once here and injected — handlers never
    // rebuild it per request.
    let knowledge = Arc::new(KnowledgeBase::builtin());
    let system_prompt: Arc<str> = build_resume_context(&knowledge).into();
    info!(
        "Knowledge base loaded ({} experience entries)",
        knowledge.experience.len()
    );

    // Initialize the gateway client
    let gateway = GatewayClient::new(config.gateway_api_key.clone(), config.gateway_url.clone());
    info!("Gateway client initialized (model: {})", gateway::MODEL);

    // Initialize the fit analyzer (rule-based, deterministic)
    let fit_analyzer = Arc::new(RuleFitAnalyzer);

    // Build app state
    let state = AppState {
        gateway,
        knowledge,
        system_prompt,
        fit_analyzer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // also answers the OPTIONS preflight

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
