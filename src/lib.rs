use anyhow::{Context, Result};
use dotenvy::dotenv;

pub mod ai;
mod api;
mod config;
mod error;
pub mod messages;
pub mod presets;
mod resolver;
mod text_utils;

pub use api::{router as api_router, BuildSetResponse, ErrorResponse};
pub use config::Config;
pub use error::ResolveError;
pub use resolver::{build_local_items, split_candidates, Resolver};
pub use text_utils::{clean_item, normalize_items, normalize_values};

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting set builder...");

    let config = Config::from_env()?;
    let resolver = Resolver::from_config(config.ai.clone())?;
    match &resolver {
        Resolver::Remote(client) => {
            tracing::info!(model = client.model(), "Using language model for item generation")
        }
        Resolver::Local => {
            tracing::info!("OPENAI_API_KEY not set, using local heuristics for item generation")
        }
    }

    tracing::info!(static_dir = %config.static_dir.display(), "Serving static files");
    let app = api_router(resolver, config.static_dir.clone());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
