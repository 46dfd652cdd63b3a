use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use medcheck_backend::gemini::GeminiClient;
use medcheck_backend::{app, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present (local development); deployments use real env vars.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medcheck_backend=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;
    info!(model = %config.model, policy = ?config.upstream_error_policy, "configuration loaded");

    let client = GeminiClient::new(
        &config.base_url,
        &config.api_key,
        &config.model,
        config.timeout,
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let state = AppState::new(config, Arc::new(client));

    info!("starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
