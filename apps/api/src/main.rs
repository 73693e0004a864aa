mod analysis;
mod config;
mod errors;
mod parsing;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Request body limit: {} bytes, CORS origin: {}",
        config.max_body_bytes,
        config.cors_allow_origin.as_deref().unwrap_or("*")
    );

    let cors = build_cors(&config)?;
    let state = AppState {
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors(config: &Config) -> Result<CorsLayer> {
    let Some(origin) = config.cors_allow_origin.as_deref() else {
        return Ok(CorsLayer::permissive());
    };
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("CORS_ALLOW_ORIGIN '{origin}' is not a valid header value"))?;
    Ok(CorsLayer::permissive().allow_origin(origin))
}
