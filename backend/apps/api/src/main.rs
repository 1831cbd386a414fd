//! Challenge Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `sqli::ChallengeError` rendered through `kernel::error::AppError`.

use anyhow::Context;
use sqli::{ChallengeConfig, challenge_router};
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Listen address when `BIND_ADDR` is unset
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,sqli=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Challenge configuration (FLAG is resolved once here)
    let config = ChallengeConfig::from_env()?;
    if config.uses_default_flag() {
        tracing::warn!("FLAG is not set, serving the default flag");
    }
    tracing::info!(max_form_bytes = config.max_form_bytes, "Challenge configured");

    let addr = bind_addr(env::var("BIND_ADDR").ok())?;

    // Build router
    let app = challenge_router(config).layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Parse the listen address, falling back to [`DEFAULT_BIND_ADDR`]
fn bind_addr(raw: Option<String>) -> anyhow::Result<SocketAddr> {
    let raw = raw
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    raw.trim()
        .parse()
        .with_context(|| format!("BIND_ADDR is not a socket address: {raw:?}"))
}
