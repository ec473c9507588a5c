//! Coinboard backend: a thin JSON proxy in front of CoinMarketCap.
//!
//! The browser client cannot hold the CoinMarketCap API key, so this server
//! owns it and re-exposes the two endpoints the UI needs.

pub mod config;
pub mod error;
pub mod routes;
pub mod source;

use std::sync::Arc;

use config::ServerConfig;
use source::coin_market_cap::CoinMarketCap;

/// Binds the configured address and serves until Ctrl+C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let source = Arc::new(CoinMarketCap::new(
        config.cmc_base_url.clone(),
        config.api_key.clone(),
    ));
    let router = routes::build_router(source, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        "coinboard backend listening on http://{} (upstream {})",
        config.bind_addr,
        config.cmc_base_url
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("coinboard backend shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
