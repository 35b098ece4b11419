//! Buddybox Session Server
//!
//! Ephemeral, session-scoped buddy encryption over HTTP.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use session_server::config::Config;
use session_server::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    info!("Starting Buddybox Session Server");

    let state = AppState::new();
    let app = router(state.clone());

    info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Keys must not outlive the process
    state.store.clear();
    info!("Session server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
