//! # Kasir API
//!
//! Point-of-sale product catalog over HTTP/JSON.

use tracing::{info, warn};

use std::path::Path;

use kasir_api::config::{load_env_file, ENV_FILE};
use kasir_api::{bootstrap, logging, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` first: it may carry RUST_LOG.
    let env_file_loaded = load_env_file(Path::new(ENV_FILE))?;
    logging::init_tracing();

    info!("Starting Kasir API server...");
    if env_file_loaded {
        info!(path = ENV_FILE, "Loaded env file");
    }

    let config = AppConfig::from_env()?;
    info!(
        port = config.port,
        db_conn = %config.database_url_for_log(),
        db_required = config.db_required,
        "Configuration loaded"
    );

    let app = bootstrap(&config).await?;
    info!(mode = ?app.mode, "Storage ready");

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Server running");

    axum::serve(listener, app.router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = app.database {
        db.close().await;
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
