//! Server startup with graceful shutdown.

use crate::{Config, Result};
use axum::Router;
use tokio::signal;

/// Binds a listener on the configured address and serves the router until a
/// shutdown signal (SIGTERM or Ctrl+C) is received.
///
/// The server supports both HTTP/1.1 and HTTP/2 automatically. In-flight
/// requests are drained before the future resolves; there is no grace-period
/// timeout at this layer.
///
/// ```rust,no_run
/// # use axum_resource::{Config, RestRouter, Result};
/// # async fn example() -> Result<()> {
/// let config = Config::default();
/// let router = RestRouter::new();
/// axum_resource::serve(&config, router.build()?).await
/// # }
/// ```
pub async fn serve(config: &Config, router: Router) -> Result<()> {
    config.validate()?;

    let bind_addr = config.http.full_bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Bound to {}", &bind_addr);
    tracing::info!("Waiting for connections");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown completed");
    Ok(())
}

/// Resolves when SIGTERM or Ctrl+C is received.
///
/// If signal registration fails, the function logs a warning and falls back
/// to waiting indefinitely, so the server keeps running in restricted
/// environments where handlers cannot be installed.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {
                tracing::debug!("Ctrl+C signal received");
            }
            Err(err) => {
                tracing::warn!("Failed to install Ctrl+C handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal_handler) => {
                signal_handler.recv().await;
                tracing::debug!("SIGTERM signal received");
            }
            Err(err) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", err);
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

    tracing::info!("Shutdown signal received, draining connections");
}
