//! Listener setup and the serve loop.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

/// Bind the TCP listener described by `config`.
///
/// # Errors
///
/// Returns [`AppError::Server`] if the address cannot be bound.
pub async fn bind(config: &Config) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Serve the application on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`AppError::Server`] if the serve loop fails.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, crate::app(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
