//! hello_app entry point.

use std::sync::Arc;

use hello_app::config::Config;
use hello_app::error::AppError;
use hello_app::state::AppState;
use hello_app::{heartbeat, server};
use hello_core::clock::{Clock, SystemClock};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    println!("hello_app");

    // Logs go to stderr; stdout carries the banner and heartbeats only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting hello_app");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let listener = server::bind(&config).await?;

    heartbeat::spawn(Arc::clone(&clock), std::io::stdout());

    server::serve(listener, AppState::new(clock), server::shutdown_signal()).await?;

    tracing::info!("hello_app stopped");
    Ok(())
}
