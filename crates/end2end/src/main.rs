//! end2end entry point: probe a running hello_app and exit non-zero on any
//! failure.

use std::process::ExitCode;

use end2end::{ProbeConfig, exit_code, run_timed};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("End to end testing.\n");

    let outcome = match ProbeConfig::from_env() {
        Ok(config) => run_timed(&config, &mut std::io::stdout()).await,
        Err(e) => Err(e),
    };

    match &outcome {
        Ok(reports) => tracing::info!(checked = reports.len(), "all probes passed"),
        Err(e) => eprintln!("end2end: {e}"),
    }

    exit_code(&outcome)
}
