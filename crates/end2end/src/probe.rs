//! The probe itself.

use std::io::Write;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::config::ProbeConfig;
use crate::error::ProbeError;

/// Substring every healthy response body contains.
pub const GREETING_MARKER: &str = "Hello, the time is";

/// Outcome of one successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// The URL that was probed.
    pub url: String,
    /// Status returned by the service; always `200 OK` in a report.
    pub status: StatusCode,
    /// Response body.
    pub body: String,
}

/// Issues probe requests with a shared HTTP client.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
}

impl Prober {
    /// Build a prober whose requests time out after `config.timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ProbeError::Client)?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// GET `url` and check the response, writing progress lines to
    /// `progress`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Transport`] if the request or body read fails,
    /// [`ProbeError::Status`] on a non-200 status, and
    /// [`ProbeError::Body`] if the body lacks the greeting.
    #[instrument(skip(self, progress))]
    pub async fn check<W: Write>(
        &self,
        url: &str,
        progress: &mut W,
    ) -> Result<ProbeReport, ProbeError> {
        writeln!(progress, "getting {url}")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ProbeError::Transport {
                url: url.to_string(),
                source,
            })?;

        writeln!(progress, "checking status code")?;
        let status = response.status();
        debug!(%status, "response received");
        if status != StatusCode::OK {
            return Err(ProbeError::Status {
                url: url.to_string(),
                status,
            });
        }

        writeln!(progress, "checking response")?;
        let body = response
            .text()
            .await
            .map_err(|source| ProbeError::Transport {
                url: url.to_string(),
                source,
            })?;
        if !body.contains(GREETING_MARKER) {
            return Err(ProbeError::Body {
                url: url.to_string(),
                body,
            });
        }
        debug!("body contents OK");

        Ok(ProbeReport {
            url: url.to_string(),
            status,
            body,
        })
    }
}

/// Probe every target in `config`, in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`ProbeError`] encountered.
pub async fn run<W: Write>(
    config: &ProbeConfig,
    progress: &mut W,
) -> Result<Vec<ProbeReport>, ProbeError> {
    let prober = Prober::new(config)?;
    let mut reports = Vec::new();
    for url in config.targets() {
        reports.push(prober.check(&url, progress).await?);
    }
    Ok(reports)
}

/// Like [`run`], but finishes with a blank line and the completion summary
/// when every target passes.
///
/// # Errors
///
/// Returns the first [`ProbeError`] encountered; no summary is written.
pub async fn run_timed<W: Write>(
    config: &ProbeConfig,
    progress: &mut W,
) -> Result<Vec<ProbeReport>, ProbeError> {
    let start = Instant::now();
    let reports = run(config, progress).await?;
    writeln!(progress, "\n{}", completion_line(start.elapsed()))?;
    Ok(reports)
}

/// The line printed once every target has passed.
#[must_use]
pub fn completion_line(elapsed: Duration) -> String {
    format!("tests complete. Took {} seconds", elapsed.as_secs_f64())
}

/// Process exit status for a finished run.
#[must_use]
pub fn exit_code<T>(outcome: &Result<T, ProbeError>) -> ExitCode {
    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
