//! Probe error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can make a probe fail.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// `ENDPOINT` or another setting is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed.
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a complete response.
    #[error("could not reach endpoint {url}: {source}")]
    Transport {
        /// The URL being probed.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with something other than `200 OK`.
    #[error("bad status code received from {url}: {status}")]
    Status {
        /// The URL being probed.
        url: String,
        /// The status that came back.
        status: StatusCode,
    },

    /// The body did not contain the greeting.
    #[error("unexpected body from {url}: {body:?}")]
    Body {
        /// The URL being probed.
        url: String,
        /// The body that came back.
        body: String,
    },

    /// Progress output could not be written.
    #[error("could not write progress: {0}")]
    Output(#[from] std::io::Error),
}
