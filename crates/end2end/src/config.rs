//! Probe configuration read from the environment.

use std::time::Duration;

use reqwest::Url;

use crate::error::ProbeError;

/// Request timeout used when `PROBE_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// What to probe and how long to wait for each answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Absolute base URL of the service.
    pub endpoint: Url,
    /// Paths appended to `endpoint`. Empty means probe `endpoint` itself.
    pub paths: Vec<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Probe a single endpoint with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Config`] if `endpoint` is not an absolute
    /// `http` or `https` URL.
    pub fn new(endpoint: &str) -> Result<Self, ProbeError> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            paths: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Probe each of `paths` under the endpoint instead of the endpoint itself.
    #[must_use]
    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Read `ENDPOINT`, `PROBE_PATHS` and `PROBE_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Config`] if `ENDPOINT` is unset or invalid, or
    /// if `PROBE_TIMEOUT_SECS` is not a whole number of seconds.
    pub fn from_env() -> Result<Self, ProbeError> {
        Self::from_vars(
            std::env::var("ENDPOINT").ok().as_deref(),
            std::env::var("PROBE_PATHS").ok().as_deref(),
            std::env::var("PROBE_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    /// Build configuration from raw environment values.
    ///
    /// # Errors
    ///
    /// See [`ProbeConfig::from_env`].
    pub fn from_vars(
        endpoint: Option<&str>,
        paths: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Result<Self, ProbeError> {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                ProbeError::Config("ENDPOINT environment variable must be set".to_string())
            })?;

        let paths = paths
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let timeout = match timeout_secs {
            None => DEFAULT_TIMEOUT,
            Some(raw) => raw.trim().parse().map(Duration::from_secs).map_err(|e| {
                ProbeError::Config(format!("PROBE_TIMEOUT_SECS must be whole seconds: {e}"))
            })?,
        };

        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            paths,
            timeout,
        })
    }

    /// The URLs to probe, in order.
    #[must_use]
    pub fn targets(&self) -> Vec<String> {
        if self.paths.is_empty() {
            return vec![self.endpoint.to_string()];
        }

        let base = self.endpoint.as_str().trim_end_matches('/');
        self.paths
            .iter()
            .map(|path| {
                if path.starts_with('/') {
                    format!("{base}{path}")
                } else {
                    format!("{base}/{path}")
                }
            })
            .collect()
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ProbeError> {
    let url = Url::parse(raw)
        .map_err(|e| ProbeError::Config(format!("ENDPOINT must be an absolute URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ProbeError::Config(format!(
            "ENDPOINT must use http or https, got {other}"
        ))),
    }
}
