//! Service configuration read from the environment.

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::AppError;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// TCP port to bind on all interfaces.
    pub port: u16,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `PORT` is set but is not a valid `u16`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    /// Build configuration from the raw value of `PORT`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `port` is present but does not parse
    /// as a `u16`. A blank value counts as unset.
    pub fn from_port_var(port: Option<&str>) -> Result<Self, AppError> {
        let port = match port.map(str::trim).filter(|s| !s.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
        };
        Ok(Self { port })
    }

    /// The address the listener binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_port_defaults_to_8080() {
        let config = Config::from_port_var(None).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_port_defaults_to_8080() {
        assert_eq!(Config::from_port_var(Some("")).unwrap().port, DEFAULT_PORT);
        assert_eq!(Config::from_port_var(Some("  ")).unwrap().port, DEFAULT_PORT);
    }

    #[test]
    fn test_port_is_parsed_as_decimal() {
        let config = Config::from_port_var(Some("3000")).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_non_numeric_port_is_a_config_error() {
        let err = Config::from_port_var(Some("http")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_out_of_range_port_is_a_config_error() {
        let err = Config::from_port_var(Some("70000")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_bind_addr_listens_on_all_interfaces() {
        let config = Config { port: 9000 };
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9000");
    }
}
