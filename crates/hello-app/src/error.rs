//! hello_app — error types.

use thiserror::Error;

/// Startup and runtime errors for the HTTP service.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message_names_the_problem() {
        let err = AppError::Config("PORT must be a valid u16".into());
        assert_eq!(
            err.to_string(),
            "configuration error: PORT must be a valid u16"
        );
    }

    #[test]
    fn test_io_error_converts_to_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = AppError::from(io);
        assert!(matches!(err, AppError::Server(_)));
        assert_eq!(err.to_string(), "server error: address in use");
    }
}
