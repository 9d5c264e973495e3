//! # Centralized Error Handling
//!
//! [`AppError`] is the error type for everything fallible in the workspace:
//! loading configuration and serving the built page. The layout core itself
//! is total and never returns an error.
//!
//! ## Error Categories
//!
//! - [`Config`](AppError::Config) - bad or unparseable environment at startup
//! - [`Io`](AppError::Io) - filesystem or socket failures
//! - [`NotFound`](AppError::NotFound) - a requested file does not exist → 404
//! - [`Internal`](AppError::Internal) - anything unexpected → 500
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_dir(dir: &str) -> Result<&str> {
//!     if dir.trim().is_empty() {
//!         return Err(AppError::Config("dist directory cannot be empty".to_string()));
//!     }
//!     Ok(dir)
//! }
//!
//! assert!(require_dir("").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or network I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error (unexpected failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code the dev server answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::NotFound(_) => 404,
            AppError::Config(_) | AppError::Io(_) | AppError::Internal(_) => 500,
        }
    }

    /// Reason phrase paired with [`status_code`](Self::status_code).
    pub fn reason(&self) -> &'static str {
        match self.status_code() {
            404 => "Not Found",
            _ => "Internal Server Error",
        }
    }
}

/// Environment lookups only fail while loading configuration.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound("index.html".into()).status_code(), 404);
        assert_eq!(AppError::Config("x".into()).status_code(), 500);
        assert_eq!(AppError::Internal("x".into()).reason(), "Internal Server Error");
    }

    #[test]
    fn test_env_error_becomes_config() {
        let err: AppError = lib_utils::envs::Error::WrongFormat("LANDING_ADDR").into();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: LANDING_ADDR has an invalid format"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.status_code(), 500);
    }
}
