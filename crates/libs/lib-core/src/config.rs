//! # Dev Server Configuration
//!
//! Configuration for `landing-server`, loaded from environment variables
//! (a `.env` file is honored) and validated on startup.
//!
//! | Variable           | Default          |
//! |--------------------|------------------|
//! | `LANDING_ADDR`     | `127.0.0.1:8080` |
//! | `LANDING_DIST_DIR` | `dist`           |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().expect("invalid configuration");
//! let addr = core_config().bind_addr;
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::OnceLock;

use lib_utils::envs::{get_env_or, get_env_parse_or};

use crate::error::{AppError, Result};

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Address the static file server binds to.
    pub bind_addr: SocketAddr,

    /// Directory holding the trunk build output (`index.html`, wasm, css).
    pub dist_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let bind_addr = get_env_parse_or("LANDING_ADDR", defaults.bind_addr)?;
        let dist_dir = PathBuf::from(get_env_or("LANDING_DIST_DIR", DEFAULT_DIST_DIR));

        Ok(Self {
            bind_addr,
            dist_dir,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.dist_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "LANDING_DIST_DIR cannot be empty".to_string(),
            ));
        }

        if self.bind_addr.port() == 0 {
            return Err(AppError::Config(
                "LANDING_ADDR must name a fixed port".to_string(),
            ));
        }

        Ok(())
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load `.env`, read and validate the environment, and store the result.
///
/// # Errors
///
/// Fails if a variable is malformed, validation fails, or the config was
/// already initialized.
pub fn init_config() -> Result<&'static Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;
    tracing::debug!("loaded config: {:?}", config);

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;
    Ok(core_config())
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_ADDR);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_ephemeral_port() {
        let config = Config {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_dist_dir() {
        let config = Config {
            dist_dir: PathBuf::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
