//! Configuration loading
//!
//! Reads `~/.config/eat-your-feelings/config.toml`, then layers the
//! `EYF_BACKEND_URL` environment variable and command-line flags on top.

mod loader;
pub mod types;

use thiserror::Error;

pub use loader::{
    BACKEND_URL_ENV, ConfigResult, apply_backend_override, config_path, load_config,
    load_config_from_path, parse_config,
};
pub use types::{Config, ResolverConfig, ResolverMode};

/// Errors raised while reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
