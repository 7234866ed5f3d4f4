use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigError;
use super::types::Config;

const CONFIG_DIR: &str = "eat-your-feelings";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable supplying the backend base URL
pub const BACKEND_URL_ENV: &str = "EYF_BACKEND_URL";

/// Loaded configuration plus a warning to surface in the UI, if any
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

/// Load the config from `path`
///
/// A missing file silently yields defaults. An unreadable or invalid file
/// also yields defaults, with a warning.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
        Err(e) => return defaults_with_warning(path, ConfigError::Io(e)),
    };

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => defaults_with_warning(path, e),
    }
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Replace the backend URL when `url` is set and non-blank
pub fn apply_backend_override(config: &mut Config, url: Option<String>) {
    if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
        config.resolver.backend_url = Some(url.trim().to_string());
    }
}

fn defaults_with_warning(path: &Path, error: ConfigError) -> ConfigResult {
    log::warn!("Ignoring config at {}: {}", path.display(), error);
    ConfigResult {
        config: Config::default(),
        warning: Some(format!("Config ignored: {}", error)),
    }
}
