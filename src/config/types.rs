// Configuration type definitions

use serde::Deserialize;

/// Default timeout for the remote suggestion endpoint
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default "thinking" delay before a local suggestion is shown
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 2000;

/// How suggestions are produced for this deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResolverMode {
    /// Keyword lookup in the built-in table
    Local,
    /// POST to `{backend_url}/api/reality-check` with a fixed fallback
    Remote,
}

impl ResolverMode {
    pub fn label(self) -> &'static str {
        match self {
            ResolverMode::Local => "local",
            ResolverMode::Remote => "remote",
        }
    }
}

/// Resolver configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Unset means "remote when a backend URL is known, local otherwise"
    #[serde(default)]
    pub mode: Option<ResolverMode>,
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_simulated_delay_ms() -> u64 {
    DEFAULT_SIMULATED_DELAY_MS
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            mode: None,
            backend_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
        }
    }
}

impl ResolverConfig {
    /// Backend URL with surrounding whitespace removed, if non-empty
    pub fn backend_url(&self) -> Option<&str> {
        self.backend_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// The strategy this deployment runs with
    pub fn effective_mode(&self) -> ResolverMode {
        match self.mode {
            Some(mode) => mode,
            None if self.backend_url().is_some() => ResolverMode::Remote,
            None => ResolverMode::Local,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_effective_mode_defaults_to_local() {
        let config = ResolverConfig::default();
        assert_eq!(config.effective_mode(), ResolverMode::Local);
    }

    #[test]
    fn test_effective_mode_remote_when_url_present() {
        let config = ResolverConfig {
            backend_url: Some("http://localhost:8001".to_string()),
            ..ResolverConfig::default()
        };
        assert_eq!(config.effective_mode(), ResolverMode::Remote);
    }

    #[test]
    fn test_explicit_mode_wins_over_url() {
        let config = ResolverConfig {
            mode: Some(ResolverMode::Local),
            backend_url: Some("http://localhost:8001".to_string()),
            ..ResolverConfig::default()
        };
        assert_eq!(config.effective_mode(), ResolverMode::Local);
    }

    #[test]
    fn test_blank_backend_url_is_ignored() {
        let config = ResolverConfig {
            backend_url: Some("   ".to_string()),
            ..ResolverConfig::default()
        };
        assert_eq!(config.backend_url(), None);
        assert_eq!(config.effective_mode(), ResolverMode::Local);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[resolver]\nmode = \"psychic\"\n");
        assert!(result.is_err());
    }

    // Any combination of present/missing resolver fields parses, and missing
    // fields take their defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_section in prop::bool::ANY,
            include_timeout in prop::bool::ANY,
            include_delay in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_section {
                toml_content.push_str("[resolver]\n");
                if include_timeout {
                    toml_content.push_str("timeout_secs = 3\n");
                }
                if include_delay {
                    toml_content.push_str("simulated_delay_ms = 0\n");
                }
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            let config = config.unwrap();

            let expected_timeout = if include_section && include_timeout { 3 } else { DEFAULT_TIMEOUT_SECS };
            let expected_delay = if include_section && include_delay { 0 } else { DEFAULT_SIMULATED_DELAY_MS };
            prop_assert_eq!(config.resolver.timeout_secs, expected_timeout);
            prop_assert_eq!(config.resolver.simulated_delay_ms, expected_delay);
            prop_assert_eq!(config.resolver.mode, None);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_valid_mode_parsing(mode in prop::sample::select(vec!["local", "remote"])) {
            let toml_content = format!("[resolver]\nmode = \"{}\"\n", mode);
            let config: Config = toml::from_str(&toml_content).unwrap();
            let expected = match mode {
                "local" => ResolverMode::Local,
                "remote" => ResolverMode::Remote,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.resolver.mode, Some(expected));
        }
    }
}
