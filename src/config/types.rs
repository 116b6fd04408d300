// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::check::DEFAULT_API_URL;

/// Environment variable selecting the API base URL
pub const API_URL_ENV: &str = "FLOWERCHECK_API_URL";

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// API configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Request timeout; zero is treated as one second
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Replace the base URL when `value` is non-blank
    pub fn apply_api_url_override(&mut self, value: Option<&str>) {
        if let Some(url) = value.map(str::trim).filter(|u| !u.is_empty()) {
            #[cfg(debug_assertions)]
            log::debug!("API base URL overridden: {}", url);
            self.api.base_url = url.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_api_section_uses_defaults() {
        let config: Config = toml::from_str("[api]\ntimeout_secs = 10\n").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let api = ApiConfig {
            timeout_secs: 0,
            ..ApiConfig::default()
        };
        assert_eq!(api.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_override_replaces_base_url() {
        let mut config = Config::default();
        config.apply_api_url_override(Some("  http://localhost:5000/  "));
        assert_eq!(config.api.base_url, "http://localhost:5000/");
    }

    #[test]
    fn test_blank_or_missing_override_is_ignored() {
        let mut config = Config::default();
        config.apply_api_url_override(Some("   "));
        config.apply_api_url_override(None);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    // Property: any base_url string in the file is taken verbatim
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_base_url_parsing(host in "[a-z]{3,12}", port in 1024u16..65535) {
            let url = format!("http://{}.test:{}", host, port);
            let toml_content = format!("[api]\nbase_url = \"{}\"\n", url);

            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.api.base_url, url);
            prop_assert_eq!(config.api.timeout_secs, 30);
        }
    }
}
