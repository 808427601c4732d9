//! Console configuration.
//!
//! A TOML file provides the base values; the CLI layers flag and
//! environment overrides on top, the same way the daemon-style binaries in
//! this workspace load their config.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for a console instance.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL of the platform admin API.
    pub backend_url: String,
    /// Per-request timeout in seconds. Expiry counts as a backend failure.
    pub request_timeout_secs: u64,
    /// Seed a placeholder batch when the backend has no submissions for the
    /// selected user (demo environments).
    pub placeholder_submissions: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8080".into(),
            request_timeout_secs: 15,
            placeholder_submissions: true,
        }
    }
}

impl ConsoleConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = ConsoleConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert!(config.placeholder_submissions);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: ConsoleConfig =
            toml::from_str("backend_url = \"https://api.rewards.example\"").unwrap();
        assert_eq!(config.backend_url, "https://api.rewards.example");
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn full_toml_roundtrip() {
        let config = ConsoleConfig {
            backend_url: "https://api.rewards.example".into(),
            request_timeout_secs: 30,
            placeholder_submissions: false,
        };
        let encoded = toml::to_string(&config).unwrap();
        let decoded: ConsoleConfig = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded.backend_url, config.backend_url);
        assert_eq!(decoded.request_timeout_secs, 30);
        assert!(!decoded.placeholder_submissions);
    }
}
