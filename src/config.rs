//! Runtime configuration with defaults and environment overrides.
//!
//! Environment variables:
//! - `CODEWARS_API_URL`          : profile endpoint, identifier is appended
//! - `LEADERBOARD_TIMEOUT_SECS`  : per-request timeout
//! - `LEADERBOARD_USER_AGENT`    : User-Agent header sent to the API

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{LeaderboardError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://www.codewars.com/api/v1/users/";
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://www.codewars.com/users/";

/// Tracing filter the binaries fall back to when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "codewars_leaderboard=info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    /// Profile API endpoint; must end with `/`
    pub api_base_url: String,

    /// Public profile page prefix used for links
    pub profile_base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    pub user_agent: String,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            request_timeout_secs: 10,
            user_agent: format!("codewars-leaderboard/{}", crate::VERSION),
        }
    }
}

impl LeaderboardConfig {
    /// Defaults overlaid with whatever is set in the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("CODEWARS_API_URL") {
            config.api_base_url = url;
        }
        if let Some(secs) = lookup("LEADERBOARD_TIMEOUT_SECS") {
            config.request_timeout_secs = secs.trim().parse().map_err(|_| {
                LeaderboardError::Config(format!("LEADERBOARD_TIMEOUT_SECS is not a number: {secs}"))
            })?;
        }
        if let Some(agent) = lookup("LEADERBOARD_USER_AGENT") {
            config.user_agent = agent;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(LeaderboardError::Config(
                "request timeout must be at least one second".to_string(),
            ));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(LeaderboardError::Config(format!(
                "API base URL must be http(s): {}",
                self.api_base_url
            )));
        }
        if !self.api_base_url.ends_with('/') {
            return Err(LeaderboardError::Config(format!(
                "API base URL must end with '/': {}",
                self.api_base_url
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Public profile page for an identifier
    pub fn profile_url(&self, identifier: &str) -> String {
        format!("{}{}", self.profile_base_url, urlencoding::encode(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LeaderboardConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = LeaderboardConfig::from_lookup(lookup_from(&[
            ("CODEWARS_API_URL", "http://127.0.0.1:9000/users/"),
            ("LEADERBOARD_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000/users/");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.profile_base_url, DEFAULT_PROFILE_BASE_URL);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero = LeaderboardConfig::from_lookup(lookup_from(&[("LEADERBOARD_TIMEOUT_SECS", "0")]));
        assert!(matches!(zero, Err(LeaderboardError::Config(_))));

        let nan = LeaderboardConfig::from_lookup(lookup_from(&[("LEADERBOARD_TIMEOUT_SECS", "soon")]));
        assert!(matches!(nan, Err(LeaderboardError::Config(_))));

        let no_slash =
            LeaderboardConfig::from_lookup(lookup_from(&[("CODEWARS_API_URL", "https://x.io/users")]));
        assert!(matches!(no_slash, Err(LeaderboardError::Config(_))));
    }

    #[test]
    fn test_profile_url_encodes_identifier() {
        let config = LeaderboardConfig::default();
        assert_eq!(
            config.profile_url("a b"),
            "https://www.codewars.com/users/a%20b"
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LeaderboardConfig =
            serde_json::from_str(r#"{"request_timeout_secs": 4}"#).unwrap();
        assert_eq!(config.request_timeout_secs, 4);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_default_log_filter_parses() {
        assert!(DEFAULT_LOG_FILTER.starts_with("codewars_leaderboard=info"));
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
