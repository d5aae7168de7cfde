use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;
use crate::links::ManagerLinkMode;
use crate::models::Privacy;

pub const DEFAULT_MANAGER_PASS: &str = "museflow";
pub const DEFAULT_DAILY_API_URL: &str = "https://api.daily.co/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub daily_api_key: Option<String>,
    pub daily_domain: Option<String>,
    pub daily_api_url: String,
    pub manager_pass: String,
    pub room_privacy: Privacy,
    pub manager_link_mode: ManagerLinkMode,
    pub provider_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Config {
            server_host: get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: get("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            daily_api_key: get("DAILY_API_KEY"),
            daily_domain: get("DAILY_DOMAIN")
                .map(|d| normalize_domain(&d))
                .filter(|d| !d.is_empty()),
            daily_api_url: get("DAILY_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_DAILY_API_URL.to_string()),
            manager_pass: get("MANAGER_PASS").unwrap_or_else(|| DEFAULT_MANAGER_PASS.to_string()),
            room_privacy: match get("ROOM_PRIVACY") {
                Some(raw) => Privacy::from_str(&raw).map_err(|_| ConfigError::InvalidPrivacy(raw))?,
                None => Privacy::Public,
            },
            manager_link_mode: match get("MANAGER_LINK_MODE") {
                Some(raw) => ManagerLinkMode::from_str(&raw)
                    .map_err(|_| ConfigError::InvalidManagerLinkMode(raw))?,
                None => ManagerLinkMode::Named,
            },
            provider_timeout_seconds: match get("PROVIDER_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or(ConfigError::InvalidTimeout(raw))?,
                None => 5,
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_seconds)
    }

    /// Provider domain for join links, or a configuration error when the
    /// provider credentials are incomplete.
    pub fn require_provider(&self) -> Result<&str, AppError> {
        match (self.daily_api_key.as_deref(), self.daily_domain.as_deref()) {
            (Some(_), Some(domain)) => Ok(domain),
            _ => Err(AppError::Configuration(
                "Server misconfigured: DAILY_API_KEY or DAILY_DOMAIN missing".to_string(),
            )),
        }
    }
}

/// Strip scheme and trailing slashes: `https://acme.daily.co/` -> `acme.daily.co`.
pub fn normalize_domain(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    let without_scheme = if lower.starts_with("https://") {
        &trimmed[8..]
    } else if lower.starts_with("http://") {
        &trimmed[7..]
    } else {
        trimmed
    };

    without_scheme.trim_end_matches('/').to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("Invalid ROOM_PRIVACY '{0}', expected 'public' or 'private'")]
    InvalidPrivacy(String),
    #[error("Invalid MANAGER_LINK_MODE '{0}', expected 'named' or 'stealth'")]
    InvalidManagerLinkMode(String),
    #[error("Invalid PROVIDER_TIMEOUT_SECS '{0}'")]
    InvalidTimeout(String),
}

#[cfg(test)]
pub(crate) fn test_config(api_url: &str) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
        daily_api_key: Some("test-key".to_string()),
        daily_domain: Some("example.daily.co".to_string()),
        daily_api_url: api_url.to_string(),
        manager_pass: "letmein".to_string(),
        room_privacy: Privacy::Public,
        manager_link_mode: ManagerLinkMode::Named,
        provider_timeout_seconds: 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).expect("Should build default config");

        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.manager_pass, DEFAULT_MANAGER_PASS);
        assert_eq!(config.daily_api_url, DEFAULT_DAILY_API_URL);
        assert_eq!(config.room_privacy, Privacy::Public);
        assert_eq!(config.manager_link_mode, ManagerLinkMode::Named);
        assert_eq!(config.provider_timeout(), Duration::from_secs(5));
        assert!(config.daily_api_key.is_none());
        assert!(config.daily_domain.is_none());
    }

    #[test]
    fn test_domain_is_normalized() {
        let config = config_from(&[("DAILY_DOMAIN", "https://acme.daily.co//")]).unwrap();
        assert_eq!(config.daily_domain.as_deref(), Some("acme.daily.co"));

        assert_eq!(normalize_domain("HTTP://acme.daily.co"), "acme.daily.co");
        assert_eq!(normalize_domain("acme.daily.co"), "acme.daily.co");
    }

    #[test]
    fn test_scheme_only_domain_counts_as_missing() {
        let config = config_from(&[("DAILY_DOMAIN", "https:///")]).unwrap();
        assert!(config.daily_domain.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("MANAGER_PASS", "secret"),
            ("ROOM_PRIVACY", "private"),
            ("MANAGER_LINK_MODE", "stealth"),
            ("PROVIDER_TIMEOUT_SECS", "2"),
            ("DAILY_API_URL", "http://localhost:9999/v1/"),
        ])
        .unwrap();

        assert_eq!(config.server_port, 8081);
        assert_eq!(config.manager_pass, "secret");
        assert_eq!(config.room_privacy, Privacy::Private);
        assert_eq!(config.manager_link_mode, ManagerLinkMode::Stealth);
        assert_eq!(config.provider_timeout_seconds, 2);
        assert_eq!(config.daily_api_url, "http://localhost:9999/v1");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort)
        ));
        assert!(matches!(
            config_from(&[("ROOM_PRIVACY", "secret")]),
            Err(ConfigError::InvalidPrivacy(_))
        ));
        assert!(matches!(
            config_from(&[("MANAGER_LINK_MODE", "loud")]),
            Err(ConfigError::InvalidManagerLinkMode(_))
        ));
        assert!(matches!(
            config_from(&[("PROVIDER_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn test_require_provider() {
        let mut config = test_config("http://localhost");
        assert_eq!(config.require_provider().unwrap(), "example.daily.co");

        config.daily_api_key = None;
        assert!(matches!(
            config.require_provider(),
            Err(AppError::Configuration(_))
        ));

        let mut config = test_config("http://localhost");
        config.daily_domain = None;
        assert!(config.require_provider().is_err());
    }
}
