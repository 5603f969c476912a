use std::time::Duration;

use thiserror::Error;

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Requests taking longer than this are aborted (native transport only).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Interval between two notification polls.
pub const DEFAULT_NOTIFICATION_POLL_SECS: u64 = 60;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidValue { name: String, value: String },

    /// The API base URL is not an absolute http(s) URL.
    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub notification_poll_interval: Duration,
}

impl Default for ClientConfig {
    /// Configuration baked in at compile time.
    ///
    /// Browser bundles have no process environment, so `LEAGUE_API_URL` is read when
    /// the crate is built.
    fn default() -> Self {
        Self {
            api_base_url: option_env!("LEAGUE_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            notification_poll_interval: Duration::from_secs(DEFAULT_NOTIFICATION_POLL_SECS),
        }
    }
}

impl ClientConfig {
    /// Reads configuration from the process environment, falling back to defaults.
    ///
    /// - `LEAGUE_API_URL` - backend base URL, e.g. `http://localhost:8080/api`
    /// - `LEAGUE_API_TIMEOUT_SECS` - request timeout in seconds
    /// - `LEAGUE_NOTIFICATION_POLL_SECS` - notification polling interval in seconds
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = match lookup("LEAGUE_API_URL") {
            Some(url) => url,
            None => defaults.api_base_url,
        };
        let request_timeout = match lookup("LEAGUE_API_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_secs("LEAGUE_API_TIMEOUT_SECS", &value)?),
            None => defaults.request_timeout,
        };
        let notification_poll_interval = match lookup("LEAGUE_NOTIFICATION_POLL_SECS") {
            Some(value) => {
                Duration::from_secs(parse_secs("LEAGUE_NOTIFICATION_POLL_SECS", &value)?)
            }
            None => defaults.notification_poll_interval,
        };

        Self {
            api_base_url,
            request_timeout,
            notification_poll_interval,
        }
        .validated()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let parsed = url::Url::parse(&self.api_base_url)
            .map_err(|_| ConfigError::InvalidBaseUrl(self.api_base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(self.api_base_url));
        }
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        Ok(self)
    }
}

fn parse_secs(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn uses_defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.notification_poll_interval, Duration::from_secs(60));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let config =
            ClientConfig::from_lookup(lookup(&[("LEAGUE_API_URL", "https://league.test/api/")]))
                .unwrap();

        assert_eq!(config.api_base_url, "https://league.test/api");
    }

    #[test]
    fn rejects_unparsable_timeout() {
        let result = ClientConfig::from_lookup(lookup(&[("LEAGUE_API_TIMEOUT_SECS", "soon")]));

        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                name: "LEAGUE_API_TIMEOUT_SECS".to_string(),
                value: "soon".to_string(),
            })
        );
    }

    #[test]
    fn rejects_zero_poll_interval() {
        let result = ClientConfig::from_lookup(lookup(&[("LEAGUE_NOTIFICATION_POLL_SECS", "0")]));

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let result = ClientConfig::from_lookup(lookup(&[("LEAGUE_API_URL", "ftp://league.test")]));

        assert_eq!(
            result,
            Err(ConfigError::InvalidBaseUrl("ftp://league.test".to_string()))
        );
    }
}
