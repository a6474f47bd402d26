use chrono::TimeDelta;
use log::{info, warn};
use roster_states::State;
use serde::Deserialize;
use thiserror::Error;

/// Public demo API serving the `/users` collection.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Delay before typed filter text is applied to the rows.
pub const DEFAULT_FILTER_DEBOUNCE_MS: u64 = 300;

/// Longest accepted filter delay; larger settings are clamped to it.
pub const MAX_FILTER_DEBOUNCE_MS: u64 = 60_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment configuration: {0}")]
    Env(#[from] serde_env::Error),
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_api_base_url: Option<String>,
    roster_filter_debounce_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Base URL of the users API. Empty means same origin (web builds).
    pub api_base_url: String,
    pub filter_debounce_ms: u64,
}

impl BusinessConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            filter_debounce_ms: DEFAULT_FILTER_DEBOUNCE_MS,
        }
    }

    pub fn with_filter_debounce_ms(mut self, ms: u64) -> Self {
        self.filter_debounce_ms = clamp_debounce_ms(ms);
        self
    }

    /// Reads `ROSTER_API_BASE_URL` and `ROSTER_FILTER_DEBOUNCE_MS`, falling
    /// back to defaults for whatever is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let defaults = Self::default();

        let api_base_url = match raw.roster_api_base_url {
            Some(url) => {
                info!("Using provided ROSTER_API_BASE_URL: {url}");
                url
            }
            None => defaults.api_base_url,
        };

        Self {
            api_base_url,
            filter_debounce_ms: raw
                .roster_filter_debounce_ms
                .map(clamp_debounce_ms)
                .unwrap_or(defaults.filter_debounce_ms),
        }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_base_url.trim_end_matches('/'))
    }

    pub fn filter_debounce(&self) -> TimeDelta {
        i64::try_from(self.filter_debounce_ms.min(MAX_FILTER_DEBOUNCE_MS))
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .unwrap_or(TimeDelta::milliseconds(DEFAULT_FILTER_DEBOUNCE_MS as i64))
    }
}

fn clamp_debounce_ms(ms: u64) -> u64 {
    if ms > MAX_FILTER_DEBOUNCE_MS {
        warn!("Filter debounce of {ms}ms is too long, using {MAX_FILTER_DEBOUNCE_MS}ms");
        MAX_FILTER_DEBOUNCE_MS
    } else {
        ms
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(if cfg!(target_arch = "wasm32") {
            ""
        } else {
            DEFAULT_API_BASE_URL
        })
    }
}

impl State for BusinessConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let config = BusinessConfig::from_vars(Vec::<(&str, &str)>::new()).unwrap();

        assert_eq!(config, BusinessConfig::default());
        assert_eq!(config.filter_debounce_ms, 300);
        if !cfg!(target_arch = "wasm32") {
            assert_eq!(
                config.users_url(),
                "https://jsonplaceholder.typicode.com/users"
            );
        }
    }

    #[test]
    fn reads_overrides_from_env() {
        let config = BusinessConfig::from_vars(vec![
            ("ROSTER_API_BASE_URL", "http://127.0.0.1:9000"),
            ("ROSTER_FILTER_DEBOUNCE_MS", "50"),
        ])
        .unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.filter_debounce(), TimeDelta::milliseconds(50));
    }

    #[test]
    fn rejects_non_numeric_debounce() {
        let err = BusinessConfig::from_vars(vec![("ROSTER_FILTER_DEBOUNCE_MS", "soon")]);
        assert!(err.is_err());
    }

    #[test]
    fn oversized_debounce_is_clamped() {
        let config =
            BusinessConfig::from_vars(vec![("ROSTER_FILTER_DEBOUNCE_MS", "9000000000000000")])
                .unwrap();

        assert_eq!(config.filter_debounce_ms, MAX_FILTER_DEBOUNCE_MS);
        assert_eq!(
            config.filter_debounce(),
            TimeDelta::milliseconds(MAX_FILTER_DEBOUNCE_MS as i64)
        );
        assert_eq!(
            BusinessConfig::default()
                .with_filter_debounce_ms(u64::MAX)
                .filter_debounce_ms,
            MAX_FILTER_DEBOUNCE_MS
        );
    }

    #[test]
    fn users_url_handles_trailing_slash_and_same_origin() {
        assert_eq!(
            BusinessConfig::new("http://localhost:8080/").users_url(),
            "http://localhost:8080/users"
        );
        assert_eq!(BusinessConfig::new("").users_url(), "/users");
    }
}
