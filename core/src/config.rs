//! Client configuration.

use crate::error::ConfigError;

/// Environment variable read by `ClientConfig::from_env`.
pub const BASE_URL_ENV: &str = "POSTS_API_BASE_URL";

/// Settings bound into a `PostApiClient` at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `POSTS_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Ok(Self::new(url.trim())),
            _ => Err(ConfigError::MissingBaseUrl(BASE_URL_ENV)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_reads_base_url() {
        let config = ClientConfig::from_lookup(|key| {
            assert_eq!(key, BASE_URL_ENV);
            Some("http://api.test/v1/".to_string())
        })
        .unwrap();
        assert_eq!(config.base_url, "http://api.test/v1/");
    }

    #[test]
    fn lookup_trims_whitespace() {
        let config = ClientConfig::from_lookup(|_| Some("  http://api.test \n".to_string())).unwrap();
        assert_eq!(config.base_url, "http://api.test");
    }

    #[test]
    fn missing_variable_is_an_error() {
        let err = ClientConfig::from_lookup(|_| None).unwrap_err();
        assert_eq!(err, ConfigError::MissingBaseUrl(BASE_URL_ENV));
    }

    #[test]
    fn empty_variable_is_an_error() {
        assert!(ClientConfig::from_lookup(|_| Some("   ".to_string())).is_err());
    }
}
