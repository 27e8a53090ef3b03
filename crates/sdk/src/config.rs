//! Configuration types for the US Real Estate client.

use crate::error::{InvokeError, InvokeResult};
use realestate_core::catalog::DEFAULT_BASE_URL;
use std::time::Duration;
use url::Url;

/// Environment variable holding the RapidAPI key.
pub const API_KEY_ENV: &str = "RAPID_API_KEY";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// RapidAPI key. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting empty or whitespace-only values.
    pub fn new(key: impl Into<String>) -> InvokeResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(InvokeError::Configuration("API key is empty".to_string()));
        }
        Ok(Self(key))
    }

    /// The raw key, for the request header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Configuration for the client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upstream API. Always ends with `/`.
    pub base_url: Url,
    /// API key sent as `x-rapidapi-key`.
    pub api_key: ApiKey,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the public upstream with the given key.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            base_url: parse_base_url(DEFAULT_BASE_URL).expect("default base URL is valid"),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the API key from `RAPID_API_KEY`.
    ///
    /// Absence is a configuration error so the process fails at startup
    /// instead of on the first call.
    pub fn from_env() -> InvokeResult<Self> {
        Self::from_key(std::env::var(API_KEY_ENV).ok())
    }

    /// Build from an optional key, as read from the environment.
    pub fn from_key(key: Option<String>) -> InvokeResult<Self> {
        let key = key.ok_or_else(|| {
            InvokeError::Configuration(format!("{} is not set", API_KEY_ENV))
        })?;
        Ok(Self::new(ApiKey::new(key)?))
    }

    /// Point the client at a different upstream, e.g. a local mock.
    pub fn with_base_url(mut self, base_url: &str) -> InvokeResult<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Parse a base URL and make sure relative endpoint paths join beneath it.
pub(crate) fn parse_base_url(raw: &str) -> InvokeResult<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| InvokeError::Configuration(format!("invalid base URL '{}': {}", raw, e)))?;

    if url.cannot_be_a_base() {
        return Err(InvokeError::Configuration(format!(
            "base URL '{}' cannot have paths joined to it",
            raw
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new(key());

        assert_eq!(config.base_url.as_str(), "https://us-real-estate.p.rapidapi.com/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key.expose(), "test-key");
    }

    #[test]
    fn test_from_key_missing() {
        let err = ClientConfig::from_key(None).unwrap_err();
        assert!(matches!(err, InvokeError::Configuration(_)));
        assert!(err.to_string().contains("RAPID_API_KEY"));
    }

    #[test]
    fn test_from_key_blank() {
        let err = ClientConfig::from_key(Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, InvokeError::Configuration(_)));
    }

    #[test]
    fn test_from_key_present() {
        let config = ClientConfig::from_key(Some("abc".to_string())).unwrap();
        assert_eq!(config.api_key.expose(), "abc");
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let config = ClientConfig::new(ApiKey::new("super-secret").unwrap());
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("ApiKey(***)"));
    }

    #[test]
    fn test_with_base_url_adds_trailing_slash() {
        let config = ClientConfig::new(key())
            .with_base_url("http://localhost:8080/api")
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_with_base_url_invalid() {
        let err = ClientConfig::new(key()).with_base_url("not a url").unwrap_err();
        assert!(matches!(err, InvokeError::Configuration(_)));

        let err = ClientConfig::new(key()).with_base_url("mailto:a@b.c").unwrap_err();
        assert!(matches!(err, InvokeError::Configuration(_)));
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::new(key()).with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
