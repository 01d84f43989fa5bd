use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::http::{HttpClient, DEFAULT_TIMEOUT};

/// Per-request options for fetching a transcript
///
/// A caller-supplied `http_client` takes precedence over `proxy` and `timeout`,
/// which only shape the default client.
#[derive(Clone, Default)]
pub struct TranscriptConfig {
    /// ISO language code (e.g. `en`, `es`, `fr`)
    pub language: Option<String>,

    /// Proxy for the default client
    pub proxy: Option<ProxyConfig>,

    /// Pre-built client used instead of the default one
    pub http_client: Option<Arc<dyn HttpClient>>,

    /// Timeout for the default client, 30 seconds when unset
    pub timeout: Option<Duration>,
}

impl TranscriptConfig {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_http_client(mut self, client: impl HttpClient + 'static) -> Self {
        self.http_client = Some(Arc::new(client));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Requested language, treating an empty string as no preference
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|lang| !lang.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}

impl fmt::Debug for TranscriptConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptConfig")
            .field("language", &self.language)
            .field("proxy", &self.proxy)
            .field("http_client", &self.http_client.as_ref().map(|_| "custom"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Proxy server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Proxy server URL (e.g. `http://proxy.example.com:8080`)
    pub host: String,

    /// Optional basic credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<ProxyAuth>,
}

impl ProxyConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            auth: None,
        }
    }

    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(ProxyAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }
}

/// Basic proxy credentials
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyAuth {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for ProxyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyAuth")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TranscriptConfig::default();

        assert_eq!(config.language(), None);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.proxy.is_none());
        assert!(config.http_client.is_none());
    }

    #[test]
    fn test_empty_language_means_no_preference() {
        let config = TranscriptConfig::default().with_language("");
        assert_eq!(config.language(), None);

        let config = TranscriptConfig::default().with_language("fr");
        assert_eq!(config.language(), Some("fr"));
    }

    #[test]
    fn test_proxy_password_is_redacted() {
        let proxy = ProxyConfig::new("http://proxy.example.com:8080").with_auth("user", "hunter2");
        let debug = format!("{:?}", proxy);

        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
    }
}
