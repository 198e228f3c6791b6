//! Builder for creating and configuring [`HttpPlanStore`] instances.

use std::{sync::Arc, time::Duration};

use reqwest::{header, Client};

use super::{HttpPlanStore, StaticToken, TokenProvider};
use crate::{
    config::Config,
    error::{OverloadError, Result},
};

/// Builder for creating and configuring HTTP plan stores.
#[derive(Clone)]
pub struct HttpStoreBuilder {
    base_url: String,
    token: Option<Arc<dyn TokenProvider>>,
    session_cookie: Option<String>,
    timeout: Duration,
}

impl HttpStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Seeds the builder from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            token: config
                .csrf_token
                .clone()
                .map(|token| Arc::new(StaticToken(token)) as Arc<dyn TokenProvider>),
            session_cookie: config.session_cookie.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Sets the API base URL, e.g. `http://localhost:8000/api`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Uses a fixed anti-forgery token.
    pub fn with_csrf_token(self, token: impl Into<String>) -> Self {
        self.with_token_provider(Arc::new(StaticToken(token.into())))
    }

    /// Uses an external provider for the anti-forgery token.
    pub fn with_token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token = Some(provider);
        self
    }

    /// Sends the given value as the `Cookie` header on every request
    /// (e.g. `sessionid=...; csrftoken=...`).
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the configured store.
    ///
    /// # Errors
    ///
    /// Returns `OverloadError::Configuration` if no token provider was given,
    /// the base URL is empty, the session cookie is not a valid header value,
    /// or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HttpPlanStore> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(OverloadError::Configuration {
                message: "Server URL must not be empty".to_string(),
            });
        }

        let token = self.token.ok_or_else(|| OverloadError::Configuration {
            message: "No CSRF token configured".to_string(),
        })?;

        let mut headers = header::HeaderMap::new();
        if let Some(cookie) = &self.session_cookie {
            let value =
                header::HeaderValue::from_str(cookie).map_err(|e| OverloadError::Configuration {
                    message: format!("Invalid session cookie: {e}"),
                })?;
            headers.insert(header::COOKIE, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| OverloadError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(HttpPlanStore::new(client, base_url, token))
    }
}

impl Default for HttpStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_token() {
        let err = HttpStoreBuilder::new().build().err().unwrap();
        assert!(err.to_string().contains("No CSRF token configured"));
    }

    #[test]
    fn test_build_trims_trailing_slash() {
        let store = HttpStoreBuilder::new()
            .with_base_url("http://example.test/api/")
            .with_csrf_token("t")
            .build()
            .unwrap();
        assert_eq!(store.base_url(), "http://example.test/api");
    }

    #[test]
    fn test_build_rejects_bad_cookie() {
        let result = HttpStoreBuilder::new()
            .with_csrf_token("t")
            .with_session_cookie("bad\nvalue")
            .build();
        assert!(matches!(result, Err(OverloadError::Configuration { .. })));
    }

    #[test]
    fn test_build_rejects_empty_url() {
        let result = HttpStoreBuilder::new()
            .with_base_url("  ")
            .with_csrf_token("t")
            .build();
        assert!(matches!(result, Err(OverloadError::Configuration { .. })));
    }
}
