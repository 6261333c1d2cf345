//! Check configuration, resolved once at startup.

use std::env;

use crate::constants::openrouter;
use crate::http::HttpClientConfig;

/// Connection settings for the OpenRouter API.
///
/// Built once before the check runs; nothing reads the environment after
/// construction.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub http_referer: Option<String>,
    pub x_title: Option<String>,
    pub http_config: HttpClientConfig,
}

impl OpenRouterConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: openrouter::API_BASE.to_string(),
            model: openrouter::DEFAULT_MODEL.to_string(),
            http_referer: None,
            x_title: None,
            http_config: HttpClientConfig::default(),
        }
    }

    /// Resolve the credential from `OPENROUTER_API_KEY` and attach the
    /// attribution headers the check sends.
    pub fn from_env() -> Self {
        Self::from_key(env::var(openrouter::API_KEY_ENV_VAR).ok())
    }

    /// Build the check configuration from an optional credential.
    ///
    /// A missing credential falls back to a placeholder, so the call fails
    /// authentication remotely instead of erroring out locally.
    pub fn from_key(api_key: Option<String>) -> Self {
        let api_key = api_key.unwrap_or_else(|| openrouter::PLACEHOLDER_API_KEY.to_string());

        Self::new(api_key)
            .with_http_referer(openrouter::ATTRIBUTION_REFERER.to_string())
            .with_x_title(openrouter::ATTRIBUTION_TITLE.to_string())
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_http_referer(mut self, http_referer: String) -> Self {
        self.http_referer = Some(http_referer);
        self
    }

    pub fn with_x_title(mut self, x_title: String) -> Self {
        self.x_title = Some(x_title);
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Authentication header as a (name, value) tuple.
    pub fn auth_header(&self) -> (String, String) {
        (
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )
    }

    /// Attribution headers identifying the calling application to the
    /// service. They do not affect the response content.
    pub fn extra_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::new();

        if let Some(referer) = &self.http_referer {
            headers.push(("HTTP-Referer".to_string(), referer.clone()));
        }

        if let Some(title) = &self.x_title {
            headers.push(("X-Title".to_string(), title.clone()));
        }

        headers
    }

    pub fn user_agent(&self) -> String {
        format!("openrouter-check/{}", env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_falls_back_to_placeholder() {
        let config = OpenRouterConfig::from_key(None);
        assert_eq!(config.api_key, openrouter::PLACEHOLDER_API_KEY);
        assert_eq!(config.base_url, openrouter::API_BASE);
        assert_eq!(config.model, openrouter::DEFAULT_MODEL);
    }

    #[test]
    fn provided_credential_is_used_verbatim() {
        let config = OpenRouterConfig::from_key(Some("sk-or-v1-abc".to_string()));
        assert_eq!(config.api_key, "sk-or-v1-abc");
        assert_eq!(
            config.auth_header(),
            ("Authorization".to_string(), "Bearer sk-or-v1-abc".to_string())
        );
    }

    #[test]
    fn check_config_carries_attribution_headers() {
        let headers = OpenRouterConfig::from_key(None).extra_headers();
        assert_eq!(
            headers,
            vec![
                (
                    "HTTP-Referer".to_string(),
                    openrouter::ATTRIBUTION_REFERER.to_string()
                ),
                ("X-Title".to_string(), openrouter::ATTRIBUTION_TITLE.to_string()),
            ]
        );
    }

    #[test]
    fn bare_config_sends_no_extra_headers() {
        let config = OpenRouterConfig::new("key".to_string());
        assert!(config.extra_headers().is_empty());
    }
}
