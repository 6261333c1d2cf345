//! Client for the OpenRouter chat-completions endpoint.

use crate::chat::{ChatCompletion, ChatRequest};
use crate::config::OpenRouterConfig;
use crate::constants::openrouter;
use crate::error::CheckError;
use crate::http::HttpClient;

pub struct OpenRouterClient {
    pub config: OpenRouterConfig,
    http: HttpClient,
}

impl OpenRouterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OpenRouterConfig) -> Result<Self, CheckError> {
        let user_agent = config.user_agent();
        let http = HttpClient::new(config.http_config.clone(), Some(&user_agent))?;

        Ok(Self { config, http })
    }

    /// Make one chat-completion request.
    #[tracing::instrument(
        name = "chat_completion",
        skip(self, request),
        fields(
            base_url = %self.config.base_url,
            model = %request.model
        ),
        err
    )]
    pub async fn chat_completion(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatCompletion, CheckError> {
        let url = format!(
            "{}{}",
            self.config.base_url,
            openrouter::CHAT_COMPLETIONS_ENDPOINT
        );

        let mut headers = vec![self.config.auth_header()];
        headers.extend(self.config.extra_headers());

        self.http.post_json(&url, &headers, request).await
    }
}
