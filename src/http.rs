//! Shared HTTP client for the check request.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::error::CheckError;

/// Options for the underlying HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Per-request timeout. `None` keeps the client library's default
    /// behavior on hang.
    pub timeout: Option<Duration>,
}

/// Thin wrapper over `reqwest::Client` for JSON POST requests.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: HttpClientConfig, user_agent: Option<&str>) -> Result<Self, CheckError> {
        let default_ua = format!("openrouter-check/{}", env!("CARGO_PKG_VERSION"));
        let ua = user_agent.unwrap_or(&default_ua);

        let mut builder = reqwest::Client::builder().user_agent(ua);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            CheckError::Configuration(format!("Failed to build reqwest client: {e}"))
        })?;

        Ok(Self { client })
    }

    /// Make a POST request with a JSON body and decode the JSON response.
    ///
    /// A non-success status is reported as an API error carrying the
    /// response body text; no retries are attempted.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, CheckError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);

        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| CheckError::Network {
            message: "Request failed".to_string(),
            source: Box::new(e),
        })?;

        let status = res.status();

        if !status.is_success() {
            warn!(status = %status, "API returned error status");

            let error_text = res
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(CheckError::Api {
                message: format!("API error ({status}): {error_text}"),
                status_code: Some(status.as_u16()),
            });
        }

        debug!(status = %status, "HTTP request successful");

        let response_text = res.text().await.map_err(|e| CheckError::Parse {
            message: "Failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        serde_json::from_str(&response_text).map_err(|e| CheckError::Parse {
            message: "Failed to parse API response".to_string(),
            source: Box::new(e),
        })
    }
}
