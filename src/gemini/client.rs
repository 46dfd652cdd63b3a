use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use super::interface::{GeminiError, GeminiInterface};
use super::types::{GenerateRequest, GenerateResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const API_VERSION: &str = "v1beta";

/// Client for the generativelanguage `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    /// Create a new client. `timeout` of `None` keeps reqwest's defaults,
    /// matching the no-timeout behavior of the original service.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            timeout,
        }
    }

    // The key rides in the query string, so this URL must never be logged.
    fn url(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            API_VERSION,
            self.model,
            self.api_key
        )
    }
}

#[async_trait]
impl GeminiInterface for GeminiClient {
    async fn generate_content(&self, request: GenerateRequest) -> Result<String, GeminiError> {
        debug!(model = %self.model, "sending generateContent request");

        let mut builder = self.client.post(self.url()).json(&request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "generative language API error");
            return Err(GeminiError::Status { status, body });
        }

        let raw = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&raw)?;
        Ok(parsed.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_embeds_model_and_key() {
        let client = GeminiClient::new("https://example.test", "k", "gemini-3-flash-preview", None);
        assert_eq!(
            client.url(),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent?key=k"
        );
    }

    #[test]
    fn url_tolerates_trailing_slash_in_base() {
        let client = GeminiClient::new("http://127.0.0.1:9/", "k", "m", None);
        assert_eq!(client.url(), "http://127.0.0.1:9/v1beta/models/m:generateContent?key=k");
    }
}
