//! Gemini HTTP client
//!
//! Calls `generateContent` on a Gemini vision model with a prompt and a set
//! of inline images, returning the model's text answer.

use super::{adapter, dto};
use crate::enrichment::domain::{EnrichedPhoto, EnrichmentError};

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini API client
pub struct GeminiClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client for `model` with the given API key
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            http_client,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: model.into(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Name of the model requests are sent to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Analyze photos with the given prompt and return the model's answer
    pub async fn analyze(
        &self,
        photos: &[EnrichedPhoto],
        prompt: &str,
    ) -> Result<String, EnrichmentError> {
        if photos.is_empty() {
            return Err(EnrichmentError::NoImages);
        }

        let request = adapter::build_request(prompt, photos)?;
        let response = self.send_generate_request(&request).await?;
        let text = adapter::response_text(&response);

        tracing::debug!("Analysis prompt: {}", prompt);
        tracing::debug!("Analysis response: {}", text);

        Ok(text)
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(&self.api_key)
        )
    }

    /// Send the HTTP request and parse the response
    async fn send_generate_request(
        &self,
        request: &dto::GenerateRequest,
    ) -> Result<dto::GenerateResponse, EnrichmentError> {
        let response = self
            .http_client
            .post(self.generate_url())
            .json(request)
            .send()
            .await
            .map_err(|e| EnrichmentError::Transport(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ErrorResponse>().await {
                tracing::debug!("Gemini error {}: {}", error.error.code, error.error.message);
                if let Some(api_status) = error.error.status {
                    return Err(EnrichmentError::upstream(api_status));
                }
            }
            return Err(EnrichmentError::http(status));
        }

        response
            .json::<dto::GenerateResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new("test-key", DEFAULT_MODEL);
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.model(), "gemini-1.5-flash");
        assert_eq!(
            client.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn test_configured_model_is_reported() {
        let client = GeminiClient::new("k", "gemini-1.5-pro");
        assert_eq!(client.model(), "gemini-1.5-pro");
        assert!(client.generate_url().contains("/models/gemini-1.5-pro:generateContent"));
    }

    #[test]
    fn test_generate_url() {
        let client = GeminiClient::with_base_url("a b", "http://gemini");
        assert_eq!(
            client.generate_url(),
            "http://gemini/models/gemini-1.5-flash:generateContent?key=a%20b"
        );
    }

    #[tokio::test]
    async fn test_empty_photos_rejected_before_request() {
        let client = GeminiClient::with_base_url("key", "http://127.0.0.1:9");
        let result = client.analyze(&[], "prompt").await;
        assert_eq!(result, Err(EnrichmentError::NoImages));
    }
}
