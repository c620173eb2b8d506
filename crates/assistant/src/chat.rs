//! REST client for the generative-language provider.
//!
//! Wraps the provider's `generateContent` endpoint using [`reqwest`]. The
//! API key comes from configuration and travels as a query parameter; it is
//! never logged.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default provider endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// HTTP client for the generative-language API.
pub struct GenerativeApi {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

/// Errors from the generative-language API layer.
#[derive(Debug, thiserror::Error)]
pub enum ChatApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered 2xx but the body had no candidate text.
    #[error("Provider returned an unrecognized response shape")]
    MalformedResponse,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate's first part, if any.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

impl GenerativeApi {
    /// Create a client for the provider.
    ///
    /// * `api_key`  - provider API key (from the environment).
    /// * `base_url` - endpoint base, e.g. [`DEFAULT_BASE_URL`].
    /// * `model`    - model name, e.g. [`DEFAULT_MODEL`].
    pub fn new(api_key: String, base_url: String, model: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url,
            model,
            api_key,
        }
    }

    /// Send a prompt and return the first candidate's text.
    pub async fn generate(&self, prompt: &str) -> Result<String, ChatApiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed.first_text().ok_or(ChatApiError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_extracts_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Здравствуйте!"}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_text().as_deref(), Some("Здравствуйте!"));
    }

    #[test]
    fn first_text_handles_empty_candidates() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(parsed.first_text().is_none());
    }

    #[test]
    fn first_text_handles_missing_candidates_key() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.first_text().is_none());
    }

    #[test]
    fn first_text_handles_partless_content() {
        let json = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.first_text().is_none());
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_request_error() {
        // Port 9 (discard) is unbound in the test environment; the connect
        // fails immediately.
        let api = GenerativeApi::new(
            "test-key".to_string(),
            "http://127.0.0.1:9/v1beta".to_string(),
            DEFAULT_MODEL.to_string(),
            Duration::from_secs(2),
        );
        let err = api.generate("привет").await.unwrap_err();
        assert!(matches!(err, ChatApiError::Request(_)));
    }
}
