//! Client for the public translate endpoint used by the auto-translation
//! hook.
//!
//! The endpoint answers with nested JSON arrays rather than an object:
//! `[[["Hello","Привет",...], ...], ...]` — the translated sentence chunks
//! sit at `[0][i][0]` and are concatenated to form the full translation.

use std::time::Duration;

use institut_core::lang::Lang;

/// HTTP client for the translation service.
pub struct TranslateApi {
    client: reqwest::Client,
    base_url: String,
}

/// Default translation endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

/// Errors from the translation API layer.
#[derive(Debug, thiserror::Error)]
pub enum TranslateApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Translate API error ({status})")]
    ApiError {
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not have the expected array nesting.
    #[error("Translate API returned an unrecognized response shape")]
    MalformedResponse,
}

impl TranslateApi {
    /// Create a client for the translation service.
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { client, base_url }
    }

    /// Translate `text` from `src` to `dest`.
    pub async fn translate(
        &self,
        text: &str,
        src: Lang,
        dest: Lang,
    ) -> Result<String, TranslateApiError> {
        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", src.code()),
                ("tl", dest.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateApiError::ApiError {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        extract_translation(&body).ok_or(TranslateApiError::MalformedResponse)
    }
}

/// Concatenate the translated chunks at `[0][i][0]`.
fn extract_translation(body: &serde_json::Value) -> Option<String> {
    let chunks = body.get(0)?.as_array()?;
    let mut out = String::new();
    for chunk in chunks {
        if let Some(text) = chunk.get(0).and_then(|v| v.as_str()) {
            out.push_str(text);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_chunk() {
        let body: serde_json::Value =
            serde_json::from_str(r#"[[["Hello","Привет",null,null,10]],null,"ru"]"#).unwrap();
        assert_eq!(extract_translation(&body).as_deref(), Some("Hello"));
    }

    #[test]
    fn concatenates_multiple_chunks() {
        let body: serde_json::Value = serde_json::from_str(
            r#"[[["Hello. ","Привет. ",null],["How are you?","Как дела?",null]],null,"ru"]"#,
        )
        .unwrap();
        assert_eq!(
            extract_translation(&body).as_deref(),
            Some("Hello. How are you?")
        );
    }

    #[test]
    fn rejects_unexpected_shape() {
        let body: serde_json::Value = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert!(extract_translation(&body).is_none());
    }

    #[test]
    fn rejects_empty_chunks() {
        let body: serde_json::Value = serde_json::from_str("[[]]").unwrap();
        assert!(extract_translation(&body).is_none());
    }
}
