use std::time::Duration;

use institut_assistant::{chat, translate, GenerativeApi, TranslateApi};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory uploaded media is served from (default: `media`).
    pub media_root: String,
    /// Optional bearer token guarding the admin endpoints. When unset,
    /// admin endpoints are open (local development).
    pub admin_token: Option<String>,
    /// External language-service configuration.
    pub assistant: AssistantConfig,
}

/// Configuration for the generative-language and translation clients.
///
/// The provider API key is sourced from the environment, never from code.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Provider API key (`GENAI_API_KEY`). Empty means unconfigured; chat
    /// requests will fail at call time with a provider error.
    pub genai_api_key: String,
    /// Provider endpoint base (`GENAI_BASE_URL`).
    pub genai_base_url: String,
    /// Provider model name (`GENAI_MODEL`).
    pub genai_model: String,
    /// Translation endpoint base (`TRANSLATE_BASE_URL`).
    pub translate_base_url: String,
    /// Outbound request timeout in seconds (`ASSISTANT_TIMEOUT_SECS`).
    pub timeout_secs: u64,
    /// Whether content writes auto-translate missing languages
    /// (`AUTO_TRANSLATE`, default `true`).
    pub auto_translate: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                   |
    /// |--------------------------|---------------------------|
    /// | `HOST`                   | `0.0.0.0`                 |
    /// | `PORT`                   | `3000`                    |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`   |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                      |
    /// | `MEDIA_ROOT`             | `media`                   |
    /// | `ADMIN_TOKEN`            | unset                     |
    /// | `GENAI_API_KEY`          | empty                     |
    /// | `GENAI_BASE_URL`         | provider default          |
    /// | `GENAI_MODEL`            | provider default          |
    /// | `TRANSLATE_BASE_URL`     | provider default          |
    /// | `ASSISTANT_TIMEOUT_SECS` | `10`                      |
    /// | `AUTO_TRANSLATE`         | `true`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let media_root = std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".into());

        let admin_token = std::env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            media_root,
            admin_token,
            assistant: AssistantConfig::from_env(),
        }
    }
}

impl AssistantConfig {
    /// Load the assistant section from environment variables.
    pub fn from_env() -> Self {
        let genai_api_key = std::env::var("GENAI_API_KEY").unwrap_or_default();
        let genai_base_url =
            std::env::var("GENAI_BASE_URL").unwrap_or_else(|_| chat::DEFAULT_BASE_URL.into());
        let genai_model =
            std::env::var("GENAI_MODEL").unwrap_or_else(|_| chat::DEFAULT_MODEL.into());
        let translate_base_url = std::env::var("TRANSLATE_BASE_URL")
            .unwrap_or_else(|_| translate::DEFAULT_BASE_URL.into());

        let timeout_secs: u64 = std::env::var("ASSISTANT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("ASSISTANT_TIMEOUT_SECS must be a valid u64");

        let auto_translate = std::env::var("AUTO_TRANSLATE")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        Self {
            genai_api_key,
            genai_base_url,
            genai_model,
            translate_base_url,
            timeout_secs,
            auto_translate,
        }
    }

    /// Build the generative-language client from this configuration.
    pub fn chat_client(&self) -> GenerativeApi {
        GenerativeApi::new(
            self.genai_api_key.clone(),
            self.genai_base_url.clone(),
            self.genai_model.clone(),
            Duration::from_secs(self.timeout_secs),
        )
    }

    /// Build the translation client from this configuration.
    pub fn translate_client(&self) -> TranslateApi {
        TranslateApi::new(
            self.translate_base_url.clone(),
            Duration::from_secs(self.timeout_secs),
        )
    }
}
