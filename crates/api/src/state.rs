use std::sync::Arc;

use institut_assistant::{GenerativeApi, TranslateApi};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: institut_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Generative-language client for the visitor chat widget.
    pub chat: Arc<GenerativeApi>,
    /// Translation client for the content auto-translation hook.
    pub translator: Arc<TranslateApi>,
}

impl AppState {
    /// Assemble state from a pool and configuration, building the external
    /// service clients from the assistant section.
    pub fn new(pool: institut_db::DbPool, config: ServerConfig) -> Self {
        let chat = Arc::new(config.assistant.chat_client());
        let translator = Arc::new(config.assistant.translate_client());
        Self {
            pool,
            config: Arc::new(config),
            chat,
            translator,
        }
    }
}
