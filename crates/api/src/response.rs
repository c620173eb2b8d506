//! Shared response types for API handlers.

use serde::Serialize;

/// Flash-style message envelope returned by the form endpoints.
///
/// The message is returned directly for the frontend to display.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
