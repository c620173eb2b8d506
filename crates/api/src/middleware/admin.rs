//! Bearer-token guard for the admin endpoints.
//!
//! There is no user-management subsystem on this site; content mutation is
//! protected by a single static token from the environment. When no token
//! is configured the admin endpoints are open (local development).

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use institut_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Require `Authorization: Bearer <ADMIN_TOKEN>` when a token is configured.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = &state.config.admin_token {
        let provided = request
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        match provided {
            Some(token) if token == expected => {}
            Some(_) => {
                return Err(AppError::Core(CoreError::Unauthorized(
                    "Invalid admin token".into(),
                )))
            }
            None => {
                return Err(AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header. Expected: Bearer <token>".into(),
                )))
            }
        }
    }

    Ok(next.run(request).await)
}
