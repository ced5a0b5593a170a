//! Bearer-token authentication middleware.
//!
//! Guarded routes receive a [`CurrentUser`] extension resolved from the
//! in-memory session table; everything else passes through untouched.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};

use petpals_types::ErrorResponse;

use crate::state::AppState;

/// Identity of the authenticated caller, attached as a request extension.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub token: String,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = bearer_token(&request).ok_or_else(|| unauthorized("Missing bearer token"))?;

    let user_id = state
        .session_user(&token)
        .ok_or_else(|| unauthorized("Invalid or expired token"))?;

    request.extensions_mut().insert(CurrentUser { id: user_id, token });
    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn unauthorized(message: &str) -> Response {
    tracing::debug!("Rejected request: {}", message);
    (StatusCode::UNAUTHORIZED, Json(ErrorResponse { message: message.to_string() }))
        .into_response()
}
