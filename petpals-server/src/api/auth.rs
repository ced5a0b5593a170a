//! Registration, login, and profile handlers.

use axum::extract::State;
use axum::response::Json;
use axum::Extension;

use petpals_types::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest, User};

use crate::auth::CurrentUser;
use crate::state::AppState;

use super::{validate, ApiResult};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<AuthResponse> {
    validate(&payload)?;
    let user = state.db().create_user(&payload)?;
    let token = state.create_session(&user.id);
    Ok(Json(AuthResponse { user, token }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    validate(&payload)?;
    let user = state.db().verify_login(&payload.email, &payload.password)?;
    let token = state.create_session(&user.id);
    Ok(Json(AuthResponse { user, token }))
}

pub async fn me(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<User> {
    let user = state.db().get_user(&current.id)?;
    Ok(Json(user))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<MessageResponse> {
    state.revoke_session(&current.token);
    Ok(Json(MessageResponse::new("Logged out")))
}
