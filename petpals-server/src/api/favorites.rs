//! Favorites handlers: the server-of-record for per-user favorite sets.
//!
//! All routes here sit behind the auth middleware and operate on the
//! caller's own set. A duplicate add is acknowledged as success so client
//! retries can never surface a spurious conflict.

use axum::extract::{Path, State};
use axum::response::Json;
use axum::Extension;

use petpals_core::FavoriteAdd;
use petpals_types::{FavoriteCheckResponse, MessageResponse, Pet};

use crate::auth::CurrentUser;
use crate::state::AppState;

use super::ApiResult;

pub async fn list(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<Vec<Pet>> {
    let pets = state.db().list_favorites(&current.id)?;
    Ok(Json(pets))
}

pub async fn add(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(pet_id): Path<String>,
) -> ApiResult<MessageResponse> {
    let outcome = state.db().add_favorite(&current.id, &pet_id)?;
    let message = match outcome {
        FavoriteAdd::Added => "Added to favorites",
        FavoriteAdd::AlreadyPresent => "Already in favorites",
    };
    Ok(Json(MessageResponse::new(message)))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(pet_id): Path<String>,
) -> ApiResult<MessageResponse> {
    state.db().remove_favorite(&current.id, &pet_id)?;
    Ok(Json(MessageResponse::new("Removed from favorites")))
}

pub async fn check(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(pet_id): Path<String>,
) -> ApiResult<FavoriteCheckResponse> {
    let is_favorite = state.db().is_favorite(&current.id, &pet_id)?;
    Ok(Json(FavoriteCheckResponse { is_favorite }))
}
