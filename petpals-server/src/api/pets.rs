//! Pet listing, search, and CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::response::Json;

use petpals_types::{CreatePetRequest, MessageResponse, Pet, PetFilter, UpdatePetRequest};

use crate::state::AppState;

use super::{validate, ApiResult};

/// `GET /pets` — the filter arrives as the query string; absent parameters
/// contribute no clause.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PetFilter>,
) -> ApiResult<Vec<Pet>> {
    let pets = state.db().list_pets(&filter)?;
    Ok(Json(pets))
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Pet> {
    let pet = state.db().get_pet(&id)?;
    Ok(Json(pet))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreatePetRequest>,
) -> ApiResult<Pet> {
    validate(&payload)?;
    let pet = state.db().create_pet(&payload)?;
    Ok(Json(pet))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePetRequest>,
) -> ApiResult<Pet> {
    validate(&payload)?;
    let pet = state.db().update_pet(&id, &payload)?;
    Ok(Json(pet))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    state.db().delete_pet(&id)?;
    Ok(Json(MessageResponse::new("Pet deleted successfully")))
}
