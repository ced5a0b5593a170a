//! Category browsing handlers.

use axum::extract::{Path, State};
use axum::response::Json;

use petpals_types::models::{CategoryWithCount, CategoryWithPets};

use crate::state::AppState;

use super::ApiResult;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<CategoryWithCount>> {
    let categories = state.db().list_categories()?;
    Ok(Json(categories))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CategoryWithPets> {
    let category = state.db().get_category(&id)?;
    Ok(Json(category))
}
