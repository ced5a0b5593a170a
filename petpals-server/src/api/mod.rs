//! API Routes
//!
//! REST handlers matching the original PetPals endpoint layout.

pub mod auth;
pub mod categories;
pub mod favorites;
pub mod pets;

#[cfg(test)]
mod pets_tests;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use validator::Validate;

use petpals_core::AppError;
use petpals_types::ErrorResponse;

use crate::state::AppState;

/// Routes reachable without a bearer token.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/pets", get(pets::list).post(pets::create))
        .route("/pets/:id", get(pets::get_one).put(pets::update).delete(pets::remove))
        .route("/categories", get(categories::list))
        .route("/categories/:id", get(categories::get_one))
}

/// Routes behind the auth middleware.
pub fn protected_router() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
        .route("/favorites", get(favorites::list))
        .route("/favorites/:pet_id", post(favorites::add).delete(favorites::remove))
        .route("/favorites/check/:pet_id", get(favorites::check))
}

/// Error half of every handler: status plus `{"message": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { message: self.message })).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let status = match &err {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::EmailTaken => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {}", err);
        }
        Self { status, message: err.to_string() }
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Run validator-derived checks, flattening the first failure into a 400.
pub fn validate(payload: &impl Validate) -> Result<(), ApiError> {
    payload.validate().map_err(|errors| ApiError::bad_request(errors.to_string()))
}
