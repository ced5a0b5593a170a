//! Unified error types for PetPals Core.

use thiserror::Error;

/// Main error type for store and query operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Database operation failed (SQLite).
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A referenced entity does not exist.
    #[error("{entity} not found")]
    NotFound {
        /// Human-readable entity name ("Pet", "Favorite", ...).
        entity: &'static str,
    },

    /// Login failed: unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration failed: the email is already taken.
    #[error("Email already registered")]
    EmailTaken,
}

impl AppError {
    /// Shorthand for a missing entity.
    pub const fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenience alias used throughout the core.
pub type AppResult<T> = Result<T, AppError>;
