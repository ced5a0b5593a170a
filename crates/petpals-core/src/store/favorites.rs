//! The favorites relation: the server-of-record for per-user favorite sets.
//!
//! Uniqueness is enforced by the `(user_id, pet_id)` primary key; a duplicate
//! add is reported as [`FavoriteAdd::AlreadyPresent`], which callers treat as
//! success rather than a conflict.

use chrono::Utc;
use petpals_types::Pet;
use rusqlite::params;

use crate::error::{AppError, AppResult};

use super::pets::{pet_from_row, PET_COLUMNS};
use super::Database;

/// Outcome of an add: both variants are success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAdd {
    Added,
    AlreadyPresent,
}

impl Database {
    /// Full favorite list for one user, most recently favorited first.
    pub fn list_favorites(&self, user_id: &str) -> AppResult<Vec<Pet>> {
        let sql = format!(
            "SELECT {PET_COLUMNS} FROM favorites f \
             JOIN pets p ON p.id = f.pet_id \
             JOIN categories c ON c.id = p.category_id \
             WHERE f.user_id = ? \
             ORDER BY f.created_at DESC, p.id ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![user_id], pet_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Add a pet to a user's favorites.
    ///
    /// The pet must exist. Adding an existing favorite is idempotent and
    /// reported as `AlreadyPresent`.
    pub fn add_favorite(&self, user_id: &str, pet_id: &str) -> AppResult<FavoriteAdd> {
        let pet_exists: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM pets WHERE id = ?",
            params![pet_id],
            |row| row.get(0),
        )?;
        if pet_exists == 0 {
            return Err(AppError::not_found("Pet"));
        }

        if self.is_favorite(user_id, pet_id)? {
            return Ok(FavoriteAdd::AlreadyPresent);
        }

        self.conn.execute(
            "INSERT INTO favorites (user_id, pet_id, created_at) VALUES (?1, ?2, ?3)",
            params![user_id, pet_id, Utc::now().to_rfc3339()],
        )?;
        tracing::debug!("User {} favorited pet {}", user_id, pet_id);
        Ok(FavoriteAdd::Added)
    }

    /// Remove a favorite; `NotFound` when the pair does not exist.
    pub fn remove_favorite(&self, user_id: &str, pet_id: &str) -> AppResult<()> {
        let affected = self.conn.execute(
            "DELETE FROM favorites WHERE user_id = ? AND pet_id = ?",
            params![user_id, pet_id],
        )?;
        if affected == 0 {
            return Err(AppError::not_found("Favorite"));
        }
        tracing::debug!("User {} unfavorited pet {}", user_id, pet_id);
        Ok(())
    }

    /// Membership check against the persisted relation.
    pub fn is_favorite(&self, user_id: &str, pet_id: &str) -> AppResult<bool> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM favorites WHERE user_id = ? AND pet_id = ?",
            params![user_id, pet_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
