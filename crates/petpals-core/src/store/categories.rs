//! Category queries.

use petpals_types::models::{Category, CategoryWithCount, CategoryWithPets};
use rusqlite::params;

use crate::error::{AppError, AppResult};

use super::pets::{pet_from_row, PET_COLUMNS};
use super::Database;

impl Database {
    /// All categories with their current pet counts.
    pub fn list_categories(&self) -> AppResult<Vec<CategoryWithCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.id, c.name, c.icon, COUNT(p.id) FROM categories c \
             LEFT JOIN pets p ON p.category_id = c.id \
             GROUP BY c.id ORDER BY c.name",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CategoryWithCount {
                category: Category { id: row.get(0)?, name: row.get(1)?, icon: row.get(2)? },
                pet_count: u64::from(row.get::<_, u32>(3)?),
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// One category with all of its pets, or `NotFound`.
    pub fn get_category(&self, id: &str) -> AppResult<CategoryWithPets> {
        let category = self
            .conn
            .query_row(
                "SELECT id, name, icon FROM categories WHERE id = ?",
                params![id],
                |row| Ok(Category { id: row.get(0)?, name: row.get(1)?, icon: row.get(2)? }),
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => AppError::not_found("Category"),
                other => other.into(),
            })?;

        let sql = format!(
            "SELECT {PET_COLUMNS} FROM pets p \
             JOIN categories c ON c.id = p.category_id \
             WHERE p.category_id = ? \
             ORDER BY p.created_at DESC, p.id ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![id], pet_from_row)?;
        let pets = rows.collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(CategoryWithPets { category, pets })
    }

    pub(super) fn category_exists(&self, id: &str) -> AppResult<bool> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM categories WHERE id = ?",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
