//! SQLite-backed repository for the PetPals marketplace.
//!
//! One [`Database`] owns one `rusqlite::Connection`. The server wraps it in
//! a mutex; all operations are synchronous and hold the connection only for
//! the duration of one statement batch.

mod categories;
mod favorites;
mod pets;
mod seed;
mod users;

#[cfg(test)]
mod tests;

pub use favorites::FavoriteAdd;

use std::path::Path;

use rusqlite::Connection;

use crate::error::AppResult;

/// Repository over a single SQLite connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn open(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        tracing::debug!("Opened database at {}", path.display());
        Ok(db)
    }

    /// In-memory database, used by tests and the `--ephemeral` server mode.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> AppResult<()> {
        self.conn.execute_batch(
            "PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                password_digest TEXT NOT NULL,
                name TEXT NOT NULL,
                avatar TEXT,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS categories (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                icon TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS pets (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                species TEXT NOT NULL,
                breed TEXT NOT NULL,
                age INTEGER NOT NULL,
                gender TEXT NOT NULL,
                size TEXT NOT NULL,
                distance REAL NOT NULL,
                price INTEGER NOT NULL,
                description TEXT NOT NULL,
                images TEXT NOT NULL,
                shelter TEXT NOT NULL,
                tags TEXT NOT NULL,
                category_id TEXT NOT NULL REFERENCES categories(id),
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_pets_created ON pets (created_at DESC);

            CREATE TABLE IF NOT EXISTS favorites (
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                pet_id TEXT NOT NULL REFERENCES pets(id) ON DELETE CASCADE,
                created_at TEXT NOT NULL,
                PRIMARY KEY (user_id, pet_id)
            );",
        )?;
        Ok(())
    }
}
