//! User accounts and credential verification.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use petpals_types::{RegisterRequest, User};
use rand::RngCore;
use rusqlite::{params, Row};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

use super::Database;

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    let created_at: String = row.get(4)?;
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
        avatar: row.get(3)?,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_default(),
    })
}

/// Digest format: `base64(salt) "$" base64(sha256(salt || password))`.
fn hash_password(password: &str) -> String {
    let mut salt = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt);
    let digest = salted_digest(&salt, password);
    format!("{}${}", STANDARD_NO_PAD.encode(salt), STANDARD_NO_PAD.encode(digest))
}

fn salted_digest(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

fn verify_password(stored: &str, password: &str) -> bool {
    let Some((salt_b64, digest_b64)) = stored.split_once('$') else {
        return false;
    };
    let (Ok(salt), Ok(expected)) =
        (STANDARD_NO_PAD.decode(salt_b64), STANDARD_NO_PAD.decode(digest_b64))
    else {
        return false;
    };
    let actual = salted_digest(&salt, password);
    actual.as_slice().ct_eq(&expected).into()
}

impl Database {
    /// Register a new user. The email must be unused.
    pub fn create_user(&self, req: &RegisterRequest) -> AppResult<User> {
        let existing: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM users WHERE email = ?",
            params![req.email],
            |row| row.get(0),
        )?;
        if existing > 0 {
            return Err(AppError::EmailTaken);
        }

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO users (id, email, password_digest, name, avatar, created_at) \
             VALUES (?1, ?2, ?3, ?4, NULL, ?5)",
            params![id, req.email, hash_password(&req.password), req.name, now.to_rfc3339()],
        )?;
        tracing::info!("Registered user {}", req.email);
        self.get_user(&id)
    }

    /// Verify credentials and return the user, or `InvalidCredentials`.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub fn verify_login(&self, email: &str, password: &str) -> AppResult<User> {
        let row = self
            .conn
            .query_row(
                "SELECT id, password_digest FROM users WHERE email = ?",
                params![email],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => AppError::InvalidCredentials,
                other => AppError::Database(other),
            })?;

        let (id, digest) = row;
        if !verify_password(&digest, password) {
            return Err(AppError::InvalidCredentials);
        }
        self.get_user(&id)
    }

    /// Fetch one user by id, or `NotFound`.
    pub fn get_user(&self, id: &str) -> AppResult<User> {
        self.conn
            .query_row(
                "SELECT id, email, name, avatar, created_at FROM users WHERE id = ?",
                params![id],
                user_from_row,
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => AppError::not_found("User"),
                other => other.into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_round_trip() {
        let stored = hash_password("password123");
        assert!(verify_password(&stored, "password123"));
        assert!(!verify_password(&stored, "password124"));
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        assert_ne!(hash_password("same"), hash_password("same"));
    }

    #[test]
    fn test_malformed_digest_rejected() {
        assert!(!verify_password("not-a-digest", "anything"));
    }
}
