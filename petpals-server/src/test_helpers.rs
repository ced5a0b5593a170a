//! Test helpers for petpals-server unit tests.

use petpals_core::Database;

use crate::auth::CurrentUser;
use crate::state::AppState;

/// Minimal `AppState` over a seeded in-memory database.
pub fn test_app_state() -> AppState {
    let db = Database::open_in_memory().expect("failed to open in-memory db");
    db.seed().expect("failed to seed db");
    AppState::new(db)
}

/// Log the seeded demo user in and return their identity extension.
pub fn login_demo(state: &AppState) -> CurrentUser {
    let user = state
        .db()
        .verify_login("demo@petpals.com", "password123")
        .expect("demo login failed");
    let token = state.create_session(&user.id);
    CurrentUser { id: user.id, token }
}
