//! # PetPals Core
//!
//! Business logic for the PetPals adoption marketplace:
//!
//! - **`query`** - composable search predicate built from optional filter
//!   criteria, evaluated in memory or translated to SQL
//! - **`store`** - SQLite-backed repository for users, categories, pets, and
//!   the favorites relation (the server-of-record)
//! - **`error`** - unified error type shared by both

pub mod error;
pub mod query;
pub mod store;

pub use error::{AppError, AppResult};
pub use query::{Clause, Field, Predicate};
pub use store::{Database, FavoriteAdd};
