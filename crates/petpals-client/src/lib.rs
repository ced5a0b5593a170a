//! # PetPals Client
//!
//! Rust SDK for the PetPals REST API:
//!
//! - [`PetPalsClient`] - typed HTTP client over reqwest (auth, pets,
//!   categories, favorites)
//! - [`FavoriteSync`] - client-side favorite set kept consistent with the
//!   server-of-record across add/remove/check, tolerating transport failures
//!   without silently diverging

mod client;
mod error;
mod favorites;
mod types;

pub use client::PetPalsClient;
pub use error::ClientError;
pub use favorites::{FavoriteSync, FavoritesTransport, SyncPhase, Toggle};
pub use types::ClientConfig;
