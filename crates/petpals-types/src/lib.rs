//! # PetPals Types
//!
//! Domain models, request/response DTOs, and search filter types for the
//! PetPals adoption marketplace.
//!
//! This crate sits at the bottom of the dependency graph:
//!
//! ```text
//!                petpals-types (this crate)
//!                        │
//!       ┌────────────────┼────────────────┐
//!       ▼                ▼                ▼
//!  petpals-core   petpals-client   petpals-server
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde, camelCase on the wire
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod filter;
pub mod models;
pub mod requests;
pub mod responses;

pub use filter::PetFilter;
pub use models::{Category, Pet, User};
pub use requests::{CreatePetRequest, LoginRequest, RegisterRequest, UpdatePetRequest};
pub use responses::{AuthResponse, ErrorResponse, FavoriteCheckResponse, MessageResponse};
