//! Domain models shared across the PetPals crates.

mod category;
mod pet;
mod user;

pub use category::{Category, CategoryWithPets, CategoryWithCount};
pub use pet::Pet;
pub use user::User;
