//! Request DTOs with validation, mirroring the public API surface.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for `POST /pets`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "species must not be empty"))]
    pub species: String,
    #[validate(length(min = 1, message = "breed must not be empty"))]
    pub breed: String,
    /// Age in months.
    pub age: u32,
    #[validate(length(min = 1, message = "gender must not be empty"))]
    pub gender: String,
    #[validate(length(min = 1, message = "size must not be empty"))]
    pub size: String,
    #[validate(range(min = 0.0, message = "distance must be non-negative"))]
    pub distance: f64,
    pub price: u32,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub images: Vec<String>,
    #[validate(length(min = 1, message = "shelter must not be empty"))]
    pub shelter: String,
    pub tags: Vec<String>,
    #[validate(length(min = 1, message = "categoryId must not be empty"))]
    pub category_id: String,
}

/// Payload for `PUT /pets/:id`. Every field optional; absent fields are left
/// untouched by the update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "species must not be empty"))]
    pub species: Option<String>,
    #[validate(length(min = 1, message = "breed must not be empty"))]
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub size: Option<String>,
    pub distance: Option<f64>,
    pub price: Option<u32>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub shelter: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category_id: Option<String>,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_pet() -> CreatePetRequest {
        CreatePetRequest {
            name: "Luna".into(),
            species: "Dog".into(),
            breed: "Siberian Husky".into(),
            age: 36,
            gender: "Female".into(),
            size: "Large".into(),
            distance: 0.9,
            price: 820,
            description: "Majestic husky".into(),
            images: vec![],
            shelter: "Happy Paws".into(),
            tags: vec!["friendly".into()],
            category_id: "cat-dog".into(),
        }
    }

    #[test]
    fn test_valid_create_request_passes() {
        assert!(valid_pet().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut req = valid_pet();
        req.name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_requires_valid_email() {
        let req = RegisterRequest {
            email: "not-an-email".into(),
            password: "password123".into(),
            name: "Demo".into(),
        };
        assert!(req.validate().is_err());
    }
}
