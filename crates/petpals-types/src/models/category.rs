//! Pet category model.

use serde::{Deserialize, Serialize};

use super::Pet;

/// A browsing category (Dog, Cat, Birds, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Category plus the number of pets currently listed under it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithCount {
    #[serde(flatten)]
    pub category: Category,
    pub pet_count: u64,
}

/// Category with its full pet listing, returned by the single-category view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithPets {
    #[serde(flatten)]
    pub category: Category,
    pub pets: Vec<Pet>,
}
