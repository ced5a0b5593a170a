//! Pet listing model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// A pet listed for adoption.
///
/// `age` is in months. `category` carries the joined category row when the
/// store returns a denormalized listing; it is absent on bare rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub gender: String,
    pub size: String,
    pub distance: f64,
    pub price: u32,
    pub description: String,
    pub images: Vec<String>,
    pub shelter: String,
    pub tags: Vec<String>,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
}
