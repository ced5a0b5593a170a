//! Search filter for pet listings.

use serde::{Deserialize, Serialize};

/// Optional search criteria for `GET /pets`.
///
/// Every field is independently optional; an absent field contributes no
/// clause to the resulting query. The same type doubles as the client-side
/// query string (serde skips absent fields) and the server-side `Query`
/// extractor payload.
///
/// `min_age`/`max_age` are inclusive month bounds. The filter carries no
/// semantic validation: a caller that sends `min_age > max_age` simply gets
/// an empty-or-narrow range back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PetFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PetFilter {
    /// A filter with no criteria set; matches every pet.
    pub fn any() -> Self {
        Self::default()
    }

    /// True when no field is set at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
