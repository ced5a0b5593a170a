//! User account model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered adopter.
///
/// The password digest never leaves the store layer and is deliberately not
/// part of this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}
