use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a brand that price rules are scoped to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    /// Unique identifier of the brand.
    pub id: i32,
    /// Human-readable name of the brand.
    pub name: String,
    /// Timestamp for when the brand record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the brand record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBrand {
    /// Human-readable name of the brand.
    pub name: String,
}

impl NewBrand {
    /// Construct a new brand payload with a trimmed name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        Self { name }
    }
}

/// Patch data applied when updating an existing brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBrand {
    /// Updated human-readable name of the brand.
    pub name: String,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}
