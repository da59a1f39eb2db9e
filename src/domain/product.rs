use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a product that can carry price rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
}

impl NewProduct {
    /// Construct a new product payload with a trimmed name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        Self { name }
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProduct {
    /// Updated human-readable name of the product.
    pub name: String,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}
