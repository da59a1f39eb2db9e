use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::brand::{NewBrand, UpdateBrand};
use crate::forms::{NAME_MAX_LEN_VALIDATOR, sanitize_inline_text};

/// Result type returned by the brand form helpers.
pub type BrandFormResult<T> = Result<T, BrandFormError>;

/// Errors that can occur while processing brand payloads.
#[derive(Debug, Error)]
pub enum BrandFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("Brand name is required")]
    EmptyName,
}

/// JSON payload used both to create and to rename a brand.
#[derive(Debug, Deserialize, Validate)]
pub struct BrandForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
}

impl BrandForm {
    /// Validates and sanitizes the payload into a domain `NewBrand`.
    pub fn into_new_brand(self) -> BrandFormResult<NewBrand> {
        Ok(NewBrand::new(self.sanitized_name()?))
    }

    /// Validates and sanitizes the payload into a domain `UpdateBrand`.
    pub fn into_update_brand(self, updated_at: NaiveDateTime) -> BrandFormResult<UpdateBrand> {
        Ok(UpdateBrand {
            name: self.sanitized_name()?,
            updated_at,
        })
    }

    fn sanitized_name(&self) -> BrandFormResult<String> {
        let sanitized = sanitize_inline_text(&self.name);
        if sanitized.is_empty() {
            return Err(BrandFormError::EmptyName);
        }

        self.validate()?;
        Ok(sanitized)
    }
}
