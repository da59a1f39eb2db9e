use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{NAME_MAX_LEN_VALIDATOR, sanitize_inline_text};

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("Product name is required")]
    EmptyName,
}

/// JSON payload used both to create and to rename a product.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
}

impl ProductForm {
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        Ok(NewProduct::new(self.sanitized_name()?))
    }

    pub fn into_update_product(
        self,
        updated_at: NaiveDateTime,
    ) -> ProductFormResult<UpdateProduct> {
        Ok(UpdateProduct {
            name: self.sanitized_name()?,
            updated_at,
        })
    }

    fn sanitized_name(&self) -> ProductFormResult<String> {
        let sanitized = sanitize_inline_text(&self.name);
        if sanitized.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        self.validate()?;
        Ok(sanitized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_form_converts_successfully() {
        let form = ProductForm {
            name: " Linen   shirt ".to_string(),
        };

        let new_product = form
            .into_new_product()
            .expect("expected conversion to succeed");

        assert_eq!(new_product.name, "Linen shirt");
    }

    #[test]
    fn product_form_rejects_empty_name() {
        let form = ProductForm {
            name: String::new(),
        };

        assert!(matches!(
            form.into_new_product(),
            Err(ProductFormError::EmptyName)
        ));
    }
}
