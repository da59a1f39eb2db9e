use chrono::Utc;

use crate::domain::product::Product;
use crate::forms::products::ProductForm;
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult, validate_id};

/// Returns every product ordered by identifier.
pub fn load_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(ServiceError::from)
}

/// Fetches a single product, mapping a missing record to `NotFound`.
pub fn load_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_product<R>(repo: &R, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

pub fn update_product<R>(repo: &R, product_id: i32, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let updates = form
        .into_update_product(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a product and the price rules attached to it.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    validate_id(product_id)?;

    repo.delete_product(product_id).map_err(ServiceError::from)
}
