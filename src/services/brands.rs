use chrono::Utc;

use crate::domain::brand::Brand;
use crate::forms::brands::BrandForm;
use crate::repository::{BrandReader, BrandWriter};
use crate::services::{ServiceError, ServiceResult, validate_id};

/// Returns every brand ordered by identifier.
pub fn load_brands<R>(repo: &R) -> ServiceResult<Vec<Brand>>
where
    R: BrandReader + ?Sized,
{
    repo.list_brands().map_err(ServiceError::from)
}

/// Fetches a single brand, mapping a missing record to `NotFound`.
pub fn load_brand<R>(repo: &R, brand_id: i32) -> ServiceResult<Brand>
where
    R: BrandReader + ?Sized,
{
    repo.get_brand_by_id(brand_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_brand<R>(repo: &R, form: BrandForm) -> ServiceResult<Brand>
where
    R: BrandWriter + ?Sized,
{
    let new_brand = form
        .into_new_brand()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_brand(&new_brand).map_err(ServiceError::from)
}

pub fn update_brand<R>(repo: &R, brand_id: i32, form: BrandForm) -> ServiceResult<Brand>
where
    R: BrandWriter + ?Sized,
{
    let updates = form
        .into_update_brand(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_brand(brand_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a brand and the price rules attached to it.
pub fn remove_brand<R>(repo: &R, brand_id: i32) -> ServiceResult<()>
where
    R: BrandWriter + ?Sized,
{
    validate_id(brand_id)?;

    repo.delete_brand(brand_id).map_err(ServiceError::from)
}
