pub use pushkind_common::services::errors::{ServiceError, ServiceResult};

pub mod brands;
pub mod prices;
pub mod products;
pub mod resolver;

/// Rejects identifiers that can never reference a stored record.
pub(crate) fn validate_id(id: i32) -> ServiceResult<()> {
    if id <= 0 {
        return Err(ServiceError::Form(format!("Invalid id {id}")));
    }

    Ok(())
}
