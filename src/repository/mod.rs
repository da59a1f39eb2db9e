use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::brand::{Brand, NewBrand, UpdateBrand};
use crate::domain::price::{NewPriceRule, PriceRule, UpdatePriceRule};
use crate::domain::product::{NewProduct, Product, UpdateProduct};

pub mod brand;
pub mod memory;
pub mod price;
pub mod product;

#[cfg(test)]
pub mod mock;

pub use memory::InMemoryRuleStore;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over brand records.
pub trait BrandReader {
    fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>>;
    fn list_brands(&self) -> RepositoryResult<Vec<Brand>>;
}

/// Write operations over brand records.
pub trait BrandWriter {
    fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
    fn update_brand(&self, brand_id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand>;
    /// Removes the brand together with every price rule scoped to it.
    fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    /// Removes the product together with every price rule scoped to it.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over price rule records.
pub trait PriceReader {
    fn get_price_by_id(&self, id: i32) -> RepositoryResult<Option<PriceRule>>;
    fn list_prices(&self) -> RepositoryResult<Vec<PriceRule>>;
}

/// Write operations over price rule records.
pub trait PriceWriter {
    fn create_price(&self, new_price: &NewPriceRule) -> RepositoryResult<PriceRule>;
    /// Inserts all rules in a single transaction and returns how many were stored.
    fn create_prices(&self, new_prices: &[NewPriceRule]) -> RepositoryResult<usize>;
    fn update_price(&self, price_id: i32, updates: &UpdatePriceRule)
    -> RepositoryResult<PriceRule>;
    fn delete_price(&self, price_id: i32) -> RepositoryResult<()>;
}

/// Source of candidate price rules for resolution.
///
/// Implementations return every rule whose product and brand match, in any
/// order and without looking at validity windows. An unknown pair yields an
/// empty vector rather than an error.
pub trait PriceRuleStore {
    fn candidates_for(&self, product_id: i32, brand_id: i32) -> RepositoryResult<Vec<PriceRule>>;
}
