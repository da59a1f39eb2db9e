//! Helpers for integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use pushkind_common::db::{DbPool, establish_connection_pool};
use pushkind_prices::domain::brand::NewBrand;
use pushkind_prices::domain::price::NewPriceRule;
use pushkind_prices::domain::product::NewProduct;
use pushkind_prices::repository::{BrandWriter, DieselRepository, PriceWriter, ProductWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("valid timestamp")
}

/// Identifiers of the records created by [`seed_reference_catalog`].
pub struct ReferenceCatalog {
    pub product_id: i32,
    pub brand_id: i32,
}

/// Stores one brand, one product and the four reference rules:
///
/// | list | from                | to                  | priority | price |
/// |------|---------------------|---------------------|----------|-------|
/// | 1    | 2020-06-14 00:00:00 | 2020-12-31 23:59:59 | 0        | 35.50 |
/// | 2    | 2020-06-14 15:00:00 | 2020-06-14 18:30:00 | 1        | 25.45 |
/// | 3    | 2020-06-15 00:00:00 | 2020-06-15 11:00:00 | 1        | 30.50 |
/// | 4    | 2020-06-15 16:00:00 | 2020-12-31 23:59:59 | 1        | 38.95 |
pub fn seed_reference_catalog(repo: &DieselRepository) -> ReferenceCatalog {
    let brand = repo
        .create_brand(&NewBrand::new("ZARA"))
        .expect("brand created");
    let product = repo
        .create_product(&NewProduct::new("Shirt"))
        .expect("product created");

    let rule = |price_list, valid_from, valid_to, priority, price_cents| NewPriceRule {
        product_id: product.id,
        brand_id: brand.id,
        price_list,
        valid_from,
        valid_to,
        priority,
        price_cents,
        currency: "EUR".to_string(),
    };

    let rules = [
        rule(
            1,
            at(2020, 6, 14, 0, 0, 0),
            at(2020, 12, 31, 23, 59, 59),
            0,
            3550,
        ),
        rule(
            2,
            at(2020, 6, 14, 15, 0, 0),
            at(2020, 6, 14, 18, 30, 0),
            1,
            2545,
        ),
        rule(
            3,
            at(2020, 6, 15, 0, 0, 0),
            at(2020, 6, 15, 11, 0, 0),
            1,
            3050,
        ),
        rule(
            4,
            at(2020, 6, 15, 16, 0, 0),
            at(2020, 12, 31, 23, 59, 59),
            1,
            3895,
        ),
    ];

    assert_eq!(repo.create_prices(&rules).expect("rules stored"), 4);

    ReferenceCatalog {
        product_id: product.id,
        brand_id: brand.id,
    }
}
