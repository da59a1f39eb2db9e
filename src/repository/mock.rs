use mockall::mock;

use super::{
    BrandReader, BrandWriter, PriceReader, PriceRuleStore, PriceWriter, ProductReader,
    ProductWriter,
};
use crate::domain::{
    brand::{Brand, NewBrand, UpdateBrand},
    price::{NewPriceRule, PriceRule, UpdatePriceRule},
    product::{NewProduct, Product, UpdateProduct},
};
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub BrandReader {}

    impl BrandReader for BrandReader {
        fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>>;
        fn list_brands(&self) -> RepositoryResult<Vec<Brand>>;
    }
}

mock! {
    pub BrandWriter {}

    impl BrandWriter for BrandWriter {
        fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
        fn update_brand(&self, brand_id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand>;
        fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub PriceReader {}

    impl PriceReader for PriceReader {
        fn get_price_by_id(&self, id: i32) -> RepositoryResult<Option<PriceRule>>;
        fn list_prices(&self) -> RepositoryResult<Vec<PriceRule>>;
    }
}

mock! {
    pub PriceWriter {}

    impl PriceWriter for PriceWriter {
        fn create_price(&self, new_price: &NewPriceRule) -> RepositoryResult<PriceRule>;
        fn create_prices(&self, new_prices: &[NewPriceRule]) -> RepositoryResult<usize>;
        fn update_price(&self, price_id: i32, updates: &UpdatePriceRule) -> RepositoryResult<PriceRule>;
        fn delete_price(&self, price_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub PriceRuleStore {}

    impl PriceRuleStore for PriceRuleStore {
        fn candidates_for(&self, product_id: i32, brand_id: i32) -> RepositoryResult<Vec<PriceRule>>;
    }
}
