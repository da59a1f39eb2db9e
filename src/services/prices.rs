use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::price::{PriceRule, format_rule_date};
use crate::forms::prices::{PriceForm, PriceToApplyQuery, UploadPricesForm};
use crate::repository::{BrandReader, PriceReader, PriceRuleStore, PriceWriter, ProductReader};
use crate::services::resolver::PriceResolver;
use crate::services::{ServiceError, ServiceResult, validate_id};

/// View model of a stored price rule with rendered validity window.
#[derive(Debug, Serialize, PartialEq)]
pub struct PriceRuleView {
    pub id: i32,
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    /// Start of the window, formatted `yyyy-MM-dd-HH.mm.ss`.
    pub start_date: String,
    /// End of the window, formatted `yyyy-MM-dd-HH.mm.ss`.
    pub end_date: String,
    pub priority: i32,
    pub price: Decimal,
    pub currency: String,
}

impl From<PriceRule> for PriceRuleView {
    fn from(rule: PriceRule) -> Self {
        Self {
            id: rule.id,
            product_id: rule.product_id,
            brand_id: rule.brand_id,
            price_list: rule.price_list,
            start_date: format_rule_date(rule.valid_from),
            end_date: format_rule_date(rule.valid_to),
            priority: rule.priority,
            price: rule.amount(),
            currency: rule.currency,
        }
    }
}

/// Price rule selected for a product and brand at a given instant.
#[derive(Debug, Serialize, PartialEq)]
pub struct PriceToApply {
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    pub start_date: String,
    pub end_date: String,
    pub priority: i32,
    pub price: Decimal,
    pub currency: String,
}

impl From<PriceRule> for PriceToApply {
    fn from(rule: PriceRule) -> Self {
        Self {
            product_id: rule.product_id,
            brand_id: rule.brand_id,
            price_list: rule.price_list,
            start_date: format_rule_date(rule.valid_from),
            end_date: format_rule_date(rule.valid_to),
            priority: rule.priority,
            price: rule.amount(),
            currency: rule.currency,
        }
    }
}

pub fn load_prices<R>(repo: &R) -> ServiceResult<Vec<PriceRuleView>>
where
    R: PriceReader + ?Sized,
{
    let prices = repo.list_prices().map_err(ServiceError::from)?;

    Ok(prices.into_iter().map(PriceRuleView::from).collect())
}

pub fn load_price<R>(repo: &R, price_id: i32) -> ServiceResult<PriceRuleView>
where
    R: PriceReader + ?Sized,
{
    repo.get_price_by_id(price_id)
        .map_err(ServiceError::from)?
        .map(PriceRuleView::from)
        .ok_or(ServiceError::NotFound)
}

/// Creates a price rule after checking that its product and brand exist.
pub fn create_price<R>(repo: &R, form: PriceForm) -> ServiceResult<PriceRuleView>
where
    R: PriceWriter + BrandReader + ProductReader + ?Sized,
{
    let new_price = form
        .into_new_price_rule()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_references_exist(repo, new_price.product_id, new_price.brand_id)?;

    repo.create_price(&new_price)
        .map(PriceRuleView::from)
        .map_err(ServiceError::from)
}

/// Replaces every field of an existing price rule, keeping its identifier.
pub fn update_price<R>(repo: &R, price_id: i32, form: PriceForm) -> ServiceResult<PriceRuleView>
where
    R: PriceWriter + BrandReader + ProductReader + ?Sized,
{
    let updates = form
        .into_update_price_rule(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_references_exist(repo, updates.product_id, updates.brand_id)?;

    repo.update_price(price_id, &updates)
        .map(PriceRuleView::from)
        .map_err(ServiceError::from)
}

pub fn remove_price<R>(repo: &R, price_id: i32) -> ServiceResult<()>
where
    R: PriceWriter + ?Sized,
{
    validate_id(price_id)?;

    repo.delete_price(price_id).map_err(ServiceError::from)
}

/// Imports price rules from an uploaded CSV file. Either every row is stored
/// or none is.
pub fn import_prices<R>(repo: &R, mut form: UploadPricesForm) -> ServiceResult<usize>
where
    R: PriceWriter + BrandReader + ProductReader + ?Sized,
{
    let new_prices = form
        .into_new_price_rules()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    for new_price in &new_prices {
        ensure_references_exist(repo, new_price.product_id, new_price.brand_id)?;
    }

    repo.create_prices(&new_prices).map_err(ServiceError::from)
}

/// Resolves the price rule in effect for the queried product, brand and date.
///
/// Returns `ServiceError::NotFound` when no rule applies.
pub fn find_price_to_apply<R>(repo: &R, query: PriceToApplyQuery) -> ServiceResult<PriceToApply>
where
    R: PriceRuleStore + ?Sized,
{
    let query = query
        .into_resolution_query()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let resolved = PriceResolver::new(repo)
        .resolve(&query)
        .map_err(ServiceError::from)?;

    match resolved {
        Some(rule) => {
            log::debug!(
                "Resolved price rule {} for product {} brand {} at {}",
                rule.id,
                query.product_id,
                query.brand_id,
                query.as_of
            );
            Ok(rule.into())
        }
        None => {
            log::debug!(
                "No price rule for product {} brand {} at {}",
                query.product_id,
                query.brand_id,
                query.as_of
            );
            Err(ServiceError::NotFound)
        }
    }
}

fn ensure_references_exist<R>(repo: &R, product_id: i32, brand_id: i32) -> ServiceResult<()>
where
    R: BrandReader + ProductReader + ?Sized,
{
    if repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::Form(format!(
            "Product {product_id} does not exist"
        )));
    }

    if repo
        .get_brand_by_id(brand_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::Form(format!("Brand {brand_id} does not exist")));
    }

    Ok(())
}
