use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::price::{
    NewPriceRule as DomainNewPriceRule, PriceRule as DomainPriceRule,
    UpdatePriceRule as DomainUpdatePriceRule,
};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::prices,
    belongs_to(super::product::Product, foreign_key = product_id),
    belongs_to(super::brand::Brand, foreign_key = brand_id)
)]
pub struct Price {
    pub id: i32,
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub priority: i32,
    pub price_cents: i64,
    pub currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::prices)]
pub struct NewPrice<'a> {
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub priority: i32,
    pub price_cents: i64,
    pub currency: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::prices)]
pub struct UpdatePrice<'a> {
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub priority: i32,
    pub price_cents: i64,
    pub currency: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Price> for DomainPriceRule {
    fn from(value: Price) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            brand_id: value.brand_id,
            price_list: value.price_list,
            valid_from: value.valid_from,
            valid_to: value.valid_to,
            priority: value.priority,
            price_cents: value.price_cents,
            currency: value.currency,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewPriceRule> for NewPrice<'a> {
    fn from(value: &'a DomainNewPriceRule) -> Self {
        Self {
            product_id: value.product_id,
            brand_id: value.brand_id,
            price_list: value.price_list,
            valid_from: value.valid_from,
            valid_to: value.valid_to,
            priority: value.priority,
            price_cents: value.price_cents,
            currency: value.currency.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdatePriceRule> for UpdatePrice<'a> {
    fn from(value: &'a DomainUpdatePriceRule) -> Self {
        Self {
            product_id: value.product_id,
            brand_id: value.brand_id,
            price_list: value.price_list,
            valid_from: value.valid_from,
            valid_to: value.valid_to,
            priority: value.priority,
            price_cents: value.price_cents,
            currency: value.currency.as_str(),
            updated_at: value.updated_at,
        }
    }
}
