use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Format of the application date accepted by the price resolution endpoint.
pub const APPLICATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Format used when rendering the validity window of a price rule.
pub const RULE_DATE_FORMAT: &str = "%Y-%m-%d-%H.%M.%S";

/// Additional formats accepted when parsing rule boundaries.
const FALLBACK_DATE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", RULE_DATE_FORMAT];

/// Number of fractional digits stored for every amount.
const AMOUNT_SCALE: u32 = 2;

/// Domain representation of a price rule: an amount applicable to a
/// product/brand pair during an inclusive validity window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRule {
    /// Unique identifier of the rule.
    pub id: i32,
    /// Identifier of the product the rule applies to.
    pub product_id: i32,
    /// Identifier of the brand the rule applies to.
    pub brand_id: i32,
    /// Identifier of the rate list the rule originates from.
    pub price_list: i32,
    /// First instant (inclusive) at which the rule applies.
    pub valid_from: NaiveDateTime,
    /// Last instant (inclusive) at which the rule applies.
    pub valid_to: NaiveDateTime,
    /// Tie-break rank; higher values win.
    pub priority: i32,
    /// Price represented in the smallest currency unit (for example cents).
    pub price_cents: i64,
    /// ISO 4217 currency code, passed through unchanged.
    pub currency: String,
    /// Timestamp for when the rule record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the rule record.
    pub updated_at: NaiveDateTime,
}

impl PriceRule {
    /// Returns `true` when `instant` falls inside the closed validity window.
    pub fn applies_at(&self, instant: NaiveDateTime) -> bool {
        self.valid_from <= instant && instant <= self.valid_to
    }

    /// Amount of the rule as a decimal with two fractional digits.
    pub fn amount(&self) -> Decimal {
        cents_to_amount(self.price_cents)
    }
}

/// Payload required to insert a new price rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPriceRule {
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub priority: i32,
    pub price_cents: i64,
    pub currency: String,
}

/// Replacement data applied when updating an existing price rule in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePriceRule {
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub priority: i32,
    pub price_cents: i64,
    pub currency: String,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

/// Lookup of the single rule in effect for a product and brand at `as_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceResolutionQuery {
    pub product_id: i32,
    pub brand_id: i32,
    pub as_of: NaiveDateTime,
}

impl PriceResolutionQuery {
    pub fn new(product_id: i32, brand_id: i32, as_of: NaiveDateTime) -> Self {
        Self {
            product_id,
            brand_id,
            as_of,
        }
    }
}

/// Parses an application date in the `yyyy-MM-dd HH:mm:ss` format.
pub fn parse_application_date(input: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), APPLICATION_DATE_FORMAT).ok()
}

/// Parses a rule boundary, accepting the application date format, ISO 8601
/// without offset and the rendered `yyyy-MM-dd-HH.mm.ss` form.
pub fn parse_rule_date(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    parse_application_date(trimmed).or_else(|| {
        FALLBACK_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    })
}

/// Renders a rule boundary as `yyyy-MM-dd-HH.mm.ss`.
pub fn format_rule_date(value: NaiveDateTime) -> String {
    value.format(RULE_DATE_FORMAT).to_string()
}

pub fn cents_to_amount(cents: i64) -> Decimal {
    Decimal::new(cents, AMOUNT_SCALE)
}

/// Converts a non-negative amount with at most two fractional digits into
/// minor units. Returns `None` for anything that cannot be stored exactly.
pub fn amount_to_cents(amount: Decimal) -> Option<i64> {
    if amount < Decimal::ZERO {
        return None;
    }

    let normalized = amount.normalize();
    if normalized.scale() > AMOUNT_SCALE {
        return None;
    }

    (normalized * Decimal::from(100)).trunc().to_i64()
}
