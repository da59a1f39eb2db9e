use std::io::{Read, Seek};

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use chrono::NaiveDateTime;
use csv::Trim;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::price::{
    NewPriceRule, PriceResolutionQuery, UpdatePriceRule, amount_to_cents, parse_application_date,
    parse_rule_date,
};

/// ISO 4217 currency codes are three ASCII alphabetic characters.
const CURRENCY_CODE_LEN: usize = 3;

/// Result type returned by the price form helpers.
pub type PriceFormResult<T> = Result<T, PriceFormError>;

/// Errors that can occur while processing price rule payloads.
#[derive(Debug, Error)]
pub enum PriceFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A rule boundary could not be parsed.
    #[error("invalid {field} `{value}`")]
    InvalidDate { field: &'static str, value: String },
    /// The validity window ends before it starts.
    #[error("start_date must not be after end_date")]
    InvertedWindow,
    /// The amount is negative or has more than two fractional digits.
    #[error("invalid price `{value}`: expected a non-negative amount with at most two decimals")]
    InvalidAmount { value: Decimal },
    /// The provided currency code is invalid.
    #[error("invalid currency code `{value}`")]
    InvalidCurrency { value: String },
    /// The application date does not follow `yyyy-MM-dd HH:mm:ss`.
    #[error(
        "The value {value} in the field application_date is invalid. Expected format: yyyy-MM-dd HH:mm:ss"
    )]
    InvalidApplicationDate { value: String },
    /// A CSV row failed validation.
    #[error("row {row}: {message}")]
    UploadRow { row: usize, message: String },
    /// The upload did not contain any price rules.
    #[error("upload contains no prices")]
    EmptyUpload,
    /// CSV parsing failures.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    /// The uploaded file could not be read.
    #[error("failed to read upload: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON payload (and CSV row) describing a price rule.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PriceForm {
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub brand_id: i32,
    #[validate(range(min = 0))]
    pub price_list: i32,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub priority: i32,
    pub price: Decimal,
    pub currency: String,
}

/// Field values shared by inserts and in-place updates.
struct SanitizedPrice {
    valid_from: NaiveDateTime,
    valid_to: NaiveDateTime,
    price_cents: i64,
    currency: String,
}

impl PriceForm {
    /// Validates the payload into a domain `NewPriceRule`.
    pub fn into_new_price_rule(self) -> PriceFormResult<NewPriceRule> {
        let sanitized = self.sanitize()?;

        Ok(NewPriceRule {
            product_id: self.product_id,
            brand_id: self.brand_id,
            price_list: self.price_list,
            valid_from: sanitized.valid_from,
            valid_to: sanitized.valid_to,
            priority: self.priority,
            price_cents: sanitized.price_cents,
            currency: sanitized.currency,
        })
    }

    /// Validates the payload into a domain `UpdatePriceRule`.
    pub fn into_update_price_rule(
        self,
        updated_at: NaiveDateTime,
    ) -> PriceFormResult<UpdatePriceRule> {
        let sanitized = self.sanitize()?;

        Ok(UpdatePriceRule {
            product_id: self.product_id,
            brand_id: self.brand_id,
            price_list: self.price_list,
            valid_from: sanitized.valid_from,
            valid_to: sanitized.valid_to,
            priority: self.priority,
            price_cents: sanitized.price_cents,
            currency: sanitized.currency,
            updated_at,
        })
    }

    fn sanitize(&self) -> PriceFormResult<SanitizedPrice> {
        self.validate()?;

        let valid_from = parse_rule_date(&self.start_date).ok_or_else(|| {
            PriceFormError::InvalidDate {
                field: "start_date",
                value: self.start_date.clone(),
            }
        })?;
        let valid_to =
            parse_rule_date(&self.end_date).ok_or_else(|| PriceFormError::InvalidDate {
                field: "end_date",
                value: self.end_date.clone(),
            })?;

        if valid_from > valid_to {
            return Err(PriceFormError::InvertedWindow);
        }

        let price_cents = amount_to_cents(self.price)
            .ok_or(PriceFormError::InvalidAmount { value: self.price })?;

        Ok(SanitizedPrice {
            valid_from,
            valid_to,
            price_cents,
            currency: sanitize_currency(&self.currency)?,
        })
    }
}

/// Query string of the price resolution endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct PriceToApplyQuery {
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub brand_id: i32,
    /// Instant to resolve, formatted `yyyy-MM-dd HH:mm:ss`.
    pub application_date: String,
}

impl PriceToApplyQuery {
    pub fn into_resolution_query(self) -> PriceFormResult<PriceResolutionQuery> {
        self.validate()?;

        let as_of = parse_application_date(&self.application_date).ok_or_else(|| {
            PriceFormError::InvalidApplicationDate {
                value: self.application_date.clone(),
            }
        })?;

        Ok(PriceResolutionQuery::new(
            self.product_id,
            self.brand_id,
            as_of,
        ))
    }
}

#[derive(MultipartForm)]
/// Multipart form for uploading a CSV file with price rules.
pub struct UploadPricesForm {
    #[multipart(limit = "10MB")]
    /// Uploaded CSV file whose header matches the [`PriceForm`] fields.
    pub csv: TempFile,
}

impl UploadPricesForm {
    /// Parse the uploaded CSV file into a list of [`NewPriceRule`] records.
    pub fn into_new_price_rules(&mut self) -> PriceFormResult<Vec<NewPriceRule>> {
        self.csv.file.rewind()?;
        parse_price_rules(self.csv.file.by_ref())
    }
}

fn parse_price_rules<R: Read>(reader: R) -> PriceFormResult<Vec<NewPriceRule>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader);

    let mut price_rules = Vec::new();

    for (index, row) in csv_reader.deserialize::<PriceForm>().enumerate() {
        // Row 1 is the header.
        let row_number = index + 2;
        let rule = row
            .map_err(PriceFormError::from)
            .and_then(PriceForm::into_new_price_rule)
            .map_err(|err| PriceFormError::UploadRow {
                row: row_number,
                message: err.to_string(),
            })?;

        price_rules.push(rule);
    }

    if price_rules.is_empty() {
        return Err(PriceFormError::EmptyUpload);
    }

    Ok(price_rules)
}

fn sanitize_currency(input: &str) -> PriceFormResult<String> {
    let trimmed = input.trim();
    if trimmed.len() != CURRENCY_CODE_LEN || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(PriceFormError::InvalidCurrency {
            value: trimmed.to_string(),
        });
    }

    Ok(trimmed.to_ascii_uppercase())
}
