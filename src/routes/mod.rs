use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod brands;
pub mod prices;
pub mod products;

/// Body shared by every API response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Responds with a message and no payload.
pub fn message_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::<()> {
        message: message.into(),
        status: status.as_u16(),
        data: None,
        count: None,
    })
}

/// Responds with a message, a payload and the number of records it holds.
pub fn data_response<T: Serialize>(
    status: StatusCode,
    message: impl Into<String>,
    data: T,
    count: usize,
) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse {
        message: message.into(),
        status: status.as_u16(),
        data: Some(data),
        count: Some(count),
    })
}

/// Responds with only a message and a record count, used by bulk imports.
pub fn count_response(status: StatusCode, message: impl Into<String>, count: usize) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::<()> {
        message: message.into(),
        status: status.as_u16(),
        data: None,
        count: Some(count),
    })
}

/// Maps a failed service call onto the API envelope.
///
/// `not_found` is the message reported for a missing record and `action`
/// describes the failed operation in the error log.
pub(crate) fn error_response(err: ServiceError, not_found: String, action: &str) -> HttpResponse {
    match err {
        ServiceError::Form(message) => message_response(StatusCode::BAD_REQUEST, message),
        ServiceError::NotFound => message_response(StatusCode::NOT_FOUND, not_found),
        err => {
            log::error!("Failed to {action}: {err}");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

fn invalid_input(detail: impl std::fmt::Display) -> HttpResponse {
    message_response(
        StatusCode::BAD_REQUEST,
        format!("The input data is invalid. Error: '{detail}'"),
    )
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response = invalid_input(&err);
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let response = invalid_input(&err);
    InternalError::from_response(err, response).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    let response = invalid_input(&err);
    InternalError::from_response(err, response).into()
}

/// Extractor configuration reporting malformed input through the envelope.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
}

/// Registers every API endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    cfg.service(brands::list_brands)
        .service(brands::show_brand)
        .service(brands::add_brand)
        .service(brands::edit_brand)
        .service(brands::delete_brand)
        .service(products::list_products)
        .service(products::show_product)
        .service(products::add_product)
        .service(products::edit_product)
        .service(products::delete_product)
        // Must precede `/api/v1/prices/{id}`.
        .service(prices::get_price_to_apply)
        .service(prices::upload_prices)
        .service(prices::list_prices)
        .service(prices::show_price)
        .service(prices::add_price)
        .service(prices::edit_price)
        .service(prices::delete_price);
}
