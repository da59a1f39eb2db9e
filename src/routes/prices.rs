use actix_multipart::form::MultipartForm;
use actix_web::http::StatusCode;
use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::prices::{PriceForm, PriceToApplyQuery, UploadPricesForm};
use crate::repository::DieselRepository;
use crate::routes::{count_response, data_response, error_response, message_response};
use crate::services::prices as price_service;

fn not_found(price_id: i32) -> String {
    format!("Price {price_id} not found")
}

/// Returns the price rule in effect for a product and brand at
/// `application_date` (`yyyy-MM-dd HH:mm:ss`).
#[get("/api/v1/prices/get-price")]
pub async fn get_price_to_apply(
    params: web::Query<PriceToApplyQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match price_service::find_price_to_apply(repo.get_ref(), params.into_inner()) {
        Ok(price) => data_response(StatusCode::OK, "OK", price, 1),
        Err(err) => error_response(err, "Price not found".to_string(), "resolve price"),
    }
}

/// Imports price rules from a CSV upload. Nothing is stored when any row is
/// invalid.
#[post("/api/v1/prices/upload")]
pub async fn upload_prices(
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<UploadPricesForm>,
) -> impl Responder {
    match price_service::import_prices(repo.get_ref(), form) {
        Ok(count) => count_response(StatusCode::CREATED, "Prices imported successfully", count),
        Err(err) => error_response(err, "Price not found".to_string(), "import prices"),
    }
}

#[get("/api/v1/prices")]
pub async fn list_prices(repo: web::Data<DieselRepository>) -> impl Responder {
    match price_service::load_prices(repo.get_ref()) {
        Ok(prices) => {
            let count = prices.len();
            data_response(StatusCode::OK, "OK", prices, count)
        }
        Err(err) => error_response(err, "Prices not found".to_string(), "list prices"),
    }
}

#[get("/api/v1/prices/{id}")]
pub async fn show_price(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let price_id = path.into_inner();

    match price_service::load_price(repo.get_ref(), price_id) {
        Ok(price) => data_response(StatusCode::OK, "OK", price, 1),
        Err(err) => error_response(err, not_found(price_id), "load price"),
    }
}

#[post("/api/v1/prices")]
pub async fn add_price(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<PriceForm>,
) -> impl Responder {
    match price_service::create_price(repo.get_ref(), form) {
        Ok(price) => data_response(StatusCode::CREATED, "Price created successfully", price, 1),
        Err(err) => error_response(err, "Price not found".to_string(), "create price"),
    }
}

#[put("/api/v1/prices/{id}")]
pub async fn edit_price(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<PriceForm>,
) -> impl Responder {
    let price_id = path.into_inner();

    match price_service::update_price(repo.get_ref(), price_id, form) {
        Ok(price) => data_response(StatusCode::OK, "Price updated successfully", price, 1),
        Err(err) => error_response(err, not_found(price_id), "update price"),
    }
}

#[delete("/api/v1/prices/{id}")]
pub async fn delete_price(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let price_id = path.into_inner();

    match price_service::remove_price(repo.get_ref(), price_id) {
        Ok(()) => message_response(StatusCode::OK, "Price deleted successfully"),
        Err(err) => error_response(err, not_found(price_id), "delete price"),
    }
}
