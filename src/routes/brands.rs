use actix_web::http::StatusCode;
use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::brands::BrandForm;
use crate::repository::DieselRepository;
use crate::routes::{data_response, error_response, message_response};
use crate::services::brands as brand_service;

#[get("/api/v1/brands")]
pub async fn list_brands(repo: web::Data<DieselRepository>) -> impl Responder {
    match brand_service::load_brands(repo.get_ref()) {
        Ok(brands) => {
            let count = brands.len();
            data_response(StatusCode::OK, "OK", brands, count)
        }
        Err(err) => error_response(err, "Brands not found".to_string(), "list brands"),
    }
}

#[get("/api/v1/brands/{id}")]
pub async fn show_brand(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let brand_id = path.into_inner();

    match brand_service::load_brand(repo.get_ref(), brand_id) {
        Ok(brand) => data_response(StatusCode::OK, "OK", brand, 1),
        Err(err) => error_response(err, format!("Brand {brand_id} not found"), "load brand"),
    }
}

#[post("/api/v1/brands")]
pub async fn add_brand(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BrandForm>,
) -> impl Responder {
    match brand_service::create_brand(repo.get_ref(), form) {
        Ok(brand) => data_response(StatusCode::CREATED, "Brand created successfully", brand, 1),
        Err(err) => error_response(err, "Brand not found".to_string(), "create brand"),
    }
}

#[put("/api/v1/brands/{id}")]
pub async fn edit_brand(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BrandForm>,
) -> impl Responder {
    let brand_id = path.into_inner();

    match brand_service::update_brand(repo.get_ref(), brand_id, form) {
        Ok(brand) => data_response(StatusCode::OK, "Brand updated successfully", brand, 1),
        Err(err) => error_response(err, format!("Brand {brand_id} not found"), "update brand"),
    }
}

#[delete("/api/v1/brands/{id}")]
pub async fn delete_brand(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let brand_id = path.into_inner();

    match brand_service::remove_brand(repo.get_ref(), brand_id) {
        Ok(()) => message_response(StatusCode::OK, "Brand deleted successfully"),
        Err(err) => error_response(err, format!("Brand {brand_id} not found"), "delete brand"),
    }
}
