use actix_web::http::StatusCode;
use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::products::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::{data_response, error_response, message_response};
use crate::services::products as product_service;

fn not_found(product_id: i32) -> String {
    format!("Product {product_id} not found")
}

#[get("/api/v1/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match product_service::load_products(repo.get_ref()) {
        Ok(products) => {
            let count = products.len();
            data_response(StatusCode::OK, "OK", products, count)
        }
        Err(err) => error_response(err, "Products not found".to_string(), "list products"),
    }
}

#[get("/api/v1/products/{id}")]
pub async fn show_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match product_service::load_product(repo.get_ref(), product_id) {
        Ok(product) => data_response(StatusCode::OK, "OK", product, 1),
        Err(err) => error_response(err, not_found(product_id), "load product"),
    }
}

#[post("/api/v1/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    match product_service::create_product(repo.get_ref(), form) {
        Ok(product) => data_response(
            StatusCode::CREATED,
            "Product created successfully",
            product,
            1,
        ),
        Err(err) => error_response(err, "Product not found".to_string(), "create product"),
    }
}

#[put("/api/v1/products/{id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    let product_id = path.into_inner();

    match product_service::update_product(repo.get_ref(), product_id, form) {
        Ok(product) => data_response(StatusCode::OK, "Product updated successfully", product, 1),
        Err(err) => error_response(err, not_found(product_id), "update product"),
    }
}

#[delete("/api/v1/products/{id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match product_service::remove_product(repo.get_ref(), product_id) {
        Ok(()) => message_response(StatusCode::OK, "Product deleted successfully"),
        Err(err) => error_response(err, not_found(product_id), "delete product"),
    }
}
