use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use pushkind_prices::repository::DieselRepository;
use pushkind_prices::routes;

mod common;

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .configure(routes::configure),
        )
        .await
    };
}

fn get_price_uri(catalog: &common::ReferenceCatalog, application_date: &str) -> String {
    format!(
        "/api/v1/prices/get-price?product_id={}&brand_id={}&application_date={}",
        catalog.product_id,
        catalog.brand_id,
        application_date.replace(' ', "%20")
    )
}

#[actix_web::test]
async fn get_price_returns_rule_in_envelope() {
    let test_db = common::TestDb::new("api_get_price_found.db");
    let repo: DieselRepository = test_db.repository();
    let catalog = common::seed_reference_catalog(&repo);
    let app = init_app!(repo);

    let request = test::TestRequest::get()
        .uri(&get_price_uri(&catalog, "2020-06-14 16:00:00"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "OK");
    assert_eq!(body["status"], 200);
    assert_eq!(body["count"], 1);
    assert_eq!(
        body["data"],
        json!({
            "product_id": catalog.product_id,
            "brand_id": catalog.brand_id,
            "price_list": 2,
            "start_date": "2020-06-14-15.00.00",
            "end_date": "2020-06-14-18.30.00",
            "priority": 1,
            "price": "25.45",
            "currency": "EUR",
        })
    );
}

#[actix_web::test]
async fn get_price_reports_not_found_without_data() {
    let test_db = common::TestDb::new("api_get_price_missing.db");
    let repo = test_db.repository();
    let catalog = common::seed_reference_catalog(&repo);
    let app = init_app!(repo);

    let request = test::TestRequest::get()
        .uri(&get_price_uri(&catalog, "2024-07-21 13:00:00"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"message": "Price not found", "status": 404}));
}

#[actix_web::test]
async fn get_price_rejects_malformed_input() {
    let test_db = common::TestDb::new("api_get_price_malformed.db");
    let repo = test_db.repository();
    let catalog = common::seed_reference_catalog(&repo);
    let app = init_app!(repo);

    let bad_date = test::TestRequest::get()
        .uri(&get_price_uri(&catalog, "2020-06-14T10:00:00"))
        .to_request();
    let response = test::call_service(&app, bad_date).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body["message"],
        "The value 2020-06-14T10:00:00 in the field application_date is invalid. Expected format: yyyy-MM-dd HH:mm:ss"
    );

    let bad_id = test::TestRequest::get()
        .uri("/api/v1/prices/get-price?product_id=abc&brand_id=1&application_date=2020-06-14%2010:00:00")
        .to_request();
    let response = test::call_service(&app, bad_id).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    let message = body["message"].as_str().expect("message is a string");
    assert!(message.starts_with("The input data is invalid. Error: '"));
}

#[actix_web::test]
async fn brand_lifecycle_uses_envelope() {
    let test_db = common::TestDb::new("api_brand_lifecycle.db");
    let app = init_app!(test_db.repository());

    let create = test::TestRequest::post()
        .uri("/api/v1/brands")
        .set_json(json!({"name": "ZARA"}))
        .to_request();
    let response = test::call_service(&app, create).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Brand created successfully");
    let brand_id = body["data"]["id"].as_i64().expect("brand id");

    let blank = test::TestRequest::post()
        .uri("/api/v1/brands")
        .set_json(json!({"name": "   "}))
        .to_request();
    let response = test::call_service(&app, blank).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let list = test::TestRequest::get().uri("/api/v1/brands").to_request();
    let body: Value = test::call_and_read_body_json(&app, list).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "ZARA");

    let delete = test::TestRequest::delete()
        .uri(&format!("/api/v1/brands/{brand_id}"))
        .to_request();
    let response = test::call_service(&app, delete).await;
    assert_eq!(response.status(), StatusCode::OK);

    let missing = test::TestRequest::get()
        .uri(&format!("/api/v1/brands/{brand_id}"))
        .to_request();
    let response = test::call_service(&app, missing).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], format!("Brand {brand_id} not found"));

    let invalid = test::TestRequest::delete()
        .uri("/api/v1/brands/0")
        .to_request();
    let response = test::call_service(&app, invalid).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Invalid id 0");
}

#[actix_web::test]
async fn create_price_accepts_json_body() {
    let test_db = common::TestDb::new("api_create_price.db");
    let repo = test_db.repository();
    let catalog = common::seed_reference_catalog(&repo);
    let app = init_app!(repo);

    let request = test::TestRequest::post()
        .uri("/api/v1/prices")
        .set_json(json!({
            "product_id": catalog.product_id,
            "brand_id": catalog.brand_id,
            "price_list": 5,
            "start_date": "2021-01-01 00:00:00",
            "end_date": "2021-01-31 23:59:59",
            "priority": 0,
            "price": 12.5,
            "currency": "EUR",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["price"], "12.50");
    assert_eq!(body["data"]["start_date"], "2021-01-01-00.00.00");

    let malformed = test::TestRequest::post()
        .uri("/api/v1/prices")
        .insert_header(ContentType::json())
        .set_payload("{\"product_id\": ")
        .to_request();
    let response = test::call_service(&app, malformed).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn upload_prices_imports_csv_rows() {
    let test_db = common::TestDb::new("api_upload_prices.db");
    let repo = test_db.repository();
    let catalog = common::seed_reference_catalog(&repo);
    let app = init_app!(repo);

    let boundary = "PRICEBOUNDARY";
    let csv = format!(
        "product_id,brand_id,price_list,start_date,end_date,priority,price,currency\n\
         {product},{brand},7,2021-03-01 00:00:00,2021-03-31 23:59:59,0,10.00,EUR\n\
         {product},{brand},8,2021-03-10 00:00:00,2021-03-12 23:59:59,1,8.75,EUR\n",
        product = catalog.product_id,
        brand = catalog.brand_id,
    );
    let payload = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"csv\"; filename=\"prices.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {csv}\r\n\
         --{boundary}--\r\n"
    );

    let request = test::TestRequest::post()
        .uri("/api/v1/prices/upload")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        ))
        .set_payload(payload)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["count"], 2);

    let resolve = test::TestRequest::get()
        .uri(&get_price_uri(&catalog, "2021-03-11 12:00:00"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, resolve).await;
    assert_eq!(body["data"]["price"], "8.75");
}
