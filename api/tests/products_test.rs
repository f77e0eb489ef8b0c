//! Integration tests for the product catalog endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use common::{product_body, state};
use ds_api::create_app;
use ds_shared::config::CorsConfig;

#[actix_rt::test]
async fn test_product_lifecycle() {
    let app = test::init_service(create_app(state(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .set_json(product_body("Keyboard", "electronics", 49.9))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["value"]["id"], 1);
    assert_eq!(body["value"]["price"].as_f64(), Some(49.9));
    assert_eq!(body["value"]["rating"]["count"], 120);

    let req = test::TestRequest::put()
        .uri("/api/v1/products/1")
        .set_json(product_body("Mechanical Keyboard", "electronics", 89.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["value"]["title"], "Mechanical Keyboard");

    let req = test::TestRequest::delete().uri("/api/v1/products/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["isSuccess"], true);
    assert_eq!(body["value"], Value::Null);

    let req = test::TestRequest::get().uri("/api/v1/products/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_duplicate_title_and_invalid_price() {
    let app = test::init_service(create_app(state(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .set_json(product_body("Keyboard", "electronics", 49.9))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .set_json(product_body("Keyboard", "electronics", 10.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["message"], "Product exists");

    let req = test::TestRequest::post()
        .uri("/api/v1/products")
        .set_json(product_body("Mouse", "electronics", 0.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["code"], "price");
}

#[actix_rt::test]
async fn test_categories_and_category_filter() {
    let app = test::init_service(create_app(state(), &CorsConfig::development())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/products/categories")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    for (title, category) in [
        ("Keyboard", "electronics"),
        ("Jacket", "clothing"),
        ("Mouse", "Electronics"),
        ("Monitor", "electronics"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/products")
            .set_json(product_body(title, category, 20.0))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/products/categories")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["value"],
        serde_json::json!(["electronics", "clothing", "Electronics"])
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/products/category/ELECTRONICS")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["value"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/api/v1/products/category/toys")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_list_products_by_price_desc() {
    let app = test::init_service(create_app(state(), &CorsConfig::development())).await;

    for (title, price) in [("Cheap", 5.0), ("Pricey", 500.0), ("Middle", 50.0)] {
        let req = test::TestRequest::post()
            .uri("/api/v1/products")
            .set_json(product_body(title, "misc", price))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/products?order=price%20desc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    let titles: Vec<&str> = body["value"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Pricey", "Middle", "Cheap"]);
    assert_eq!(body["totalRecords"], 3);
    assert_eq!(body["pageSize"], 3);
}

#[actix_rt::test]
async fn test_non_numeric_id_is_invalid_request() {
    let app = test::init_service(create_app(state(), &CorsConfig::development())).await;

    let req = test::TestRequest::get().uri("/api/v1/products/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["code"], "InvalidRequest");
}
