//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use actix_web::web;
use serde_json::{json, Value};

use ds_api::AppState;
use ds_infra::{InMemoryDatabase, JwtTokenIssuer};
use ds_shared::config::JwtConfig;

pub const SECRET: &str = "integration-test-secret";

pub type TestState = AppState<InMemoryDatabase, JwtTokenIssuer>;

pub fn issuer() -> JwtTokenIssuer {
    JwtTokenIssuer::new(JwtConfig::new(SECRET)).unwrap()
}

/// Fresh state over an empty store
pub fn state() -> web::Data<TestState> {
    web::Data::new(AppState::new(InMemoryDatabase::new(), issuer()))
}

pub fn user_body(email: &str, user_name: &str) -> Value {
    json!({
        "email": email,
        "userName": user_name,
        "password": "secret123",
        "name": { "firstName": "John", "lastName": "Doe" },
        "address": {
            "city": "Springfield",
            "street": "Main St",
            "number": 742,
            "postCode": "12345-678",
            "latitude": "-23.5",
            "longitude": "-46.6"
        },
        "phone": "+5511999999999",
        "status": "Active",
        "role": "Customer"
    })
}

pub fn product_body(title: &str, category: &str, price: f64) -> Value {
    json!({
        "title": title,
        "price": price,
        "description": "A fine product",
        "category": category,
        "image": "https://img.example.com/p.png",
        "rating": { "rate": 4.5, "count": 120 }
    })
}

pub fn cart_body(user_id: i64, items: &[(i64, i64, f64)]) -> Value {
    let items: Vec<Value> = items
        .iter()
        .map(|(product_id, quantity, price)| {
            json!({ "productId": product_id, "quantity": quantity, "itemPrice": price })
        })
        .collect();
    json!({
        "userId": user_id,
        "createDate": "2024-03-01T10:00:00Z",
        "cartItems": items
    })
}

/// Codes of every error in a failed envelope
pub fn error_codes(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["code"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
