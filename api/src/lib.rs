//! # DeveloperStore API
//!
//! actix-web transport for the DeveloperStore services: route table,
//! envelope to status mapping, CORS and request ids, configuration loading.

pub mod app;
pub mod config;
pub mod middleware;
pub mod response;
pub mod routes;

pub use app::{create_app, AppState};
