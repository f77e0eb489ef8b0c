//! Product catalog service module

mod service;
mod types;


pub use service::ProductService;
pub use types::{ProductCommand, ProductResponse};
