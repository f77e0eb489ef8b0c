//! Cart service module

mod service;
mod types;


pub use service::CartService;
pub use types::{CartItemRequest, CartItemResponse, CartResponse, CreateCartCommand};
