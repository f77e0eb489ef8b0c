//! Business services containing domain logic and use cases.
//!
//! Each service is one family of command/query handlers. Handlers validate
//! their input, talk to the repositories, commit through the unit of work
//! and wrap the outcome in an envelope. Only faults are returned as `Err`.

pub mod auth;
pub mod carts;
pub mod listing;
pub mod products;
pub mod token;
pub mod users;
pub mod validation;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types
pub use auth::{AuthCommand, AuthService};
pub use carts::{CartItemRequest, CartItemResponse, CartResponse, CartService, CreateCartCommand};
pub use products::{ProductCommand, ProductResponse, ProductService};
pub use token::TokenIssuer;
pub use users::{CreateUserCommand, UpdateUserCommand, UserResponse, UserService};
