//! User management service module

mod service;
mod types;


pub use service::UserService;
pub use types::{CreateUserCommand, UpdateUserCommand, UserResponse};
