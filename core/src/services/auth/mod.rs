//! Authentication service module

mod service;
mod types;


pub use service::AuthService;
pub use types::AuthCommand;
