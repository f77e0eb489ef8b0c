//! Value objects representing immutable domain concepts.

pub mod address;
pub mod auth_response;
pub mod money;
pub mod name;
pub mod rating;

// Re-export commonly used types
pub use address::Address;
pub use auth_response::AuthResponse;
pub use money::Money;
pub use name::Name;
pub use rating::Rating;
