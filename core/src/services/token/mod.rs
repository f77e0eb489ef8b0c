//! Token issuing collaborator
//!
//! The authentication service only needs a signed token for a user; how it
//! is signed lives in the infrastructure layer.

mod issuer;

pub use issuer::TokenIssuer;

#[cfg(test)]
pub use issuer::MockTokenIssuer;
