//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types and utilities
pub use types::{
    CartError, CartItemError, ProductError, TokenError, UserError, CONFLICT_CODE, NOT_FOUND_CODE,
};

use thiserror::Error;

/// Faults that abort an operation
///
/// Business outcomes never use this type; they are returned inside
/// envelopes. A `DomainError` means the request could not be processed at
/// all and is surfaced by the transport as an internal error.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
