//! Business error catalog
//!
//! Every expected failure of a service operation is one of these variants.
//! They are returned inside envelopes, never as `Err`, and each converts to
//! an [`ErrorDetail`] carrying a stable code. The transport layer reads the
//! code to choose a status: `"404"` for missing records, anything else is a
//! bad request.

use ds_shared::ErrorDetail;
use thiserror::Error;

/// Code shared by every "record is missing" error
pub const NOT_FOUND_CODE: &str = "404";

/// Code shared by every "record already exists" error
pub const CONFLICT_CODE: &str = "400";

/// User-related business errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Users table is empty")]
    TableIsEmpty,

    #[error("User not found")]
    NotFound,

    #[error("User exists.")]
    Exists,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Product-related business errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("Products table is empty")]
    TableIsEmpty,

    #[error("Product not found")]
    NotFound,

    #[error("Product exists")]
    Exists,
}

/// Cart-related business errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Carts table is empty")]
    TableIsEmpty,

    #[error("Cart not found")]
    NotFound,

    #[error("There is already an active cart for this user")]
    Exists,
}

/// Cart item business errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartItemError {
    #[error("Cart Items table is empty")]
    TableIsEmpty,

    #[error("Cart item not found")]
    NotFound,

    #[error("Cart item is already included")]
    Exists,
}

/// Token issuing failures
///
/// These are faults, not business outcomes: they travel as `Err` inside
/// [`DomainError`](super::DomainError).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("Invalid signing key")]
    InvalidKey,
}

impl UserError {
    pub fn code(&self) -> &'static str {
        match self {
            UserError::TableIsEmpty | UserError::NotFound => NOT_FOUND_CODE,
            UserError::Exists | UserError::InvalidCredentials => CONFLICT_CODE,
        }
    }
}

impl ProductError {
    pub fn code(&self) -> &'static str {
        match self {
            ProductError::TableIsEmpty | ProductError::NotFound => NOT_FOUND_CODE,
            ProductError::Exists => CONFLICT_CODE,
        }
    }
}

impl CartError {
    pub fn code(&self) -> &'static str {
        match self {
            CartError::TableIsEmpty | CartError::NotFound => NOT_FOUND_CODE,
            CartError::Exists => CONFLICT_CODE,
        }
    }
}

impl CartItemError {
    pub fn code(&self) -> &'static str {
        match self {
            CartItemError::TableIsEmpty | CartItemError::NotFound => NOT_FOUND_CODE,
            CartItemError::Exists => CONFLICT_CODE,
        }
    }
}

impl From<UserError> for ErrorDetail {
    fn from(error: UserError) -> Self {
        ErrorDetail::new(error.code(), error.to_string())
    }
}

impl From<ProductError> for ErrorDetail {
    fn from(error: ProductError) -> Self {
        ErrorDetail::new(error.code(), error.to_string())
    }
}

impl From<CartError> for ErrorDetail {
    fn from(error: CartError) -> Self {
        ErrorDetail::new(error.code(), error.to_string())
    }
}

impl From<CartItemError> for ErrorDetail {
    fn from(error: CartItemError) -> Self {
        ErrorDetail::new(error.code(), error.to_string())
    }
}
