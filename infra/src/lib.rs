//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the DeveloperStore
//! backend. It provides concrete implementations of the collaborators the
//! core services depend on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Store**: an in-memory, transactional implementation of every
//!   repository plus the unit of work, handed out one session per request
//! - **Auth**: HS256 JWT issuing for authenticated users

use ds_core::errors::{DomainError, TokenError};

/// Auth module - JWT token issuing
pub mod auth;

/// Store module - In-memory tables, sessions and commits
pub mod store;

pub use auth::{Claims, JwtTokenIssuer};
pub use store::{InMemoryDatabase, InMemorySession};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// A staged update targets a row that no longer exists
    #[error("Record not found: {table} #{id}")]
    MissingRecord { table: &'static str, id: i32 },

    /// A staged insert collides with a committed row on a unique key
    #[error("Conflict in {table}: {key} already taken")]
    Conflict { table: &'static str, key: String },

    /// JWT encoding or decoding error
    #[error("Token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Jwt(err) => DomainError::Token(TokenError::GenerationFailed {
                reason: err.to_string(),
            }),
            InfrastructureError::Config(message) => DomainError::Internal { message },
            other => DomainError::Storage {
                message: other.to_string(),
            },
        }
    }
}
