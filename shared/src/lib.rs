//! Shared utilities and common types for the DeveloperStore server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types
//! - Result envelopes and error entries
//! - Pagination policy and dynamic ordering
//! - Validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CorsConfig, Environment, JwtConfig, LoggingConfig, ServerConfig};
pub use types::{
    apply_order, paginate, ApiResponse, ErrorDetail, Page, PageRequest, PaginatedResponse,
    PaginationError, SortKey, Sortable,
};
pub use utils::validation;
