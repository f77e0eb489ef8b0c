//! Type definitions module
//!
//! - `ordering` - Dynamic multi-key ordering of in-memory collections
//! - `pagination` - Page requests and the pagination policy
//! - `response` - Result envelopes returned by every service operation

pub mod ordering;
pub mod pagination;
pub mod response;

pub use ordering::{apply_order, parse_order, SortClause, SortKey, SortOrder, Sortable};
pub use pagination::{paginate, total_pages, Page, PageRequest, PaginationError};
pub use response::{ApiResponse, ErrorDetail, HealthResponse, PaginatedResponse};
