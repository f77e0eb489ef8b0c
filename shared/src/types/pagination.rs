//! Pagination policy for list endpoints
//!
//! List queries load the whole collection, order it, and then hand it to
//! [`paginate`], which slices out the requested page or reports why the
//! request cannot be served.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::response::ErrorDetail;

/// Query parameters accepted by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Requested page (1-based)
    #[serde(default)]
    pub page: Option<i64>,

    /// Number of items per page; absent means one page with everything
    #[serde(default)]
    pub page_size: Option<i64>,

    /// Raw order string, e.g. `"price desc, title"`
    #[serde(default)]
    pub order: Option<String>,
}

impl PageRequest {
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page,
            page_size,
            order: None,
        }
    }

    /// Attach an order string
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn order(&self) -> Option<&str> {
        self.order.as_deref()
    }
}

/// Reasons a page request is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Page must be greater than 0")]
    InvalidPage,

    #[error("PageSize must be greater than 0")]
    InvalidPageSize,

    #[error("Page {page} exceeds the total number of pages ({total_pages})")]
    PageExceedsLimit { page: i64, total_pages: i64 },
}

impl PaginationError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            PaginationError::InvalidPage => "Pagination.InvalidPage",
            PaginationError::InvalidPageSize => "Pagination.InvalidPageSize",
            PaginationError::PageExceedsLimit { .. } => "Pagination.PageExceedsLimit",
        }
    }
}

impl From<PaginationError> for ErrorDetail {
    fn from(err: PaginationError) -> Self {
        ErrorDetail::new(err.code(), err.to_string())
    }
}

/// One slice of a collection together with the figures reported to clients
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Length of the collection before slicing
    pub total_records: i64,

    /// Page that was served
    pub page_number: i64,

    /// Effective page size used for slicing
    pub page_size: i64,

    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Transform the items, keeping the paging figures
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_records: self.total_records,
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

/// Number of pages needed for `total` items; zero when the size is not positive
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 0;
    }
    total / page_size + i64::from(total % page_size != 0)
}

/// Apply the pagination policy to an already ordered collection
///
/// Bounds are only validated when both `page` and `page_size` were supplied;
/// the first failing check wins (page, then page size, then upper bound).
pub fn paginate<T>(items: Vec<T>, request: &PageRequest) -> Result<Page<T>, PaginationError> {
    let total_records = items.len() as i64;
    let page_number = request.page.unwrap_or(1);
    let page_size = request.page_size.unwrap_or(total_records);
    let total_pages = total_pages(total_records, page_size);

    if request.page.is_some() && request.page_size.is_some() {
        if page_number <= 0 {
            return Err(PaginationError::InvalidPage);
        }
        if page_size <= 0 {
            return Err(PaginationError::InvalidPageSize);
        }
        if page_number > total_pages {
            return Err(PaginationError::PageExceedsLimit {
                page: page_number,
                total_pages,
            });
        }
    }

    let skip = page_number.saturating_sub(1).saturating_mul(page_size).max(0) as usize;
    let take = page_size.max(0) as usize;

    Ok(Page {
        items: items.into_iter().skip(skip).take(take).collect(),
        total_records,
        page_number,
        page_size,
        total_pages,
    })
}
