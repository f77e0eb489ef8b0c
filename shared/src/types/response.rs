//! Response envelopes returned by every service operation
//!
//! `ApiResponse<T>` is the success/failure wrapper used by commands and
//! single-item queries. `PaginatedResponse<T>` adds the paging metadata
//! produced by list queries. Both are immutable once built: the only way to
//! obtain one is through the `success`/`failure` constructors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Code carried by the fallback error of a failure built without errors
pub const DEFAULT_ERROR_CODE: &str = "DefaultError";

/// Message carried by the fallback error of a failure built without errors
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred while processing the request";

/// A coded error entry carried by a failed envelope
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable code used by clients and the transport layer
    pub code: String,

    /// Human-readable message
    pub message: String,
}

impl ErrorDetail {
    /// Create a new error entry
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The distinguished "no error" value
    pub fn none() -> Self {
        Self::new(String::new(), String::new())
    }

    /// Generic error used when a failure is built without explicit errors
    pub fn default_error() -> Self {
        Self::new(DEFAULT_ERROR_CODE, DEFAULT_ERROR_MESSAGE)
    }

    /// Whether this is the "no error" value
    pub fn is_none(&self) -> bool {
        self.code.is_empty() && self.message.is_empty()
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

fn normalize_errors(errors: Vec<ErrorDetail>) -> Vec<ErrorDetail> {
    if errors.is_empty() {
        vec![ErrorDetail::default_error()]
    } else {
        errors
    }
}

/// Success/failure envelope with a typed payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    is_success: bool,
    value: Option<T>,
    errors: Vec<ErrorDetail>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying `value`
    pub fn success(value: T) -> Self {
        Self {
            is_success: true,
            value: Some(value),
            errors: Vec::new(),
        }
    }

    /// Create a failed response
    ///
    /// An empty `errors` list is replaced by the default error, so a failure
    /// never surfaces without at least one error.
    pub fn failure(errors: Vec<ErrorDetail>) -> Self {
        Self {
            is_success: false,
            value: None,
            errors: normalize_errors(errors),
        }
    }

    /// Create a failed response from a single error
    pub fn fail(error: impl Into<ErrorDetail>) -> Self {
        Self::failure(vec![error.into()])
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success
    }

    /// The payload, present only on success
    pub fn value(&self) -> Option<&T> {
        if self.is_success {
            self.value.as_ref()
        } else {
            None
        }
    }

    /// Consume the response and return the payload, if successful
    pub fn into_value(self) -> Option<T> {
        if self.is_success {
            self.value
        } else {
            None
        }
    }

    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    /// First error of a failure, used by the transport layer to pick a status
    pub fn first_error(&self) -> Option<&ErrorDetail> {
        self.errors.first()
    }

    /// Map the payload to a different type, keeping the outcome
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            is_success: self.is_success,
            value: self.value.map(f),
            errors: self.errors,
        }
    }
}

/// Envelope for one page of a list query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    is_success: bool,
    value: Option<T>,
    errors: Vec<ErrorDetail>,
    total_records: i64,
    page_number: Option<i64>,
    page_size: Option<i64>,
}

impl<T> PaginatedResponse<T> {
    /// Create a successful page
    pub fn success(value: T, total_records: i64, page_number: i64, page_size: i64) -> Self {
        Self {
            is_success: true,
            value: Some(value),
            errors: Vec::new(),
            total_records,
            page_number: Some(page_number),
            page_size: Some(page_size),
        }
    }

    /// Create a failed page; all paging fields are zeroed
    pub fn failure(errors: Vec<ErrorDetail>) -> Self {
        Self {
            is_success: false,
            value: None,
            errors: normalize_errors(errors),
            total_records: 0,
            page_number: Some(0),
            page_size: Some(0),
        }
    }

    /// Create a failed page from a single error
    pub fn fail(error: impl Into<ErrorDetail>) -> Self {
        Self::failure(vec![error.into()])
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success
    }

    pub fn value(&self) -> Option<&T> {
        if self.is_success {
            self.value.as_ref()
        } else {
            None
        }
    }

    pub fn into_value(self) -> Option<T> {
        if self.is_success {
            self.value
        } else {
            None
        }
    }

    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&ErrorDetail> {
        self.errors.first()
    }

    /// Total number of records before slicing
    pub fn total_records(&self) -> i64 {
        self.total_records
    }

    pub fn page_number(&self) -> Option<i64> {
        self.page_number
    }

    /// Effective page size used to slice the collection
    pub fn page_size(&self) -> Option<i64> {
        self.page_size
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: String::from("healthy"),
            service: service.into(),
            version: version.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}
