//! Envelope to HTTP response mapping
//!
//! Successful envelopes use the status chosen by the route. Failed envelopes
//! map to 404 when their first error carries the not-found code and to 400
//! otherwise. Faults become a 500 with a generic envelope.

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use serde::Serialize;

use ds_core::errors::{DomainError, DomainResult, NOT_FOUND_CODE};
use ds_shared::types::{ApiResponse, ErrorDetail, PaginatedResponse};

use crate::middleware::RequestIdExt;

pub const INTERNAL_ERROR_CODE: &str = "InternalServerError";
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";
pub const INVALID_REQUEST_CODE: &str = "InvalidRequest";

/// Outcome shared by both envelope types
pub trait Envelope: Serialize {
    fn succeeded(&self) -> bool;

    fn error_list(&self) -> &[ErrorDetail];
}

impl<T: Serialize> Envelope for ApiResponse<T> {
    fn succeeded(&self) -> bool {
        self.is_success()
    }

    fn error_list(&self) -> &[ErrorDetail] {
        self.errors()
    }
}

impl<T: Serialize> Envelope for PaginatedResponse<T> {
    fn succeeded(&self) -> bool {
        self.is_success()
    }

    fn error_list(&self) -> &[ErrorDetail] {
        self.errors()
    }
}

/// Status of a failed envelope
pub fn failure_status(errors: &[ErrorDetail]) -> StatusCode {
    match errors.first() {
        Some(error) if error.code == NOT_FOUND_CODE => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// Turn a service result into an HTTP response
///
/// # Arguments
/// * `request_id` - Correlation id used in log lines
/// * `result` - What the service returned
/// * `success` - Status used when the envelope reports success
pub fn respond<E: Envelope>(request_id: &str, result: DomainResult<E>, success: StatusCode) -> HttpResponse {
    match result {
        Ok(envelope) if envelope.succeeded() => HttpResponse::build(success).json(envelope),
        Ok(envelope) => {
            let status = failure_status(envelope.error_list());
            if let Some(error) = envelope.error_list().first() {
                log::info!("[{}] Request rejected ({}): {}", request_id, status.as_u16(), error);
            }
            HttpResponse::build(status).json(envelope)
        }
        Err(error) => internal_error(request_id, &error),
    }
}

/// 500 response for a fault; the fault itself is only logged
pub fn internal_error(request_id: &str, error: &DomainError) -> HttpResponse {
    log::error!("[{}] Request failed: {}", request_id, error);
    HttpResponse::InternalServerError().json(ApiResponse::<()>::fail(ErrorDetail::new(
        INTERNAL_ERROR_CODE,
        INTERNAL_ERROR_MESSAGE,
    )))
}

fn invalid_request(req: &HttpRequest, message: String) -> HttpResponse {
    log::info!("[{}] Invalid request: {}", req.request_id(), message);
    HttpResponse::BadRequest().json(ApiResponse::<()>::fail(ErrorDetail::new(
        INVALID_REQUEST_CODE,
        message,
    )))
}

/// Error handler for malformed JSON bodies
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response = invalid_request(req, err.to_string());
    InternalError::from_response(err, response).into()
}

/// Error handler for malformed query strings
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response = invalid_request(req, err.to_string());
    InternalError::from_response(err, response).into()
}

/// Error handler for path segments that do not parse
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let response = invalid_request(req, err.to_string());
    InternalError::from_response(err, response).into()
}

/// Default handler for unknown routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::debug!("[{}] No route for {} {}", req.request_id(), req.method(), req.path());
    HttpResponse::NotFound().json(ApiResponse::<()>::fail(ErrorDetail::new(
        NOT_FOUND_CODE,
        "The requested resource was not found",
    )))
}
