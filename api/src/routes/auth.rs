//! Authentication endpoint

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

use ds_core::repositories::SessionFactory;
use ds_core::services::{AuthCommand, TokenIssuer};

use crate::app::AppState;
use crate::middleware::RequestIdExt;
use crate::response::respond;

/// Handler for POST /api/v1/auth
///
/// Exchanges a user name and password for a signed token.
///
/// # Request Body
///
/// ```json
/// { "userName": "johndoe1", "password": "secret123" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "isSuccess": true, "value": { "token": "eyJ..." }, "errors": [] }
/// ```
///
/// ## Errors
/// - 400: blank fields or unknown credentials
pub async fn authenticate<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    command: web::Json<AuthCommand>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    log::info!("[{}] Authenticating user {}", request_id, command.user_name);

    let result = state.auth().authenticate(command.into_inner()).await;
    respond(&request_id, result, StatusCode::OK)
}
