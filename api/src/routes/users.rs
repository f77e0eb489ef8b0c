//! User endpoints

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

use ds_core::repositories::SessionFactory;
use ds_core::services::{CreateUserCommand, TokenIssuer, UpdateUserCommand};
use ds_shared::types::PageRequest;

use crate::app::AppState;
use crate::middleware::RequestIdExt;
use crate::response::respond;

/// GET /api/v1/users?page&pageSize&order
pub async fn list<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    query: web::Query<PageRequest>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    log::info!("[{}] Listing users: {:?}", request_id, query);

    let result = state.users().list(&query).await;
    respond(&request_id, result, StatusCode::OK)
}

/// GET /api/v1/users/{id}
pub async fn get_by_id<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    id: web::Path<i32>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    let id = id.into_inner();
    log::info!("[{}] Fetching user {}", request_id, id);

    let result = state.users().get_by_id(id).await;
    respond(&request_id, result, StatusCode::OK)
}

/// POST /api/v1/users
///
/// Responds 201 with the created user.
pub async fn create<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    command: web::Json<CreateUserCommand>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    log::info!("[{}] Creating user {}", request_id, command.email);

    let result = state.users().create(command.into_inner()).await;
    respond(&request_id, result, StatusCode::CREATED)
}

/// PUT /api/v1/users/{id}
///
/// The identifier in the path wins over the one in the body.
pub async fn update<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    id: web::Path<i32>,
    command: web::Json<UpdateUserCommand>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    let mut command = command.into_inner();
    command.id = id.into_inner();
    log::info!("[{}] Updating user {}", request_id, command.id);

    let result = state.users().update(command).await;
    respond(&request_id, result, StatusCode::OK)
}

/// DELETE /api/v1/users/{id}
pub async fn delete<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    id: web::Path<i32>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    let id = id.into_inner();
    log::info!("[{}] Deleting user {}", request_id, id);

    let result = state.users().delete(id).await;
    respond(&request_id, result, StatusCode::OK)
}
