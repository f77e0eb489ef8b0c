//! Product catalog endpoints

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

use ds_core::repositories::SessionFactory;
use ds_core::services::{ProductCommand, TokenIssuer};
use ds_shared::types::PageRequest;

use crate::app::AppState;
use crate::middleware::RequestIdExt;
use crate::response::respond;

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
    log::info!("[{}] Listing products: {:?}", request_id, query);

    let result = state.products().list(&query).await;
    respond(&request_id, result, StatusCode::OK)
}

/// GET /api/v1/products/categories
pub async fn categories<F, T>(req: HttpRequest, state: web::Data<AppState<F, T>>) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    log::info!("[{}] Listing product categories", request_id);

    let result = state.products().categories().await;
    respond(&request_id, result, StatusCode::OK)
}

/// GET /api/v1/products/category/{category}
pub async fn by_category<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    category: web::Path<String>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    log::info!("[{}] Listing products in category {}", request_id, category);

    let result = state.products().by_category(&category).await;
    respond(&request_id, result, StatusCode::OK)
}

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
    log::info!("[{}] Fetching product {}", request_id, id);

    let result = state.products().get_by_id(id).await;
    respond(&request_id, result, StatusCode::OK)
}

/// POST /api/v1/products, 201 on success
pub async fn create<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    command: web::Json<ProductCommand>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    log::info!("[{}] Creating product {}", request_id, command.title);

    let result = state.products().create(command.into_inner()).await;
    respond(&request_id, result, StatusCode::CREATED)
}

pub async fn update<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    id: web::Path<i32>,
    command: web::Json<ProductCommand>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    let id = id.into_inner();
    log::info!("[{}] Updating product {}", request_id, id);

    let result = state.products().update(id, command.into_inner()).await;
    respond(&request_id, result, StatusCode::OK)
}

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
    log::info!("[{}] Deleting product {}", request_id, id);

    let result = state.products().delete(id).await;
    respond(&request_id, result, StatusCode::OK)
}
