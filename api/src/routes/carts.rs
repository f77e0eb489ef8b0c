//! Cart endpoints

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

use ds_core::repositories::SessionFactory;
use ds_core::services::{CartItemRequest, CreateCartCommand, TokenIssuer};
use ds_shared::types::PageRequest;

use crate::app::AppState;
use crate::middleware::RequestIdExt;
use crate::response::respond;

/// GET /api/v1/carts?page&pageSize&order
///
/// Each cart carries its own items. Orders by `id`, `userId` or `createDate`.
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
    log::info!("[{}] Listing carts: {:?}", request_id, query);

    let result = state.carts().list(&query).await;
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
    log::info!("[{}] Fetching cart {}", request_id, id);

    let result = state.carts().get_by_id(id).await;
    respond(&request_id, result, StatusCode::OK)
}

/// POST /api/v1/carts
///
/// Opens the user's active cart with its first items. Responds 201.
pub async fn create<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    command: web::Json<CreateCartCommand>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    log::info!(
        "[{}] Creating cart for user {} with {} item(s)",
        request_id,
        command.user_id,
        command.cart_items.len()
    );

    let result = state.carts().create(command.into_inner()).await;
    respond(&request_id, result, StatusCode::CREATED)
}

/// PUT /api/v1/carts/{id}/cart-items
pub async fn add_item<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    id: web::Path<i32>,
    item: web::Json<CartItemRequest>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    let cart_id = id.into_inner();
    log::info!(
        "[{}] Adding product {} to cart {}",
        request_id,
        item.product_id,
        cart_id
    );

    let result = state.carts().add_item(cart_id, item.into_inner()).await;
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
    log::info!("[{}] Deleting cart {}", request_id, id);

    let result = state.carts().delete(id).await;
    respond(&request_id, result, StatusCode::OK)
}

/// DELETE /api/v1/carts/{id}/cart-items/{item_id}
pub async fn delete_item<F, T>(
    req: HttpRequest,
    state: web::Data<AppState<F, T>>,
    path: web::Path<(i32, i32)>,
) -> HttpResponse
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    let request_id = req.request_id();
    let (cart_id, item_id) = path.into_inner();
    log::info!("[{}] Removing item {} from cart {}", request_id, item_id, cart_id);

    let result = state.carts().delete_item(cart_id, item_id).await;
    respond(&request_id, result, StatusCode::OK)
}
