//! Application state and factory
//!
//! This module holds the shared state handed to every handler and builds the
//! Actix-web application with its middleware and route table.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpResponse,
};

use ds_core::repositories::SessionFactory;
use ds_core::services::{AuthService, CartService, ProductService, TokenIssuer, UserService};
use ds_shared::config::CorsConfig;
use ds_shared::types::HealthResponse;

use crate::middleware::{create_cors, RequestIdMiddleware};
use crate::response::{json_error_handler, not_found, path_error_handler, query_error_handler};
use crate::routes::{auth, carts, products, users};

pub const SERVICE_NAME: &str = "developer-store-api";

/// Application state that holds shared services
///
/// Services are built per request around a fresh storage session, so the
/// staged changes of one request never leak into another.
pub struct AppState<F, T>
where
    F: SessionFactory,
    T: TokenIssuer,
{
    pub sessions: F,
    pub token_issuer: Arc<T>,
}

type Session<F> = <F as SessionFactory>::Session;

impl<F, T> AppState<F, T>
where
    F: SessionFactory,
    T: TokenIssuer,
{
    pub fn new(sessions: F, token_issuer: T) -> Self {
        Self {
            sessions,
            token_issuer: Arc::new(token_issuer),
        }
    }

    pub fn users(&self) -> UserService<Session<F>, Session<F>> {
        let session = Arc::new(self.sessions.begin());
        UserService::new(session.clone(), session)
    }

    pub fn products(&self) -> ProductService<Session<F>, Session<F>> {
        let session = Arc::new(self.sessions.begin());
        ProductService::new(session.clone(), session)
    }

    pub fn carts(&self) -> CartService<Session<F>, Session<F>, Session<F>, Session<F>, Session<F>> {
        let session = Arc::new(self.sessions.begin());
        CartService::new(
            session.clone(),
            session.clone(),
            session.clone(),
            session.clone(),
            session,
        )
    }

    pub fn auth(&self) -> AuthService<Session<F>, T> {
        let session = Arc::new(self.sessions.begin());
        AuthService::new(session, self.token_issuer.clone())
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<F, T>(
    app_state: web::Data<AppState<F, T>>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    F: SessionFactory,
    T: TokenIssuer + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Last wrapped runs first; the access log sees the echoed request id
        .wrap(RequestIdMiddleware)
        .wrap(create_cors(cors))
        .wrap(Logger::new(r#"%a "%r" %s %b %T [%{x-request-id}o]"#))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .route("/auth", web::post().to(auth::authenticate::<F, T>))
                .service(
                    web::scope("/users")
                        .route("", web::get().to(users::list::<F, T>))
                        .route("", web::post().to(users::create::<F, T>))
                        .route("/{id}", web::get().to(users::get_by_id::<F, T>))
                        .route("/{id}", web::put().to(users::update::<F, T>))
                        .route("/{id}", web::delete().to(users::delete::<F, T>)),
                )
                .service(
                    web::scope("/products")
                        .route("", web::get().to(products::list::<F, T>))
                        .route("", web::post().to(products::create::<F, T>))
                        .route("/categories", web::get().to(products::categories::<F, T>))
                        .route("/category/{category}", web::get().to(products::by_category::<F, T>))
                        .route("/{id}", web::get().to(products::get_by_id::<F, T>))
                        .route("/{id}", web::put().to(products::update::<F, T>))
                        .route("/{id}", web::delete().to(products::delete::<F, T>)),
                )
                .service(
                    web::scope("/carts")
                        .route("", web::get().to(carts::list::<F, T>))
                        .route("", web::post().to(carts::create::<F, T>))
                        .route("/{id}", web::get().to(carts::get_by_id::<F, T>))
                        .route("/{id}", web::delete().to(carts::delete::<F, T>))
                        .route("/{id}/cart-items", web::put().to(carts::add_item::<F, T>))
                        .route(
                            "/{id}/cart-items/{item_id}",
                            web::delete().to(carts::delete_item::<F, T>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}
