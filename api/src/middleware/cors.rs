//! CORS middleware configuration for cross-origin requests.
//!
//! Development configurations allow any origin. Everywhere else only the
//! origins listed in [`CorsConfig::allowed_origins`] are accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ds_shared::config::CorsConfig;

use super::request_id::REQUEST_ID_HEADER;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    if config.allow_any_origin {
        create_permissive_cors(config.max_age)
    } else {
        create_restricted_cors(config)
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ]
}

fn create_permissive_cors(max_age: usize) -> Cors {
    log::info!("Configuring permissive CORS");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allow_any_header()
        .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(max_age)
}

fn create_restricted_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for {} allowed origin(s)", config.allowed_origins.len());

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(config.max_age);

    for origin in config.allowed_origins.iter().map(|s| s.trim()) {
        if !origin.is_empty() {
            log::debug!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
