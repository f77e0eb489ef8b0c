use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::{info, warn};

use ds_api::config::Config;
use ds_api::{create_app, AppState};
use ds_infra::{InMemoryDatabase, JwtTokenIssuer};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::load().context("failed to load configuration")?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting DeveloperStore API Server ({})", config.environment);
    for warning in Config::warnings(&config) {
        warn!("{}", warning);
    }

    let token_issuer = JwtTokenIssuer::new(config.jwt.clone()).context("invalid JWT configuration")?;
    let state = web::Data::new(AppState::new(InMemoryDatabase::new(), token_issuer));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
