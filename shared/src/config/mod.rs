//! Configuration module
//!
//! - `auth` - JWT signing configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::JwtConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,

    pub server: ServerConfig,

    pub jwt: JwtConfig,

    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self {
                environment,
                server: ServerConfig::default(),
                jwt: JwtConfig::default(),
                cors: CorsConfig::development(),
                logging: LoggingConfig::for_environment(environment),
            },
            Environment::Staging | Environment::Production => Self {
                environment,
                server: ServerConfig::new("0.0.0.0", 8080),
                jwt: JwtConfig::default(),
                cors: CorsConfig::default(),
                logging: LoggingConfig::for_environment(environment),
            },
        }
    }
}
