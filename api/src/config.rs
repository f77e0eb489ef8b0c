//! Application configuration loading
//!
//! Sources are layered, later ones winning:
//! 1. built-in defaults for the detected environment
//! 2. the optional TOML file named after the environment (`config.development.toml`, ...)
//! 3. `APP_` environment variables, `__` separating nested keys (`APP_SERVER__PORT=9000`)

use ::config::{ConfigError, File, FileFormat};
use ds_shared::config::{AppConfig, Environment};

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "APP";

/// Configuration loader
pub struct Config;

impl Config {
    /// Load the configuration for the environment named by `ENVIRONMENT`
    pub fn load() -> Result<AppConfig, ConfigError> {
        Self::load_for(Environment::from_env())
    }

    /// Load the configuration for `environment`
    pub fn load_for(environment: Environment) -> Result<AppConfig, ConfigError> {
        Self::load_from(environment, environment.config_file())
    }

    /// Load using an explicit configuration file path
    pub fn load_from(environment: Environment, path: &str) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::for_environment(environment);

        ::config::Config::builder()
            .add_source(::config::Config::try_from(&defaults)?)
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Problems worth a startup warning
    pub fn warnings(config: &AppConfig) -> Vec<String> {
        let mut warnings = Vec::new();
        if !config.environment.is_development() && config.jwt.is_using_default_secret() {
            warnings.push(format!(
                "JWT secret is the built-in default in {}; set APP_JWT__SECRET",
                config.environment
            ));
        }
        if config.environment.is_production() && config.cors.allow_any_origin {
            warnings.push(String::from("CORS allows any origin in production"));
        }
        warnings
    }
}
