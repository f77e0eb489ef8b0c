//! Authentication command

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials submitted to obtain a token
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthCommand {
    #[validate(custom(function = "crate::services::validation::not_blank", message = "User name must not be empty"))]
    pub user_name: String,

    #[validate(custom(function = "crate::services::validation::not_blank", message = "Password must not be empty"))]
    pub password: String,
}

impl AuthCommand {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}
