//! Authentication service implementation

use std::sync::Arc;

use ds_shared::ApiResponse;
use tracing::{info, warn};

use crate::domain::value_objects::AuthResponse;
use crate::errors::{DomainResult, UserError};
use crate::repositories::UserRepository;
use crate::services::token::TokenIssuer;
use crate::services::validation::validate;

use super::types::AuthCommand;

/// Exchanges user credentials for a signed token
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenIssuer,
{
    /// User repository for credential lookups
    users: Arc<U>,
    /// Signs tokens for authenticated users
    token_issuer: Arc<T>,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenIssuer,
{
    pub fn new(users: Arc<U>, token_issuer: Arc<T>) -> Self {
        Self {
            users,
            token_issuer,
        }
    }

    /// Authenticate a user by user name and password
    ///
    /// # Returns
    ///
    /// * `Ok(ApiResponse)` - The token, or validation errors, or
    ///   `UserError::InvalidCredentials`
    /// * `Err(DomainError)` - Storage or signing failure
    pub async fn authenticate(&self, command: AuthCommand) -> DomainResult<ApiResponse<AuthResponse>> {
        if let Err(errors) = validate(&command) {
            return Ok(ApiResponse::failure(errors));
        }

        let user = match self
            .users
            .find_by_credentials(&command.user_name, &command.password)
            .await?
        {
            Some(user) => user,
            None => {
                warn!(user_name = %command.user_name, "authentication failed");
                return Ok(ApiResponse::fail(UserError::InvalidCredentials));
            }
        };

        let token = self.token_issuer.generate(&user).await?;

        info!(user_id = user.id, "user authenticated");
        Ok(ApiResponse::success(AuthResponse::new(token)))
    }
}
