//! User command and query handlers

use std::sync::Arc;

use ds_shared::{ApiResponse, PageRequest, PaginatedResponse};
use tracing::{debug, info};

use crate::errors::{DomainResult, UserError};
use crate::repositories::{UnitOfWork, UserRepository};
use crate::services::listing::list_page;
use crate::services::validation::validate;

use super::types::{CreateUserCommand, UpdateUserCommand, UserResponse};

/// Service handling user registration, maintenance and listing
pub struct UserService<U, W>
where
    U: UserRepository,
    W: UnitOfWork,
{
    /// User repository for storage operations
    users: Arc<U>,
    /// Commits staged changes
    unit_of_work: Arc<W>,
}

impl<U, W> UserService<U, W>
where
    U: UserRepository,
    W: UnitOfWork,
{
    /// Create a new user service
    ///
    /// # Arguments
    ///
    /// * `users` - Repository for user persistence
    /// * `unit_of_work` - Unit of work committing the staged changes
    pub fn new(users: Arc<U>, unit_of_work: Arc<W>) -> Self {
        Self { users, unit_of_work }
    }

    /// Register a new user
    ///
    /// This method:
    /// 1. Validates the command
    /// 2. Rejects an email that is already registered
    /// 3. Stages the user and commits
    ///
    /// # Returns
    ///
    /// * `Ok(ApiResponse)` - The created user, or the validation / conflict errors
    /// * `Err(DomainError)` - Storage failure
    pub async fn create(&self, command: CreateUserCommand) -> DomainResult<ApiResponse<UserResponse>> {
        if let Err(errors) = validate(&command) {
            debug!(count = errors.len(), "create user rejected by validation");
            return Ok(ApiResponse::failure(errors));
        }

        if self.users.find_by_email(&command.email).await?.is_some() {
            info!(email = %command.email, "user already exists");
            return Ok(ApiResponse::fail(UserError::Exists));
        }

        let user = self.users.create(command.into_user()).await?;
        self.unit_of_work.commit().await?;

        info!(user_id = user.id, "user created");
        Ok(ApiResponse::success(UserResponse::from(user)))
    }

    /// Replace every field of an existing user
    pub async fn update(&self, command: UpdateUserCommand) -> DomainResult<ApiResponse<UserResponse>> {
        if let Err(errors) = validate(&command) {
            return Ok(ApiResponse::failure(errors));
        }

        let mut user = match self.users.find_by_id(command.id).await? {
            Some(user) => user,
            None => return Ok(ApiResponse::fail(UserError::NotFound)),
        };

        command.apply_to(&mut user);
        let user = self.users.update(user).await?;
        self.unit_of_work.commit().await?;

        info!(user_id = user.id, "user updated");
        Ok(ApiResponse::success(UserResponse::from(user)))
    }

    /// Delete a user and return its last state
    pub async fn delete(&self, id: i32) -> DomainResult<ApiResponse<UserResponse>> {
        let user = match self.users.find_by_id(id).await? {
            Some(user) => user,
            None => return Ok(ApiResponse::fail(UserError::NotFound)),
        };

        self.users.delete(id).await?;
        self.unit_of_work.commit().await?;

        info!(user_id = id, "user deleted");
        Ok(ApiResponse::success(UserResponse::from(user)))
    }

    pub async fn get_by_id(&self, id: i32) -> DomainResult<ApiResponse<UserResponse>> {
        Ok(match self.users.find_by_id(id).await? {
            Some(user) => ApiResponse::success(UserResponse::from(user)),
            None => ApiResponse::fail(UserError::NotFound),
        })
    }

    /// One page of users
    ///
    /// Sortable by `email`, `username`, `password`, `name`, `address`,
    /// `phone`, `status`, `role` and `id`.
    pub async fn list(&self, request: &PageRequest) -> DomainResult<PaginatedResponse<Vec<UserResponse>>> {
        let users = self.users.find_all().await?;
        Ok(list_page(users, request, UserError::TableIsEmpty, UserResponse::from))
    }
}
