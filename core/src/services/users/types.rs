//! User commands and response DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::user::{User, UserRole, UserStatus};
use crate::domain::value_objects::{Address, Name};

/// Register a new user
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserCommand {
    #[validate(
        custom(function = "crate::services::validation::not_blank", message = "Email must not be empty"),
        email(message = "Email is not a valid email address")
    )]
    pub email: String,

    #[validate(length(min = 8, max = 12, message = "User name must be between 8 and 12 characters"))]
    pub user_name: String,

    #[validate(length(min = 8, max = 12, message = "Password must be between 8 and 12 characters"))]
    pub password: String,

    #[validate(nested)]
    pub name: Name,

    #[validate(nested)]
    pub address: Address,

    #[validate(custom(function = "crate::services::validation::not_blank", message = "Phone must not be empty"))]
    pub phone: String,

    pub status: UserStatus,

    pub role: UserRole,
}

/// Replace every field of an existing user
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserCommand {
    #[validate(range(min = 1, message = "Id must not be empty"))]
    pub id: i32,

    #[validate(
        custom(function = "crate::services::validation::not_blank", message = "Email must not be empty"),
        email(message = "Email is not a valid email address")
    )]
    pub email: String,

    pub user_name: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(nested)]
    pub name: Name,

    #[validate(nested)]
    pub address: Address,

    #[validate(custom(function = "crate::services::validation::not_blank", message = "Phone must not be empty"))]
    pub phone: String,

    pub status: UserStatus,

    pub role: UserRole,
}

impl CreateUserCommand {
    pub fn into_user(self) -> User {
        User::new(
            self.email,
            self.user_name,
            self.password,
            self.name,
            self.address,
            self.phone,
            self.status,
            self.role,
        )
    }
}

impl UpdateUserCommand {
    /// Overwrite every field of `user` with this command's values
    pub fn apply_to(self, user: &mut User) {
        user.email = self.email;
        user.user_name = self.user_name;
        user.password = self.password;
        user.name = self.name;
        user.address = self.address;
        user.phone = self.phone;
        user.status = self.status;
        user.role = self.role;
    }
}

/// User as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub user_name: String,
    pub password: String,
    pub name: Name,
    pub address: Address,
    pub phone: String,
    pub status: UserStatus,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            user_name: user.user_name,
            password: user.password,
            name: user.name,
            address: user.address,
            phone: user.phone,
            status: user.status,
            role: user.role,
        }
    }
}
