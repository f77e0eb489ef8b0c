//! User entity representing a registered customer or staff member.

use ds_shared::{SortKey, Sortable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::{Address, Name};

/// Account status of a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

/// Role of a user in the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    Customer,
    Manager,
    Admin,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Active => write!(f, "Active"),
            UserStatus::Inactive => write!(f, "Inactive"),
            UserStatus::Suspended => write!(f, "Suspended"),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Customer => write!(f, "Customer"),
            UserRole::Manager => write!(f, "Manager"),
            UserRole::Admin => write!(f, "Admin"),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier; zero until the user is staged
    pub id: i32,

    pub email: String,

    pub user_name: String,

    /// Stored as submitted
    pub password: String,

    pub name: Name,

    pub address: Address,

    pub phone: String,

    pub status: UserStatus,

    pub role: UserRole,
}

impl User {
    /// Creates a new, not yet persisted, user
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        email: String,
        user_name: String,
        password: String,
        name: Name,
        address: Address,
        phone: String,
        status: UserStatus,
        role: UserRole,
    ) -> Self {
        Self {
            id: 0,
            email,
            user_name,
            password,
            name,
            address,
            phone,
            status,
            role,
        }
    }

    /// Checks whether the given credentials belong to this user
    pub fn has_credentials(&self, user_name: &str, password: &str) -> bool {
        self.user_name == user_name && self.password == password
    }
}

impl Sortable for User {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "id" => SortKey::from(self.id),
            "email" => SortKey::from(self.email.as_str()),
            "username" => SortKey::from(self.user_name.as_str()),
            "password" => SortKey::from(self.password.as_str()),
            "name" => SortKey::from(self.name.first_name.as_str()),
            "address" => SortKey::from(self.address.street.as_str()),
            "phone" => SortKey::from(self.phone.as_str()),
            "status" => SortKey::from(self.status as i32),
            "role" => SortKey::from(self.role as i32),
            _ => SortKey::Null,
        }
    }
}
