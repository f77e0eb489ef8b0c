//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses Result types for fault handling. A
//! missing record is not a fault: lookups return `Ok(None)`.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Writes (`create`, `update`, `delete`) only stage a change. The change is
/// persisted, and becomes visible to lookups, when the unit of work of the
/// same session commits.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use ds_core::repositories::UserRepository;
/// use ds_core::domain::entities::user::User;
/// use ds_core::errors::DomainError;
///
/// struct SqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for SqlUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn create(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn update(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn delete(&self, id: i32) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn find_by_credentials(&self, user_name: &str, password: &str) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn find_all(&self) -> Result<Vec<User>, DomainError> { Ok(vec![]) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stage a new user
    ///
    /// # Arguments
    /// * `user` - The user to persist; its `id` is ignored
    ///
    /// # Returns
    /// * `Ok(User)` - The staged user with its assigned identifier
    /// * `Err(DomainError)` - Storage failure
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Stage a replacement of every field of an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The staged user
    /// * `Err(DomainError)` - Storage failure
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Stage the removal of a user
    ///
    /// # Returns
    /// * `Ok(true)` - A removal was staged
    /// * `Ok(false)` - No user with this identifier
    /// * `Err(DomainError)` - Storage failure
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;

    /// Find a user by identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with given ID
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;

    /// Find a user by exact email
    ///
    /// # Example
    /// ```no_run
    /// # use ds_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// if repo.find_by_email("john@store.com").await?.is_some() {
    ///     println!("email already registered");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find the user owning a user name and password pair
    async fn find_by_credentials(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Load every user in storage order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
}
