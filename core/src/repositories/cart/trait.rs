//! Cart repository trait.

use async_trait::async_trait;

use crate::domain::entities::cart::Cart;
use crate::errors::DomainError;

/// Persistence operations for carts
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Stage a new cart and return it with its assigned identifier
    async fn create(&self, cart: Cart) -> Result<Cart, DomainError>;

    /// Stage the removal of a cart together with its items
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Cart>, DomainError>;

    /// The active cart of a user, if any
    async fn find_active_by_user(&self, user_id: i32) -> Result<Option<Cart>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Cart>, DomainError>;
}
