//! Cart item repository trait.

use async_trait::async_trait;

use crate::domain::entities::cart_item::CartItem;
use crate::errors::DomainError;

/// Persistence operations for cart items
#[async_trait]
pub trait CartItemRepository: Send + Sync {
    /// Stage a new item and return it with its assigned identifier
    async fn create(&self, item: CartItem) -> Result<CartItem, DomainError>;

    async fn delete(&self, id: i32) -> Result<bool, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<CartItem>, DomainError>;

    /// The item of `cart_id` referencing `product_id`, if any
    async fn find_by_cart_and_product(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, DomainError>;

    /// Items of one cart in storage order
    async fn find_by_cart(&self, cart_id: i32) -> Result<Vec<CartItem>, DomainError>;

    async fn find_all(&self) -> Result<Vec<CartItem>, DomainError>;
}
