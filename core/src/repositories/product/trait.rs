//! Product repository trait.

use async_trait::async_trait;

use crate::domain::entities::product::Product;
use crate::errors::DomainError;

/// Persistence operations for catalog products
///
/// Same staging contract as [`UserRepository`](crate::repositories::UserRepository):
/// writes become visible after the session's unit of work commits.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stage a new product and return it with its assigned identifier
    async fn create(&self, product: Product) -> Result<Product, DomainError>;

    /// Stage a full replacement of an existing product
    async fn update(&self, product: Product) -> Result<Product, DomainError>;

    /// Stage a removal; `Ok(false)` when the product does not exist
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError>;

    /// Find a product by exact title
    async fn find_by_title(&self, title: &str) -> Result<Option<Product>, DomainError>;

    /// Every product whose category matches, ignoring case
    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;
}
