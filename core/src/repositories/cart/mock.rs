//! Mock implementation of CartRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::cart::Cart;
use crate::errors::DomainError;

use super::trait_::CartRepository;

/// Mock cart repository for testing
///
/// Deleting a cart does not touch items; tests that need the cascade use
/// the in-memory store from the infrastructure crate.
pub struct MockCartRepository {
    carts: Arc<RwLock<BTreeMap<i32, Cart>>>,
    next_id: AtomicI32,
    create_calls: AtomicUsize,
}

impl MockCartRepository {
    pub fn new() -> Self {
        Self {
            carts: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI32::new(1),
            create_calls: AtomicUsize::new(0),
        }
    }

    /// Seed a cart without counting it as a create call
    pub async fn insert(&self, mut cart: Cart) -> Cart {
        cart.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.carts.write().await.insert(cart.id, cart.clone());
        cart
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockCartRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartRepository for MockCartRepository {
    async fn create(&self, cart: Cart) -> Result<Cart, DomainError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.insert(cart).await)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.carts.write().await.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Cart>, DomainError> {
        Ok(self.carts.read().await.get(&id).cloned())
    }

    async fn find_active_by_user(&self, user_id: i32) -> Result<Option<Cart>, DomainError> {
        let carts = self.carts.read().await;
        Ok(carts
            .values()
            .find(|c| c.active && c.belongs_to(user_id))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Cart>, DomainError> {
        Ok(self.carts.read().await.values().cloned().collect())
    }
}
