//! Mock implementation of CartItemRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::cart_item::CartItem;
use crate::errors::DomainError;

use super::trait_::CartItemRepository;

/// Mock cart item repository for testing
pub struct MockCartItemRepository {
    items: Arc<RwLock<BTreeMap<i32, CartItem>>>,
    next_id: AtomicI32,
    create_calls: AtomicUsize,
}

impl MockCartItemRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI32::new(1),
            create_calls: AtomicUsize::new(0),
        }
    }

    /// Seed an item without counting it as a create call
    pub async fn insert(&self, mut item: CartItem) -> CartItem {
        item.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.items.write().await.insert(item.id, item.clone());
        item
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockCartItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartItemRepository for MockCartItemRepository {
    async fn create(&self, item: CartItem) -> Result<CartItem, DomainError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.insert(item).await)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.items.write().await.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CartItem>, DomainError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn find_by_cart_and_product(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, DomainError> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .find(|i| i.cart_id == cart_id && i.product_id == product_id)
            .cloned())
    }

    async fn find_by_cart(&self, cart_id: i32) -> Result<Vec<CartItem>, DomainError> {
        let items = self.items.read().await;
        Ok(items.values().filter(|i| i.cart_id == cart_id).cloned().collect())
    }

    async fn find_all(&self) -> Result<Vec<CartItem>, DomainError> {
        Ok(self.items.read().await.values().cloned().collect())
    }
}
