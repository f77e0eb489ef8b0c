//! Mock implementation of ProductRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::product::Product;
use crate::errors::DomainError;

use super::trait_::ProductRepository;

/// Mock product repository for testing
pub struct MockProductRepository {
    products: Arc<RwLock<BTreeMap<i32, Product>>>,
    next_id: AtomicI32,
    create_calls: AtomicUsize,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI32::new(1),
            create_calls: AtomicUsize::new(0),
        }
    }

    /// Seed a product without counting it as a create call
    pub async fn insert(&self, mut product: Product) -> Product {
        product.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.products.write().await.insert(product.id, product.clone());
        product
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.insert(product).await)
    }

    async fn update(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.products.write().await;
        if !products.contains_key(&product.id) {
            return Err(DomainError::Storage {
                message: format!("product {} does not exist", product.id),
            });
        }
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.products.write().await.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.values().find(|p| p.title == title).cloned())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.in_category(category))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.read().await.values().cloned().collect())
    }
}
