//! Per-request session over the in-memory database.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use ds_core::domain::entities::{Cart, CartItem, Product, User};
use ds_core::errors::DomainError;
use ds_core::repositories::{
    CartItemRepository, CartRepository, ProductRepository, UnitOfWork, UserRepository,
};

use super::tables::{Change, Tables};
use super::{InMemoryDatabase, Table};

/// Repositories and unit of work sharing one list of staged changes
///
/// Lookups read committed rows only. Staged changes are applied atomically
/// by [`UnitOfWork::commit`] and discarded if the session is dropped first.
pub struct InMemorySession {
    database: InMemoryDatabase,
    pending: Mutex<Vec<Change>>,
}

impl InMemorySession {
    pub fn new(database: InMemoryDatabase) -> Self {
        Self {
            database,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Number of changes waiting for a commit
    pub async fn pending_changes(&self) -> usize {
        self.pending.lock().await.len()
    }

    async fn stage(&self, change: Change) {
        self.pending.lock().await.push(change);
    }

    async fn read<R>(&self, query: impl FnOnce(&Tables) -> R) -> R {
        let tables = self.database.tables.read().await;
        query(&tables)
    }

    fn next_id(&self, table: Table) -> i32 {
        self.database.sequences.next(table)
    }
}

impl Drop for InMemorySession {
    fn drop(&mut self) {
        let discarded = self.pending.get_mut().len();
        if discarded > 0 {
            debug!("Session dropped with {} uncommitted change(s)", discarded);
        }
    }
}

#[async_trait]
impl UnitOfWork for InMemorySession {
    async fn commit(&self) -> Result<usize, DomainError> {
        let changes = std::mem::take(&mut *self.pending.lock().await);
        if changes.is_empty() {
            return Ok(0);
        }

        let mut tables = self.database.tables.write().await;
        let next = tables.apply(&changes)?;
        *tables = next;

        info!("Committed {} change(s)", changes.len());
        Ok(changes.len())
    }
}

#[async_trait]
impl UserRepository for InMemorySession {
    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        user.id = self.next_id(Table::Users);
        self.stage(Change::InsertUser(user.clone())).await;
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.stage(Change::UpdateUser(user.clone())).await;
        Ok(user)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let exists = self.read(|t| t.users.contains_key(&id)).await;
        if exists {
            self.stage(Change::DeleteUser(id)).await;
        }
        Ok(exists)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        Ok(self.read(|t| t.users.get(&id).cloned()).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .read(|t| t.users.values().find(|u| u.email == email).cloned())
            .await)
    }

    async fn find_by_credentials(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        Ok(self
            .read(|t| {
                t.users
                    .values()
                    .find(|u| u.has_credentials(user_name, password))
                    .cloned()
            })
            .await)
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.read(|t| t.users.values().cloned().collect()).await)
    }
}

#[async_trait]
impl ProductRepository for InMemorySession {
    async fn create(&self, mut product: Product) -> Result<Product, DomainError> {
        product.id = self.next_id(Table::Products);
        self.stage(Change::InsertProduct(product.clone())).await;
        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Product, DomainError> {
        self.stage(Change::UpdateProduct(product.clone())).await;
        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let exists = self.read(|t| t.products.contains_key(&id)).await;
        if exists {
            self.stage(Change::DeleteProduct(id)).await;
        }
        Ok(exists)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        Ok(self.read(|t| t.products.get(&id).cloned()).await)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Product>, DomainError> {
        Ok(self
            .read(|t| t.products.values().find(|p| p.title == title).cloned())
            .await)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, DomainError> {
        Ok(self
            .read(|t| {
                t.products
                    .values()
                    .filter(|p| p.in_category(category))
                    .cloned()
                    .collect()
            })
            .await)
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.read(|t| t.products.values().cloned().collect()).await)
    }
}

#[async_trait]
impl CartRepository for InMemorySession {
    async fn create(&self, mut cart: Cart) -> Result<Cart, DomainError> {
        cart.id = self.next_id(Table::Carts);
        self.stage(Change::InsertCart(cart.clone())).await;
        Ok(cart)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let exists = self.read(|t| t.carts.contains_key(&id)).await;
        if exists {
            self.stage(Change::DeleteCart(id)).await;
        }
        Ok(exists)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Cart>, DomainError> {
        Ok(self.read(|t| t.carts.get(&id).cloned()).await)
    }

    async fn find_active_by_user(&self, user_id: i32) -> Result<Option<Cart>, DomainError> {
        Ok(self
            .read(|t| {
                t.carts
                    .values()
                    .find(|c| c.belongs_to(user_id) && c.active)
                    .cloned()
            })
            .await)
    }

    async fn find_all(&self) -> Result<Vec<Cart>, DomainError> {
        Ok(self.read(|t| t.carts.values().cloned().collect()).await)
    }
}

#[async_trait]
impl CartItemRepository for InMemorySession {
    async fn create(&self, mut item: CartItem) -> Result<CartItem, DomainError> {
        item.id = self.next_id(Table::CartItems);
        self.stage(Change::InsertCartItem(item.clone())).await;
        Ok(item)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let exists = self.read(|t| t.cart_items.contains_key(&id)).await;
        if exists {
            self.stage(Change::DeleteCartItem(id)).await;
        }
        Ok(exists)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CartItem>, DomainError> {
        Ok(self.read(|t| t.cart_items.get(&id).cloned()).await)
    }

    async fn find_by_cart_and_product(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, DomainError> {
        Ok(self
            .read(|t| {
                t.cart_items
                    .values()
                    .find(|i| i.cart_id == cart_id && i.product_id == product_id)
                    .cloned()
            })
            .await)
    }

    async fn find_by_cart(&self, cart_id: i32) -> Result<Vec<CartItem>, DomainError> {
        Ok(self
            .read(|t| {
                t.cart_items
                    .values()
                    .filter(|i| i.cart_id == cart_id)
                    .cloned()
                    .collect()
            })
            .await)
    }

    async fn find_all(&self) -> Result<Vec<CartItem>, DomainError> {
        Ok(self.read(|t| t.cart_items.values().cloned().collect()).await)
    }
}
