//! In-memory transactional store
//!
//! [`InMemoryDatabase`] owns the committed tables and is shared by the whole
//! application. Each request opens an [`InMemorySession`] that stages its
//! writes and applies them in one step on commit.

mod session;
mod tables;

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use ds_core::repositories::SessionFactory;

pub use session::InMemorySession;
pub use tables::{Change, Tables};

/// Identifier sequences, one per table, starting at 1
#[derive(Debug)]
pub(crate) struct Sequences {
    users: AtomicI32,
    products: AtomicI32,
    carts: AtomicI32,
    cart_items: AtomicI32,
}

impl Default for Sequences {
    fn default() -> Self {
        Self {
            users: AtomicI32::new(1),
            products: AtomicI32::new(1),
            carts: AtomicI32::new(1),
            cart_items: AtomicI32::new(1),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Table {
    Users,
    Products,
    Carts,
    CartItems,
}

impl Sequences {
    pub(crate) fn next(&self, table: Table) -> i32 {
        let sequence = match table {
            Table::Users => &self.users,
            Table::Products => &self.products,
            Table::Carts => &self.carts,
            Table::CartItems => &self.cart_items,
        };
        sequence.fetch_add(1, Ordering::SeqCst)
    }
}

/// Shared committed state
///
/// Cloning is cheap and every clone sees the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    pub(crate) tables: Arc<RwLock<Tables>>,
    pub(crate) sequences: Arc<Sequences>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the committed tables
    pub async fn snapshot(&self) -> Tables {
        self.tables.read().await.clone()
    }
}

impl SessionFactory for InMemoryDatabase {
    type Session = InMemorySession;

    fn begin(&self) -> InMemorySession {
        InMemorySession::new(self.clone())
    }
}
