//! Unit of work and per-request storage sessions.

use async_trait::async_trait;

use crate::errors::DomainError;

use super::{CartItemRepository, CartRepository, ProductRepository, UserRepository};

/// Commits the changes staged by repository calls
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Persist every pending change as a single save
    ///
    /// # Returns
    /// * `Ok(n)` - Number of changes applied
    /// * `Err(DomainError)` - Nothing was applied
    async fn commit(&self) -> Result<usize, DomainError>;
}

/// A storage session: all four repositories plus the unit of work that
/// commits their staged changes
pub trait StoreSession:
    UserRepository + ProductRepository + CartRepository + CartItemRepository + UnitOfWork
{
}

impl<T> StoreSession for T where
    T: UserRepository + ProductRepository + CartRepository + CartItemRepository + UnitOfWork
{
}

/// Opens one session per request
pub trait SessionFactory: Send + Sync + 'static {
    type Session: StoreSession + 'static;

    fn begin(&self) -> Self::Session;
}

#[cfg(test)]
pub use mock::MockUnitOfWork;

#[cfg(test)]
mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts commits; mock repositories apply writes immediately
    #[derive(Default)]
    pub struct MockUnitOfWork {
        commits: AtomicUsize,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn commits(&self) -> usize {
            self.commits.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UnitOfWork for MockUnitOfWork {
        async fn commit(&self) -> Result<usize, DomainError> {
            self.commits.fetch_add(1, Ordering::SeqCst);
            Ok(0)
        }
    }
}
