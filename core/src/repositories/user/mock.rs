//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
///
/// Writes apply immediately and are counted so tests can assert that a
/// rejected command never reached storage.
pub struct MockUserRepository {
    users: Arc<RwLock<BTreeMap<i32, User>>>,
    next_id: AtomicI32,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI32::new(1),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// Seed a user without counting it as a create call
    pub async fn insert(&self, mut user: User) -> User {
        user.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.users.write().await.insert(user.id, user.clone());
        user
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.insert(user).await)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::Storage {
                message: format!("user {} does not exist", user.id),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_credentials(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.has_credentials(user_name, password))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }
}
