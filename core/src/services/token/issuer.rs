use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Issues bearer tokens for authenticated users
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Generate a signed token for `user`
    ///
    /// # Returns
    /// * `Ok(String)` - The encoded token
    /// * `Err(DomainError::Token)` - Signing failed
    async fn generate(&self, user: &User) -> Result<String, DomainError>;
}

#[cfg(test)]
pub use mock::MockTokenIssuer;

#[cfg(test)]
mod mock {
    use super::*;
    use crate::errors::TokenError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns `token-for-<user name>` and counts calls
    #[derive(Default)]
    pub struct MockTokenIssuer {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockTokenIssuer {
        pub fn new() -> Self {
            Self::default()
        }

        /// An issuer whose every call fails
        pub fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TokenIssuer for MockTokenIssuer {
        async fn generate(&self, user: &User) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(TokenError::InvalidKey.into());
            }
            Ok(format!("token-for-{}", user.user_name))
        }
    }
}
