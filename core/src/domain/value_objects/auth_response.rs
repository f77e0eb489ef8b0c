//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

/// Result of a successful authentication
///
/// Carries the signed bearer token issued for the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed JWT
    pub token: String,
}

impl AuthResponse {
    /// Creates a new authentication response
    ///
    /// # Arguments
    ///
    /// * `token` - The token produced by the token issuer
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}
