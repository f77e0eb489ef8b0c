//! Shopping cart entity.

use chrono::{DateTime, Utc};
use ds_shared::{SortKey, Sortable};
use serde::{Deserialize, Serialize};

/// Shopping cart owned by a user
///
/// Items are not embedded; they reference the cart by `cart_id` and are
/// loaded through the cart item repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Storage-assigned identifier; zero until the cart is staged
    pub id: i32,

    /// Owner of the cart
    pub user_id: i32,

    pub create_date: DateTime<Utc>,

    /// A user has at most one active cart
    pub active: bool,
}

impl Cart {
    /// Creates a new active cart
    pub fn new(user_id: i32, create_date: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            user_id,
            create_date,
            active: true,
        }
    }

    pub fn belongs_to(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }
}

impl Sortable for Cart {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "id" => SortKey::from(self.id),
            "userid" => SortKey::from(self.user_id),
            "createdate" => SortKey::from(self.create_date),
            _ => SortKey::Null,
        }
    }
}
