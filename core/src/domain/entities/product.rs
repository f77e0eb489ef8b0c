//! Product entity of the store catalog.

use ds_shared::{SortKey, Sortable};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Money, Rating};

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Storage-assigned identifier; zero until the product is staged
    pub id: i32,

    /// Unique title
    pub title: String,

    pub price: Money,

    pub description: String,

    pub category: String,

    /// Image URL
    pub image: String,

    pub rating: Rating,
}

impl Product {
    /// Creates a new, not yet persisted, product
    pub fn new(
        title: String,
        price: Money,
        description: String,
        category: String,
        image: String,
        rating: Rating,
    ) -> Self {
        Self {
            id: 0,
            title,
            price,
            description,
            category,
            image,
            rating,
        }
    }

    /// Case-insensitive category match
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

impl Sortable for Product {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "id" => SortKey::from(self.id),
            "title" => SortKey::from(self.title.as_str()),
            "price" => SortKey::from(self.price.cents()),
            "category" => SortKey::from(self.category.as_str()),
            "image" => SortKey::from(self.image.as_str()),
            "rate" => SortKey::from(self.rating.rate),
            _ => SortKey::Null,
        }
    }
}
