//! Product commands and response DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::product::Product;
use crate::domain::value_objects::{Money, Rating};

/// Product fields submitted on create and update
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCommand {
    #[validate(custom(function = "crate::services::validation::not_blank", message = "Title must not be empty"))]
    pub title: String,

    #[validate(custom(function = "crate::services::validation::positive_amount", message = "Price must be greater than 0"))]
    pub price: Money,

    #[validate(custom(function = "crate::services::validation::not_blank", message = "Description must not be empty"))]
    pub description: String,

    #[validate(custom(function = "crate::services::validation::not_blank", message = "Category must not be empty"))]
    pub category: String,

    #[validate(custom(function = "crate::services::validation::not_blank", message = "Image must not be empty"))]
    pub image: String,

    #[serde(default)]
    pub rating: Rating,
}

impl ProductCommand {
    pub fn into_product(self) -> Product {
        Product::new(
            self.title,
            self.price,
            self.description,
            self.category,
            self.image,
            self.rating,
        )
    }

    /// Overwrite every field of `product`
    pub fn apply_to(self, product: &mut Product) {
        product.title = self.title;
        product.price = self.price;
        product.description = self.description;
        product.category = self.category;
        product.image = self.image;
        product.rating = self.rating;
    }
}

/// Product as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub title: String,
    pub price: Money,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            description: product.description,
            category: product.category,
            image: product.image,
            rating: product.rating,
        }
    }
}
