//! Cart commands and response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Cart, CartItem};
use crate::domain::value_objects::Money;

/// A product line requested for a cart
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    #[validate(range(min = 1, message = "Product id must not be empty"))]
    pub product_id: i32,

    #[validate(range(min = 1, max = 20, message = "Quantity must be greater than 0 and at most 20"))]
    pub quantity: i32,

    /// Base unit price before the quantity discount
    #[validate(custom(
        function = "crate::services::validation::positive_amount",
        message = "Item price must be greater than 0"
    ))]
    pub item_price: Money,
}

/// Open a cart for a user with its initial items
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCartCommand {
    #[validate(range(min = 1, message = "User id must not be empty"))]
    pub user_id: i32,

    #[serde(default = "Utc::now")]
    pub create_date: DateTime<Utc>,

    #[validate(length(min = 1, message = "Cart items must not be empty"), nested)]
    pub cart_items: Vec<CartItemRequest>,
}

impl CartItemRequest {
    /// Build the item for `cart_id` with its discounted price
    pub fn into_item(self, cart_id: i32) -> CartItem {
        let mut item = CartItem::new(cart_id, self.product_id, self.quantity);
        item.set_price(self.item_price);
        item
    }
}

/// Cart item as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Discounted unit price
    pub item_price: Money,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            cart_id: item.cart_id,
            product_id: item.product_id,
            quantity: item.quantity,
            item_price: item.price(),
        }
    }
}

/// Cart with its items as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub id: i32,
    pub user_id: i32,
    pub create_date: DateTime<Utc>,
    pub cart_items: Vec<CartItemResponse>,
}

impl CartResponse {
    pub fn new(cart: Cart, items: Vec<CartItem>) -> Self {
        Self::with_items(cart, items.into_iter().map(CartItemResponse::from).collect())
    }

    pub fn with_items(cart: Cart, cart_items: Vec<CartItemResponse>) -> Self {
        Self {
            id: cart.id,
            user_id: cart.user_id,
            create_date: cart.create_date,
            cart_items,
        }
    }
}
