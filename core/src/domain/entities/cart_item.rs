//! Cart item entity and its quantity discount tiers.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::domain::value_objects::Money;

/// Largest quantity accepted for a single cart item
pub const MAX_ITEM_QUANTITY: i32 = 20;

/// Quantity band with a 20% discount
pub const BULK_DISCOUNT_RANGE: RangeInclusive<i32> = 10..=20;

/// Quantity band with a 10% discount
pub const VOLUME_DISCOUNT_RANGE: RangeInclusive<i32> = 5..=9;

const BULK_DISCOUNT_BPS: u32 = 2_000;
const VOLUME_DISCOUNT_BPS: u32 = 1_000;

/// A product line inside a cart
///
/// The unit price is private: it can only be assigned through
/// [`CartItem::set_price`], which applies the quantity discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Storage-assigned identifier; zero until the item is staged
    pub id: i32,

    pub cart_id: i32,

    pub product_id: i32,

    pub quantity: i32,

    price: Money,
}

impl CartItem {
    /// Creates an item without a price; call [`CartItem::set_price`] next
    pub fn new(cart_id: i32, product_id: i32, quantity: i32) -> Self {
        Self {
            id: 0,
            cart_id,
            product_id,
            quantity,
            price: Money::zero(),
        }
    }

    /// Discount in basis points earned by `quantity`
    ///
    /// The bulk band is checked first so that it wins at the boundary.
    pub fn discount_bps(quantity: i32) -> u32 {
        if BULK_DISCOUNT_RANGE.contains(&quantity) {
            BULK_DISCOUNT_BPS
        } else if VOLUME_DISCOUNT_RANGE.contains(&quantity) {
            VOLUME_DISCOUNT_BPS
        } else {
            0
        }
    }

    /// Sets the unit price from `base`, applying the discount for the
    /// current quantity, and returns the stored price.
    ///
    /// Later quantity changes do not recompute it.
    pub fn set_price(&mut self, base: Money) -> Money {
        self.price = base.apply_percentage_discount(Self::discount_bps(self.quantity));
        self.price
    }

    /// Discounted unit price
    pub fn price(&self) -> Money {
        self.price
    }
}
