//! Committed rows and the changes a session can stage against them.

use std::collections::BTreeMap;

use ds_core::domain::entities::{Cart, CartItem, Product, User};

use crate::InfrastructureError;

/// Every committed row, keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub users: BTreeMap<i32, User>,
    pub products: BTreeMap<i32, Product>,
    pub carts: BTreeMap<i32, Cart>,
    pub cart_items: BTreeMap<i32, CartItem>,
}

/// A write staged by a session and applied on commit
#[derive(Debug, Clone)]
pub enum Change {
    InsertUser(User),
    UpdateUser(User),
    DeleteUser(i32),
    InsertProduct(Product),
    UpdateProduct(Product),
    DeleteProduct(i32),
    InsertCart(Cart),
    DeleteCart(i32),
    InsertCartItem(CartItem),
    DeleteCartItem(i32),
}

impl Tables {
    /// Apply `changes` in order to a copy of the tables
    ///
    /// Either every change applies and the new tables are returned, or
    /// nothing does. An insert fails with [`InfrastructureError::Conflict`]
    /// when a committed row already holds its email, product title or the
    /// user's active cart. Deletes cascade: a user takes its carts, a cart its
    /// items, and a product every item referencing it.
    pub fn apply(&self, changes: &[Change]) -> Result<Tables, InfrastructureError> {
        let mut next = self.clone();
        for change in changes {
            next.apply_one(change)?;
        }
        Ok(next)
    }

    fn apply_one(&mut self, change: &Change) -> Result<(), InfrastructureError> {
        match change {
            Change::InsertUser(user) => {
                if self.users.values().any(|u| u.id != user.id && u.email == user.email) {
                    return Err(InfrastructureError::Conflict {
                        table: "users",
                        key: format!("email {}", user.email),
                    });
                }
                self.users.insert(user.id, user.clone());
            }
            Change::UpdateUser(user) => {
                let row = self.users.get_mut(&user.id).ok_or(InfrastructureError::MissingRecord {
                    table: "users",
                    id: user.id,
                })?;
                *row = user.clone();
            }
            Change::DeleteUser(id) => {
                self.users.remove(id);
                let carts: Vec<i32> = self
                    .carts
                    .values()
                    .filter(|c| c.user_id == *id)
                    .map(|c| c.id)
                    .collect();
                for cart_id in carts {
                    self.remove_cart(cart_id);
                }
            }
            Change::InsertProduct(product) => {
                if self.products.values().any(|p| p.id != product.id && p.title == product.title) {
                    return Err(InfrastructureError::Conflict {
                        table: "products",
                        key: format!("title {}", product.title),
                    });
                }
                self.products.insert(product.id, product.clone());
            }
            Change::UpdateProduct(product) => {
                let row = self
                    .products
                    .get_mut(&product.id)
                    .ok_or(InfrastructureError::MissingRecord {
                        table: "products",
                        id: product.id,
                    })?;
                *row = product.clone();
            }
            Change::DeleteProduct(id) => {
                self.products.remove(id);
                self.cart_items.retain(|_, item| item.product_id != *id);
            }
            Change::InsertCart(cart) => {
                let taken = cart.active
                    && self
                        .carts
                        .values()
                        .any(|c| c.id != cart.id && c.active && c.belongs_to(cart.user_id));
                if taken {
                    return Err(InfrastructureError::Conflict {
                        table: "carts",
                        key: format!("active cart for user {}", cart.user_id),
                    });
                }
                self.carts.insert(cart.id, cart.clone());
            }
            Change::DeleteCart(id) => self.remove_cart(*id),
            Change::InsertCartItem(item) => {
                self.cart_items.insert(item.id, item.clone());
            }
            Change::DeleteCartItem(id) => {
                self.cart_items.remove(id);
            }
        }
        Ok(())
    }

    fn remove_cart(&mut self, id: i32) {
        self.carts.remove(&id);
        self.cart_items.retain(|_, item| item.cart_id != id);
    }
}
