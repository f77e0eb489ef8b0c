//! Domain entities representing core business objects.

pub mod cart;
pub mod cart_item;
pub mod product;
pub mod user;


// Re-export commonly used types
pub use cart::Cart;
pub use cart_item::{CartItem, BULK_DISCOUNT_RANGE, MAX_ITEM_QUANTITY, VOLUME_DISCOUNT_RANGE};
pub use product::Product;
pub use user::{User, UserRole, UserStatus};
