//! Repository interfaces consumed by the services.

pub mod cart;
pub mod cart_item;
pub mod product;
pub mod unit_of_work;
pub mod user;

pub use cart::CartRepository;
pub use cart_item::CartItemRepository;
pub use product::ProductRepository;
pub use unit_of_work::{SessionFactory, StoreSession, UnitOfWork};
pub use user::UserRepository;

#[cfg(test)]
pub use cart::MockCartRepository;
#[cfg(test)]
pub use cart_item::MockCartItemRepository;
#[cfg(test)]
pub use product::MockProductRepository;
#[cfg(test)]
pub use unit_of_work::MockUnitOfWork;
#[cfg(test)]
pub use user::MockUserRepository;
