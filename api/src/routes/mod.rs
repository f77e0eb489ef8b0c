//! Route handlers
//!
//! One module per resource. Handlers build the matching service from the
//! application state, call it, and map the envelope with
//! [`respond`](crate::response::respond).

pub mod auth;
pub mod carts;
pub mod products;
pub mod users;
