//! Bearer token issuing

mod jwt_issuer;

#[cfg(test)]
mod tests;

pub use jwt_issuer::{Claims, JwtTokenIssuer};
