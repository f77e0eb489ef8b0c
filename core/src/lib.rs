//! # DeveloperStore Core
//!
//! Core business logic and domain layer for the DeveloperStore backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Cart, CartItem, Product, User, UserRole, UserStatus};
pub use domain::value_objects::{Address, AuthResponse, Money, Name, Rating};
pub use errors::*;
pub use repositories::{
    CartItemRepository, CartRepository, ProductRepository, SessionFactory, StoreSession,
    UnitOfWork, UserRepository,
};
pub use services::{
    AuthCommand, AuthService, CartItemRequest, CartItemResponse, CartResponse, CartService,
    CreateCartCommand, CreateUserCommand, ProductCommand, ProductResponse, ProductService,
    TokenIssuer, UpdateUserCommand, UserResponse, UserService,
};
