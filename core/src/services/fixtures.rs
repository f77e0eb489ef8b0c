//! Builders shared by the service tests

use crate::domain::entities::{Product, User, UserRole, UserStatus};
use crate::domain::value_objects::{Address, Money, Name, Rating};

pub fn user(email: &str, user_name: &str, password: &str) -> User {
    User::new(
        email.to_string(),
        user_name.to_string(),
        password.to_string(),
        Name::new("John", "Doe"),
        Address::new("Curitiba", "Rua XV", 100, "80000-000"),
        "+55 41 99999-0000".to_string(),
        UserStatus::Active,
        UserRole::Customer,
    )
}

pub fn product(title: &str, category: &str, cents: i64) -> Product {
    Product::new(
        title.to_string(),
        Money::from_cents(cents),
        format!("{} description", title),
        category.to_string(),
        format!("https://img.example/{}.png", title.to_lowercase()),
        Rating::new(4.2, 30),
    )
}
