
use chrono::Utc;
use ds_core::domain::entities::{Cart, CartItem, Product, User, UserRole, UserStatus};
use ds_core::domain::value_objects::{Address, Money, Name, Rating};

pub fn user(user_name: &str) -> User {
    User::new(
        format!("{}@store.com", user_name),
        user_name.to_string(),
        "secret123".to_string(),
        Name::new("John", "Doe"),
        Address::new("Springfield", "Main St", 10, "12345"),
        "+5511999999999".to_string(),
        UserStatus::Active,
        UserRole::Customer,
    )
}

pub fn product(title: &str, category: &str) -> Product {
    Product::new(
        title.to_string(),
        Money::from_cents(1000),
        "A product".to_string(),
        category.to_string(),
        "http://img/1.png".to_string(),
        Rating::default(),
    )
}

pub fn cart(id: i32, user_id: i32) -> Cart {
    let mut cart = Cart::new(user_id, Utc::now());
    cart.id = id;
    cart
}

pub fn item(id: i32, cart_id: i32, product_id: i32) -> CartItem {
    let mut item = CartItem::new(cart_id, product_id, 2);
    item.id = id;
    item
}
