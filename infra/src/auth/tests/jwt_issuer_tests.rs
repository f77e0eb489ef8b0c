//! Unit tests for the JWT issuer

use ds_core::domain::entities::{User, UserRole, UserStatus};
use ds_core::domain::value_objects::{Address, Name};
use ds_core::services::TokenIssuer;
use ds_shared::config::JwtConfig;

use crate::auth::JwtTokenIssuer;
use crate::InfrastructureError;

fn manager() -> User {
    let mut user = User::new(
        "jane@store.com".to_string(),
        "janedoe1".to_string(),
        "password1".to_string(),
        Name::new("Jane", "Doe"),
        Address::new("Springfield", "Main St", 10, "12345"),
        "+5511999999999".to_string(),
        UserStatus::Active,
        UserRole::Manager,
    );
    user.id = 7;
    user
}

fn issuer() -> JwtTokenIssuer {
    JwtTokenIssuer::new(JwtConfig::new("test-secret-key")).unwrap()
}

#[test]
fn test_issue_and_verify_round_trip() {
    let issuer = issuer();
    let token = issuer.issue(&manager()).unwrap();

    let claims = issuer.verify(&token).unwrap();

    assert_eq!(claims.sub, "7");
    assert_eq!(claims.email, "jane@store.com");
    assert_eq!(claims.unique_name, "janedoe1");
    assert_eq!(claims.role, UserRole::Manager.to_string());
    assert_eq!(claims.iss, "developer-store");
    assert_eq!(claims.aud, "developer-store-api");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_each_token_has_unique_id() {
    let issuer = issuer();
    let first = issuer.claims_for(&manager());
    let second = issuer.claims_for(&manager());

    assert_ne!(first.jti, second.jti);
}

#[test]
fn test_token_from_other_secret_is_rejected() {
    let token = issuer().issue(&manager()).unwrap();
    let other = JwtTokenIssuer::new(JwtConfig::new("another-secret")).unwrap();

    assert!(matches!(other.verify(&token), Err(InfrastructureError::Jwt(_))));
}

#[test]
fn test_token_for_other_audience_is_rejected() {
    let token = issuer().issue(&manager()).unwrap();
    let mut config = JwtConfig::new("test-secret-key");
    config.audience = "someone-else".to_string();
    let other = JwtTokenIssuer::new(config).unwrap();

    assert!(other.verify(&token).is_err());
}

#[test]
fn test_empty_secret_is_rejected() {
    let result = JwtTokenIssuer::new(JwtConfig::new(""));

    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_non_positive_expiry_is_rejected() {
    let config = JwtConfig::new("test-secret-key").with_expiry_minutes(0);

    assert!(JwtTokenIssuer::new(config).is_err());
}

#[tokio::test]
async fn test_generate_through_token_issuer_trait() {
    let issuer = issuer();

    let token = TokenIssuer::generate(&issuer, &manager()).await.unwrap();

    assert_eq!(token.split('.').count(), 3);
}
