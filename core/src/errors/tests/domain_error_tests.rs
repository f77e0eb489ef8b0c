//! Unit tests for the business error catalog

use ds_shared::ErrorDetail;

use crate::errors::{CartError, CartItemError, DomainError, ProductError, TokenError, UserError};

#[test]
fn test_not_found_errors_use_404_code() {
    let details: Vec<ErrorDetail> = vec![
        UserError::NotFound.into(),
        UserError::TableIsEmpty.into(),
        ProductError::NotFound.into(),
        CartError::TableIsEmpty.into(),
        CartItemError::NotFound.into(),
    ];
    assert!(details.iter().all(|d| d.code == "404"));
}

#[test]
fn test_conflict_errors_use_400_code() {
    assert_eq!(UserError::Exists.code(), "400");
    assert_eq!(UserError::InvalidCredentials.code(), "400");
    assert_eq!(ProductError::Exists.code(), "400");
    assert_eq!(CartError::Exists.code(), "400");
    assert_eq!(CartItemError::Exists.code(), "400");
}

#[test]
fn test_catalog_messages() {
    let detail: ErrorDetail = UserError::Exists.into();
    assert_eq!(detail, ErrorDetail::new("400", "User exists."));

    let detail: ErrorDetail = CartError::Exists.into();
    assert_eq!(detail.message, "There is already an active cart for this user");

    let detail: ErrorDetail = CartItemError::TableIsEmpty.into();
    assert_eq!(detail.message, "Cart Items table is empty");
}

#[test]
fn test_token_error_is_a_domain_fault() {
    let error: DomainError = TokenError::GenerationFailed {
        reason: "bad key".to_string(),
    }
    .into();
    assert!(matches!(error, DomainError::Token(_)));
    assert_eq!(error.to_string(), "Token generation failed: bad key");
}
