//! Input validation shared by every command
//!
//! Commands declare their rules with the `validator` derive macros. This
//! module holds the custom rules those declarations reference and turns a
//! `ValidationErrors` tree into the flat error list carried by a failed
//! envelope.

use std::borrow::Cow;

use ds_shared::validation::{field_path, validators};
use ds_shared::ErrorDetail;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::domain::value_objects::Money;

/// Key under which struct-level (schema) errors are reported
const SCHEMA_KEY: &str = "__all__";

/// Rejects empty or whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if validators::not_blank(value) {
        Ok(())
    } else {
        Err(rule_error("not_blank", "must not be empty"))
    }
}

/// Rejects zero and negative amounts
pub fn positive_amount(value: &Money) -> Result<(), ValidationError> {
    if value.is_positive() {
        Ok(())
    } else {
        Err(rule_error("positive", "must be greater than 0"))
    }
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Run the declared rules of `input`
///
/// # Returns
/// * `Ok(())` - Every rule passed
/// * `Err(errors)` - One entry per failed rule, sorted by field path
pub fn validate<T: Validate>(input: &T) -> Result<(), Vec<ErrorDetail>> {
    input.validate().map_err(|errors| to_error_details(&errors))
}

/// Flatten a validation tree into `{code: fieldPath, message}` entries
pub fn to_error_details(errors: &ValidationErrors) -> Vec<ErrorDetail> {
    let mut details = Vec::new();
    collect(errors, None, &mut details);
    details.sort_by(|a, b| a.code.cmp(&b.code));
    details
}

fn collect(errors: &ValidationErrors, parent: Option<&str>, out: &mut Vec<ErrorDetail>) {
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    // Schema errors name the offending field in their code
                    let path = if field == SCHEMA_KEY {
                        field_path(parent, &error.code)
                    } else {
                        field_path(parent, &field)
                    };
                    out.push(detail(path, error));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                let path = field_path(parent, &field);
                collect(nested, Some(&path), out);
            }
            ValidationErrorsKind::List(entries) => {
                let path = field_path(parent, &field);
                for (index, nested) in entries {
                    let indexed = format!("{}[{}]", path, index);
                    collect(nested, Some(&indexed), out);
                }
            }
        }
    }
}

fn detail(path: String, error: &ValidationError) -> ErrorDetail {
    let message = match &error.message {
        Some(message) => message.to_string(),
        None => format!("{} is invalid", path),
    };
    ErrorDetail::new(path, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Line {
        #[validate(range(min = 1, max = 20, message = "Quantity must be between 1 and 20"))]
        quantity: i32,
    }

    #[derive(Validate)]
    struct Order {
        #[validate(custom(function = "not_blank", message = "Customer name must not be empty"))]
        customer_name: String,

        #[validate(custom(function = "positive_amount"))]
        total: Money,

        #[validate(nested)]
        lines: Vec<Line>,
    }

    #[test]
    fn test_valid_input() {
        let order = Order {
            customer_name: "Ana".to_string(),
            total: Money::from_cents(100),
            lines: vec![Line { quantity: 2 }],
        };
        assert!(validate(&order).is_ok());
    }

    #[test]
    fn test_errors_use_camel_case_paths() {
        let order = Order {
            customer_name: " ".to_string(),
            total: Money::zero(),
            lines: vec![Line { quantity: 1 }, Line { quantity: 21 }],
        };
        let errors = validate(&order).unwrap_err();
        let codes: Vec<&str> = errors.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["customerName", "lines[1].quantity", "total"]);
        assert_eq!(errors[0].message, "Customer name must not be empty");
        assert_eq!(errors[1].message, "Quantity must be between 1 and 20");
        assert_eq!(errors[2].message, "must be greater than 0");
    }

    #[test]
    fn test_rules() {
        assert!(not_blank("x").is_ok());
        assert!(not_blank("\t").is_err());
        assert!(positive_amount(&Money::from_cents(1)).is_ok());
        assert!(positive_amount(&Money::from_cents(-1)).is_err());
    }
}
