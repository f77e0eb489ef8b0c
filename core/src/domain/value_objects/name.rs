//! Person name value object.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// First and last name of a user
///
/// Validation is reusable: any command carrying a `Name` composes these
/// rules with `#[validate(nested)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "distinct_names", skip_on_field_errors = true))]
pub struct Name {
    #[validate(custom(
        function = "crate::services::validation::not_blank",
        message = "First name must not be empty"
    ))]
    pub first_name: String,

    #[validate(custom(
        function = "crate::services::validation::not_blank",
        message = "Last name must not be empty"
    ))]
    pub last_name: String,
}

impl Name {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// The last name must differ from the first name.
///
/// Schema errors carry the offending field as their code so that they can
/// be reported against `lastName`.
fn distinct_names(name: &Name) -> Result<(), ValidationError> {
    if name.last_name == name.first_name {
        let mut error = ValidationError::new("last_name");
        error.message = Some("Last name must be different from first name".into());
        return Err(error);
    }
    Ok(())
}
