//! Postal address value object.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Postal address with optional geolocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(custom(
        function = "crate::services::validation::not_blank",
        message = "City must not be empty"
    ))]
    pub city: String,

    #[validate(custom(
        function = "crate::services::validation::not_blank",
        message = "Street must not be empty"
    ))]
    pub street: String,

    /// Street number; zero counts as missing
    #[validate(range(min = 1, message = "Number must not be empty"))]
    pub number: i32,

    #[validate(custom(
        function = "crate::services::validation::not_blank",
        message = "Post code must not be empty"
    ))]
    pub post_code: String,

    #[serde(default)]
    pub latitude: Option<String>,

    #[serde(default)]
    pub longitude: Option<String>,
}

impl Address {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        number: i32,
        post_code: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            number,
            post_code: post_code.into(),
            latitude: None,
            longitude: None,
        }
    }

    /// Attach coordinates
    pub fn with_geolocation(mut self, latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        self.latitude = Some(latitude.into());
        self.longitude = Some(longitude.into());
        self
    }
}
