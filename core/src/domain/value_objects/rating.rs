//! Product rating value object.

use serde::{Deserialize, Serialize};

/// Average rate and number of votes of a product
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: i32,
}

impl Rating {
    pub fn new(rate: f64, count: i32) -> Self {
        Self { rate, count }
    }
}
