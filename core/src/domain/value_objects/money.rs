//! Fixed-point monetary amounts.
//!
//! Amounts are kept as integer cents so that discounts and comparisons are
//! exact. On the wire an amount is a plain decimal number (`12.5`); parsing
//! rounds to the nearest cent.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Basis points in 100%
const FULL_BPS: i128 = 10_000;

/// `i64::MIN` as a float, exactly representable
const MIN_CENTS: f64 = -9_223_372_036_854_775_808.0;

/// 2^63, the first float past `i64::MAX`
const MAX_CENTS_EXCLUSIVE: f64 = 9_223_372_036_854_775_808.0;

/// A monetary amount in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates an amount from cents
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates an amount from a decimal value, rounding to the nearest cent
    ///
    /// Returns `None` when the value is not finite or does not fit in `i64` cents.
    pub fn from_decimal(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents < MIN_CENTS || cents >= MAX_CENTS_EXCLUSIVE {
            return None;
        }
        Some(Money(cents as i64))
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Decimal representation, for display and serialization
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Reduce the amount by a percentage expressed in basis points
    ///
    /// The discount itself is rounded half-up to the cent, so
    /// `Money::from_cents(999).apply_percentage_discount(1000)` is 899.
    /// Percentages above 100% are capped at 100%.
    pub fn apply_percentage_discount(&self, bps: u32) -> Self {
        let bps = i128::from(bps).min(FULL_BPS);
        let amount = i128::from(self.0);
        let discount = (amount * bps + FULL_BPS / 2) / FULL_BPS;
        // |amount - discount| <= |amount| for bps in 0..=10_000
        let discounted = amount - discount;
        Money(i64::try_from(discounted).unwrap_or(if discounted < 0 { i64::MIN } else { i64::MAX }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| serde::de::Error::custom("amount is not a finite number within range"))
    }
}
