use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Fixed-point amount stored in the currency's minor units (cents, paise, ...).
///
/// The precision is not stored alongside the value; it is implied by the
/// currency the amount was created for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Converts a decimal major-unit value into minor units, rounding half away
    /// from zero at `minor_units` decimal places.
    pub fn from_major(
        field: &'static str,
        value: f64,
        minor_units: u8,
    ) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteAmount { field });
        }
        let scaled = (value * 10f64.powi(minor_units as i32)).round();
        // `i64::MAX as f64` rounds up to 2^63, which itself does not fit.
        if scaled.abs() >= i64::MAX as f64 {
            return Err(ValidationError::AmountOutOfRange { field });
        }
        Ok(Self(scaled as i64))
    }

    /// Like [`Money::from_major`] but rejects negative values.
    pub fn non_negative(
        field: &'static str,
        value: f64,
        minor_units: u8,
    ) -> Result<Self, ValidationError> {
        let money = Self::from_major(field, value, minor_units)?;
        if money.is_negative() {
            return Err(ValidationError::NegativeAmount { field, value });
        }
        Ok(money)
    }

    pub fn to_major(self, minor_units: u8) -> f64 {
        self.0 as f64 / 10f64.powi(minor_units as i32)
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub const fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub const fn saturating_sub(self, other: Money) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        self.saturating_add(rhs)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        self.saturating_sub(rhs)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_minor_units() {
        assert_eq!(Money::from_major("amount", 12.345, 2).unwrap().minor(), 1235);
        assert_eq!(Money::from_major("amount", 0.1 + 0.2, 2).unwrap().minor(), 30);
        assert_eq!(Money::from_major("amount", 1500.0, 0).unwrap().minor(), 1500);
    }

    #[test]
    fn rejects_non_finite_and_negative_values() {
        assert_eq!(
            Money::from_major("amount", f64::NAN, 2),
            Err(ValidationError::NonFiniteAmount { field: "amount" })
        );
        assert_eq!(
            Money::from_major("amount", f64::INFINITY, 2),
            Err(ValidationError::NonFiniteAmount { field: "amount" })
        );
        assert!(matches!(
            Money::non_negative("targetAmount", -1.0, 2),
            Err(ValidationError::NegativeAmount { field: "targetAmount", .. })
        ));
        assert_eq!(
            Money::from_major("amount", 1e30, 2),
            Err(ValidationError::AmountOutOfRange { field: "amount" })
        );
    }

    #[test]
    fn sums_saturate() {
        let total: Money = [Money::from_minor(i64::MAX), Money::from_minor(1)]
            .into_iter()
            .sum();
        assert_eq!(total.minor(), i64::MAX);
    }
}
