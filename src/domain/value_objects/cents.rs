use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Monetary amount in minor currency units, the representation of
/// `properties.cost_per_night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i32);

impl Cents {
    pub const PER_UNIT: i32 = 100;

    pub fn new(minor_units: i32) -> Self {
        Self(minor_units)
    }

    /// Convert a decimal amount (e.g. `149.99`) to minor units, rounding to
    /// the nearest cent.
    pub fn from_decimal(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::InvalidPrice(format!(
                "{amount} is not a finite number"
            )));
        }
        if amount < 0.0 {
            return Err(DomainError::InvalidPrice(format!(
                "{amount} is negative"
            )));
        }

        let scaled = (amount * f64::from(Self::PER_UNIT)).round();
        if scaled > f64::from(i32::MAX) {
            return Err(DomainError::PriceOutOfRange(amount));
        }

        Ok(Self(scaled as i32))
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_unit = Self::PER_UNIT as u32;
        write!(f, "{sign}{}.{:02}", abs / per_unit, abs % per_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_scales_by_hundred() {
        assert_eq!(Cents::from_decimal(100.00).unwrap().as_i32(), 10000);
    }

    #[test]
    fn test_from_decimal_rounds_to_nearest_cent() {
        // 19.99 * 100 is 1998.9999... in binary floating point
        assert_eq!(Cents::from_decimal(19.99).unwrap().as_i32(), 1999);
        assert_eq!(Cents::from_decimal(0.005).unwrap().as_i32(), 1);
    }

    #[test]
    fn test_from_decimal_zero() {
        assert_eq!(Cents::from_decimal(0.0).unwrap(), Cents::new(0));
    }

    #[test]
    fn test_from_decimal_rejects_negative() {
        assert!(matches!(
            Cents::from_decimal(-1.0),
            Err(DomainError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_from_decimal_rejects_non_finite() {
        assert!(Cents::from_decimal(f64::NAN).is_err());
        assert!(Cents::from_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn test_from_decimal_rejects_overflow() {
        assert!(matches!(
            Cents::from_decimal(1e12),
            Err(DomainError::PriceOutOfRange(_))
        ));
    }

    #[test]
    fn test_display_as_decimal() {
        assert_eq!(Cents::new(12345).to_string(), "123.45");
        assert_eq!(Cents::new(5).to_string(), "0.05");
    }
}
