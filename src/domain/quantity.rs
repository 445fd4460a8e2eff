//! Validated trade size.

use core::fmt;

use crate::error::CurveError;

/// Number of shares a trade moves into or out of the pool.
///
/// Always finite and `≥ 0`.  Zero is a legal trade size and simulates as
/// an identity operation.
///
/// # Examples
///
/// ```
/// use bonding_curve_engine::domain::Quantity;
///
/// assert!(Quantity::new(1_000.0).is_ok());
/// assert!(Quantity::new(-1.0).is_err());
/// assert!(Quantity::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Quantity(f64);

impl Quantity {
    /// Zero shares.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidQuantity`] if the value is negative,
    /// NaN, or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() {
            return Err(CurveError::InvalidQuantity("quantity must be finite"));
        }
        if value < 0.0 {
            return Err(CurveError::InvalidQuantity("quantity must be non-negative"));
        }
        // Normalise -0.0 so that is_zero and Display behave.
        Ok(Self(value + 0.0))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` for a zero-size trade.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for Quantity {
    type Error = CurveError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for f64 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_positive() {
        let Ok(q) = Quantity::new(42.5) else {
            panic!("expected Ok");
        };
        assert!((q.get() - 42.5).abs() < f64::EPSILON);
        assert!(!q.is_zero());
    }

    #[test]
    fn zero_is_valid() {
        let Ok(q) = Quantity::new(0.0) else {
            panic!("expected Ok");
        };
        assert!(q.is_zero());
    }

    #[test]
    fn negative_zero_is_zero() {
        let Ok(q) = Quantity::new(-0.0) else {
            panic!("expected Ok");
        };
        assert!(q.is_zero());
        assert_eq!(format!("{q}"), "0");
    }

    #[test]
    fn negative_rejected() {
        assert!(matches!(
            Quantity::new(-0.001),
            Err(CurveError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn non_finite_rejected() {
        assert!(Quantity::new(f64::NAN).is_err());
        assert!(Quantity::new(f64::INFINITY).is_err());
        assert!(Quantity::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn try_from_f64() {
        let q: Result<Quantity, _> = 5.0.try_into();
        assert!(q.is_ok());
    }
}
