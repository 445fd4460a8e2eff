//! Spot price of the pooled asset in quote currency.

use core::fmt;

use crate::error::CurveError;

/// Price of one share expressed in quote currency (`cash / shares`).
///
/// Wraps an `f64` value that is always finite and non-negative.
///
/// # Examples
///
/// ```
/// use bonding_curve_engine::domain::Price;
///
/// let price = Price::new(10.0);
/// assert!(price.is_ok());
/// assert!(Price::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Price(f64);

impl Price {
    /// Price of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] if the value is
    /// negative, NaN, or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(CurveError::InvalidConfiguration(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Clamps a raw curve value into `[0, cap]`.
    ///
    /// `+∞` (a pool with vanishing shares) clamps to `cap`; `NaN` maps to
    /// zero.  The result is never negative, even for a negative `cap`.
    #[must_use]
    pub fn capped(raw: f64, cap: f64) -> Self {
        if raw.is_nan() {
            return Self::ZERO;
        }
        Self(raw.min(cap).max(0.0))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for Price {
    type Error = CurveError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let Ok(p) = Price::new(1.5) else {
            panic!("expected Ok");
        };
        assert!((p.get() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn new_rejects_negative_and_non_finite() {
        assert!(Price::new(-1.0).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }

    #[test]
    fn capped_below_cap_is_unchanged() {
        assert_eq!(Price::capped(10.0, 100.0).get(), 10.0);
    }

    #[test]
    fn capped_above_cap_is_cap() {
        assert_eq!(Price::capped(200.0, 100.0).get(), 100.0);
        assert_eq!(Price::capped(f64::INFINITY, 100.0).get(), 100.0);
    }

    #[test]
    fn capped_with_negative_cap_is_zero() {
        assert!(Price::capped(10.0, -5.0).is_zero());
    }

    #[test]
    fn capped_nan_is_zero() {
        assert!(Price::capped(f64::NAN, 100.0).is_zero());
    }

    #[test]
    fn ordering() {
        assert!(Price::ZERO < Price::capped(1.0, 100.0));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Price::capped(1.5, 100.0)), "1.5");
    }
}
