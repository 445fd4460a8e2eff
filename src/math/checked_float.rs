//! Checked `f64` arithmetic for curve calculations.
//!
//! [`CheckedFloat`] is a thin newtype over `f64` whose arithmetic methods
//! return [`Err`] instead of silently producing `NaN` or `±∞`.  The curve
//! formulas chain these calls with `?` so that an extreme but finite pool
//! state surfaces as a [`CurveError`] rather than a poisoned quote.
//!
//! # Precision characteristics
//!
//! | Aspect | Value |
//! |--------|-------|
//! | Significant digits | ~15–17 |
//! | Range | ±2^1024 |
//! | Determinism | Subject to IEEE 754 rounding |

use crate::error::CurveError;

/// IEEE 754 `f64` with checked arithmetic.
///
/// # Examples
///
/// ```
/// use bonding_curve_engine::math::CheckedFloat;
///
/// let a = CheckedFloat::new(10.0);
/// let b = CheckedFloat::new(4.0);
/// let q = a.checked_div(&b);
/// assert_eq!(q.map(|v| v.get()), Ok(2.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CheckedFloat(f64);

impl CheckedFloat {
    /// Creates a new `CheckedFloat` from a raw `f64`.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64` value.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the sum is not finite.
    pub fn checked_add(&self, other: &Self) -> Result<Self, CurveError> {
        finite(self.0 + other.0, "float addition overflow")
    }

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if the difference is not finite.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, CurveError> {
        finite(self.0 - other.0, "float subtraction overflow")
    }

    /// Checked division.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DivisionByZero`] if `other` is zero and
    /// [`CurveError::Overflow`] if the quotient is not finite.
    pub fn checked_div(&self, other: &Self) -> Result<Self, CurveError> {
        if other.0 == 0.0 {
            return Err(CurveError::DivisionByZero);
        }
        finite(self.0 / other.0, "float division overflow")
    }
}

fn finite(value: f64, context: &'static str) -> Result<CheckedFloat, CurveError> {
    if value.is_finite() {
        Ok(CheckedFloat(value))
    } else {
        Err(CurveError::Overflow(context))
    }
}
