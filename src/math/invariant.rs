//! Constant-product invariant checker.
//!
//! The curve is defined by `shares × cash = k` with `k` frozen at pool
//! creation.  The check accepts a deviation proportional to `|k|`.

/// Default relative tolerance for [`verify_invariant`].
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-9;

/// Absolute tolerance for a given `k` and relative epsilon.
///
/// Clamped below by `f64::MIN_POSITIVE` so that `k = 0` still yields a
/// positive bound.
#[inline]
#[must_use]
pub fn invariant_tolerance(k: f64, relative: f64) -> f64 {
    relative * k.abs().max(f64::MIN_POSITIVE)
}

/// Returns `true` iff `|shares × cash − k|` is within the default relative
/// tolerance of `k`.
///
/// Non-finite inputs (or a non-finite product) always fail the check.
///
/// # Examples
///
/// ```
/// use bonding_curve_engine::math::verify_invariant;
///
/// assert!(verify_invariant(100_000.0, 1_000_000.0, 1e11));
/// assert!(!verify_invariant(100_000.0, 1_000_001.0, 1e11));
/// ```
#[must_use]
pub fn verify_invariant(shares: f64, cash: f64, k: f64) -> bool {
    verify_invariant_with(shares, cash, k, DEFAULT_RELATIVE_TOLERANCE)
}

/// [`verify_invariant`] with an explicit relative tolerance.
#[must_use]
pub fn verify_invariant_with(shares: f64, cash: f64, k: f64, relative: f64) -> bool {
    if !shares.is_finite() || !cash.is_finite() || !k.is_finite() {
        return false;
    }
    let product = shares * cash;
    if !product.is_finite() {
        return false;
    }
    (product - k).abs() <= invariant_tolerance(k, relative)
}
