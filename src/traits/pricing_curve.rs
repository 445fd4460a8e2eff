//! Core pricing trait for bonding-curve engines.
//!
//! [`PricingCurve`] is the functional surface the surrounding application
//! layer consumes:
//!
//! 1. **Quote**: [`PricingCurve::price`] returns the capped spot price.
//! 2. **Simulate**: [`PricingCurve::simulate_buy`] and
//!    [`PricingCurve::simulate_sell`] price a trade without touching the pool.
//! 3. **Verify**: [`PricingCurve::verify_invariant`] checks a candidate
//!    state against `k`.
//! 4. **Value**: [`PricingCurve::market_cap`] values the circulating supply.
//!
//! # Purity
//!
//! Every method takes the pool by shared reference and returns a fresh
//! value.  Implementations hold no mutable state, so a single engine can be
//! shared across threads freely.  Serializing trades against the *same*
//! pool is the caller's job: two trades priced from the same snapshot and
//! both committed will corrupt the invariant.

use crate::domain::{BuyQuote, Pool, Price, SellQuote};
use crate::error::CurveError;

/// Pricing operations over an immutable [`Pool`] snapshot.
///
/// # Errors
///
/// Trade simulation returns:
///
/// - [`CurveError::InvalidQuantity`]: negative or non-finite quantity
/// - [`CurveError::PoolDepleted`]: a buy would leave no shares
/// - [`CurveError::MinimumReserveViolation`]: a buy would breach the floor
/// - [`CurveError::Overflow`]: an intermediate value left the `f64` range.
///   A buy can hit this while staying above zero and above the floor: for
///   a pool with `shares = 1e-10`, `cash = 1e300`, buying all but one ulp of
///   shares puts the new cash at `k / 1.3e-26`, which is not finite.
pub trait PricingCurve {
    /// Returns the spot price `cash / shares`, capped.
    ///
    /// Never fails for a valid pool.
    #[must_use]
    fn price(&self, pool: &Pool) -> Price;

    /// Prices a buy of `quantity` shares out of the pool.
    ///
    /// # Errors
    ///
    /// See the trait-level error list.
    fn simulate_buy(&self, pool: &Pool, quantity: f64) -> Result<BuyQuote, CurveError>;

    /// Prices a sell of `quantity` shares into the pool.
    ///
    /// No reserve check applies: ownership of the sold shares is validated
    /// by the caller.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidQuantity`] or [`CurveError::Overflow`].
    fn simulate_sell(&self, pool: &Pool, quantity: f64) -> Result<SellQuote, CurveError>;

    /// Returns `true` iff `shares × cash ≈ k` within the engine's tolerance.
    #[must_use]
    fn verify_invariant(&self, shares: f64, cash: f64, k: f64) -> bool;

    /// Returns `price × (initial_shares − shares_in_pool)`.
    ///
    /// An `initial_shares` smaller than the pool's current shares yields a
    /// meaningless (negative) value rather than an error.
    #[must_use]
    fn market_cap(&self, pool: &Pool, initial_shares: f64) -> f64;
}
