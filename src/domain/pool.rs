//! Immutable snapshot of a bonding-curve pool.
//!
//! A [`Pool`] is the unit of trading state: shares held by the pool, cash
//! held by the pool, the frozen invariant `k`, and the reserve floor.  The
//! engine only reads snapshots; [`Pool::after_buy`] and
//! [`Pool::after_sell`] build the *next* snapshot for a caller that has
//! decided to commit a trade.
//!
//! # Drift
//!
//! Post-trade cash is always re-derived as `k / shares`, never accumulated
//! from trade costs and payouts.  `shares × cash` stays within one rounding
//! step of `k` regardless of trade count.

use super::Quantity;
use crate::config::PoolConfig;
use crate::error::CurveError;
use crate::math::{verify_invariant_with, CheckedFloat, DEFAULT_RELATIVE_TOLERANCE};
use crate::traits::FromConfig;

/// Snapshot of a constant-product pool.
///
/// # Invariants
///
/// - All fields are finite.
/// - `shares_in_pool > 0` and `cash_in_pool > 0`.
/// - `k_constant > 0` and `shares_in_pool × cash_in_pool ≈ k_constant`.
/// - `min_reserve_shares ≥ 0`.
///
/// # Examples
///
/// ```
/// use bonding_curve_engine::domain::Pool;
///
/// let pool = Pool::from_parts(100_000.0, 1_000_000.0, 1e11, 1_000.0).expect("valid pool");
/// let next = pool.after_buy(1_000.0).expect("above reserve floor");
/// assert!(next.shares_in_pool() < pool.shares_in_pool());
/// assert_eq!(next.k_constant(), pool.k_constant());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PoolRecord", into = "PoolRecord"))]
pub struct Pool {
    shares_in_pool: f64,
    cash_in_pool: f64,
    k_constant: f64,
    min_reserve_shares: f64,
}

impl Pool {
    /// Rehydrates a snapshot from its stored fields.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidPool`] if any field is non-finite or out
    /// of range, or if `shares × cash` does not match `k`.
    pub fn from_parts(
        shares_in_pool: f64,
        cash_in_pool: f64,
        k_constant: f64,
        min_reserve_shares: f64,
    ) -> crate::error::Result<Self> {
        let pool = Self {
            shares_in_pool,
            cash_in_pool,
            k_constant,
            min_reserve_shares,
        };
        pool.validate()?;
        Ok(pool)
    }

    /// Validates all snapshot invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidPool`] describing the first violation.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.shares_in_pool.is_finite() || self.shares_in_pool <= 0.0 {
            return Err(CurveError::InvalidPool(
                "shares in pool must be finite and positive",
            ));
        }
        if !self.cash_in_pool.is_finite() || self.cash_in_pool <= 0.0 {
            return Err(CurveError::InvalidPool(
                "cash in pool must be finite and positive",
            ));
        }
        if !self.k_constant.is_finite() || self.k_constant <= 0.0 {
            return Err(CurveError::InvalidPool(
                "k constant must be finite and positive",
            ));
        }
        if !self.min_reserve_shares.is_finite() || self.min_reserve_shares < 0.0 {
            return Err(CurveError::InvalidPool(
                "minimum reserve must be finite and non-negative",
            ));
        }
        if !self.check_invariant(DEFAULT_RELATIVE_TOLERANCE) {
            return Err(CurveError::InvalidPool(
                "shares × cash does not match k constant",
            ));
        }
        Ok(())
    }

    /// Shares currently held by the pool.
    #[must_use]
    pub const fn shares_in_pool(&self) -> f64 {
        self.shares_in_pool
    }

    /// Quote currency currently held by the pool.
    #[must_use]
    pub const fn cash_in_pool(&self) -> f64 {
        self.cash_in_pool
    }

    /// Invariant target frozen at creation.
    #[must_use]
    pub const fn k_constant(&self) -> f64 {
        self.k_constant
    }

    /// Reserve floor enforced on buys.
    #[must_use]
    pub const fn min_reserve_shares(&self) -> f64 {
        self.min_reserve_shares
    }

    /// Returns `true` if `shares × cash` is within `relative × k` of `k`.
    #[must_use]
    pub fn check_invariant(&self, relative: f64) -> bool {
        verify_invariant_with(
            self.shares_in_pool,
            self.cash_in_pool,
            self.k_constant,
            relative,
        )
    }

    /// Shares left in the pool after buying `quantity`.
    ///
    /// Checks are ordered: depletion first, then the reserve floor.
    pub(crate) fn shares_after_buy(&self, quantity: Quantity) -> crate::error::Result<f64> {
        let projected = CheckedFloat::new(self.shares_in_pool)
            .checked_sub(&CheckedFloat::new(quantity.get()))?
            .get();
        if projected <= 0.0 {
            return Err(CurveError::PoolDepleted);
        }
        if projected < self.min_reserve_shares {
            return Err(CurveError::MinimumReserveViolation {
                projected,
                minimum: self.min_reserve_shares,
            });
        }
        Ok(projected)
    }

    /// Shares in the pool after selling `quantity` into it.
    pub(crate) fn shares_after_sell(&self, quantity: Quantity) -> crate::error::Result<f64> {
        Ok(CheckedFloat::new(self.shares_in_pool)
            .checked_add(&CheckedFloat::new(quantity.get()))?
            .get())
    }

    /// Cash on the curve at `shares`: `k / shares`.
    pub(crate) fn cash_at(&self, shares: f64) -> crate::error::Result<f64> {
        Ok(CheckedFloat::new(self.k_constant)
            .checked_div(&CheckedFloat::new(shares))?
            .get())
    }

    /// Builds the snapshot that results from buying `quantity` shares.
    ///
    /// A zero quantity returns an identical snapshot.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidQuantity`] for a negative or non-finite quantity.
    /// - [`CurveError::PoolDepleted`] if no shares would remain.
    /// - [`CurveError::MinimumReserveViolation`] if the floor would be breached.
    pub fn after_buy(&self, quantity: f64) -> crate::error::Result<Self> {
        let quantity = Quantity::new(quantity)?;
        if quantity.is_zero() {
            return Ok(*self);
        }
        let shares = self.shares_after_buy(quantity)?;
        self.moved_to(shares)
    }

    /// Builds the snapshot that results from selling `quantity` shares.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidQuantity`] for a negative or non-finite quantity.
    /// - [`CurveError::Overflow`] if the new shares or cash are not finite.
    pub fn after_sell(&self, quantity: f64) -> crate::error::Result<Self> {
        let quantity = Quantity::new(quantity)?;
        if quantity.is_zero() {
            return Ok(*self);
        }
        let shares = self.shares_after_sell(quantity)?;
        self.moved_to(shares)
    }

    fn moved_to(&self, shares: f64) -> crate::error::Result<Self> {
        let cash = self.cash_at(shares)?;
        if cash <= 0.0 {
            return Err(CurveError::Overflow("cash underflowed to zero"));
        }
        Ok(Self {
            shares_in_pool: shares,
            cash_in_pool: cash,
            k_constant: self.k_constant,
            min_reserve_shares: self.min_reserve_shares,
        })
    }
}

impl FromConfig<PoolConfig> for Pool {
    /// Creates the genesis snapshot: `k = initial_shares × initial_cash`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Self::from_parts(
            config.initial_shares(),
            config.initial_cash(),
            config.k_constant(),
            config.min_reserve_shares(),
        )
    }
}

/// Wire shape of a pool record exchanged with the persistence layer.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PoolRecord {
    shares_in_pool: f64,
    cash_in_pool: f64,
    k_constant: f64,
    min_reserve_shares: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<PoolRecord> for Pool {
    type Error = CurveError;

    fn try_from(r: PoolRecord) -> Result<Self, Self::Error> {
        Self::from_parts(
            r.shares_in_pool,
            r.cash_in_pool,
            r.k_constant,
            r.min_reserve_shares,
        )
    }
}

#[cfg(feature = "serde")]
impl From<Pool> for PoolRecord {
    fn from(p: Pool) -> Self {
        Self {
            shares_in_pool: p.shares_in_pool,
            cash_in_pool: p.cash_in_pool,
            k_constant: p.k_constant,
            min_reserve_shares: p.min_reserve_shares,
        }
    }
}
