//! Genesis parameters for a bonding-curve pool.

use crate::error::CurveError;

/// Configuration for creating a new pool.
///
/// Defines the immutable parameters fixed at pool creation: initial shares,
/// initial cash and the reserve floor.
///
/// # Derived Values
///
/// - Invariant: `k = initial_shares × initial_cash`
/// - Initial price: `P₀ = initial_cash / initial_shares`
///
/// # Validation
///
/// - Initial shares and cash must be finite and positive.
/// - Their product must be finite.
/// - The reserve floor must be finite, non-negative and strictly below the
///   initial shares, so a fresh pool can always be bought from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "PoolConfigRecord", into = "PoolConfigRecord")
)]
pub struct PoolConfig {
    initial_shares: f64,
    initial_cash: f64,
    min_reserve_shares: f64,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] if any parameter is out
    /// of range.
    pub fn new(
        initial_shares: f64,
        initial_cash: f64,
        min_reserve_shares: f64,
    ) -> Result<Self, CurveError> {
        let config = Self {
            initial_shares,
            initial_cash,
            min_reserve_shares,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] describing the first
    /// violation.
    pub fn validate(&self) -> Result<(), CurveError> {
        if !self.initial_shares.is_finite() || self.initial_shares <= 0.0 {
            return Err(CurveError::InvalidConfiguration(
                "initial shares must be finite and positive",
            ));
        }
        if !self.initial_cash.is_finite() || self.initial_cash <= 0.0 {
            return Err(CurveError::InvalidConfiguration(
                "initial cash must be finite and positive",
            ));
        }
        if !self.k_constant().is_finite() {
            return Err(CurveError::InvalidConfiguration(
                "initial shares × cash overflows",
            ));
        }
        if !self.min_reserve_shares.is_finite() || self.min_reserve_shares < 0.0 {
            return Err(CurveError::InvalidConfiguration(
                "minimum reserve must be finite and non-negative",
            ));
        }
        if self.min_reserve_shares >= self.initial_shares {
            return Err(CurveError::InvalidConfiguration(
                "minimum reserve must be below initial shares",
            ));
        }
        Ok(())
    }

    /// Returns the initial shares held by the pool.
    #[must_use]
    pub const fn initial_shares(&self) -> f64 {
        self.initial_shares
    }

    /// Returns the initial cash held by the pool.
    #[must_use]
    pub const fn initial_cash(&self) -> f64 {
        self.initial_cash
    }

    /// Returns the reserve floor.
    #[must_use]
    pub const fn min_reserve_shares(&self) -> f64 {
        self.min_reserve_shares
    }

    /// Returns the invariant `k` this configuration freezes.
    #[must_use]
    pub fn k_constant(&self) -> f64 {
        self.initial_shares * self.initial_cash
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PoolConfigRecord {
    initial_shares: f64,
    initial_cash: f64,
    min_reserve_shares: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<PoolConfigRecord> for PoolConfig {
    type Error = CurveError;

    fn try_from(r: PoolConfigRecord) -> Result<Self, Self::Error> {
        Self::new(r.initial_shares, r.initial_cash, r.min_reserve_shares)
    }
}

#[cfg(feature = "serde")]
impl From<PoolConfig> for PoolConfigRecord {
    fn from(c: PoolConfig) -> Self {
        Self {
            initial_shares: c.initial_shares,
            initial_cash: c.initial_cash,
            min_reserve_shares: c.min_reserve_shares,
        }
    }
}
