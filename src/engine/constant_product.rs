//! Constant-product bonding-curve engine.
//!
//! The curve is the hyperbola `shares × cash = k`.  The spot price at the
//! current point is its slope, `cash / shares`.  A trade of non-trivial
//! size moves along the curve, so its cost is the exact integral between
//! the two points rather than `price × quantity`:
//!
//! # Buy (shares leave the pool)
//!
//! 1. `new_shares = shares − quantity` (must be `> 0` and `≥ min_reserve`)
//! 2. `new_cash   = k / new_shares`
//! 3. `cost       = new_cash − cash`
//!
//! # Sell (shares enter the pool)
//!
//! 1. `new_shares = shares + quantity`
//! 2. `new_cash   = k / new_shares`
//! 3. `payout     = cash − new_cash`
//!
//! Every reported price is clamped to [`EngineConfig::price_cap`].

use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::domain::{BuyQuote, Pool, Price, Quantity, SellQuote};
use crate::error::CurveError;
use crate::math::{verify_invariant_with, CheckedFloat};
use crate::traits::{FromConfig, PricingCurve};

/// Stateless constant-product pricing engine.
///
/// Holds only its [`EngineConfig`]; every operation is a pure function of
/// the arguments.  `Copy`, `Send` and `Sync`.
///
/// # Example
///
/// ```rust
/// use bonding_curve_engine::domain::Pool;
/// use bonding_curve_engine::engine::ConstantProductEngine;
/// use bonding_curve_engine::traits::PricingCurve;
///
/// let pool = Pool::from_parts(100_000.0, 1_000_000.0, 1e11, 1_000.0).expect("valid pool");
/// let engine = ConstantProductEngine::default();
///
/// assert_eq!(engine.price(&pool).get(), 10.0);
///
/// let quote = engine.simulate_buy(&pool, 1_000.0).expect("buy ok");
/// assert!((quote.cost() - 10_101.01).abs() < 0.01);
/// assert!(quote.resulting_price().get() > 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConstantProductEngine {
    config: EngineConfig,
}

impl ConstantProductEngine {
    /// Engine with the default cap and tolerance.
    pub const DEFAULT: Self = Self {
        config: EngineConfig::DEFAULT,
    };

    /// Creates an engine from an already-validated configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the uncapped spot price `cash / shares`.
    ///
    /// May be `+∞` for a pool whose shares underflow relative to its cash.
    #[must_use]
    pub fn raw_price(&self, pool: &Pool) -> f64 {
        pool.cash_in_pool() / pool.shares_in_pool()
    }

    /// Returns `true` if `pool` satisfies the invariant under this engine's
    /// tolerance.
    #[must_use]
    pub fn verify_pool(&self, pool: &Pool) -> bool {
        pool.check_invariant(self.config.invariant_tolerance())
    }

    fn capped(&self, shares: f64, cash: f64) -> Price {
        Price::capped(cash / shares, self.config.price_cap())
    }

    fn buy(&self, pool: &Pool, quantity: Quantity) -> Result<BuyQuote, CurveError> {
        if quantity.is_zero() {
            return Ok(BuyQuote::new(quantity, 0.0, self.price(pool)));
        }
        let new_shares = pool.shares_after_buy(quantity)?;
        let new_cash = pool.cash_at(new_shares)?;
        let cost = CheckedFloat::new(new_cash)
            .checked_sub(&CheckedFloat::new(pool.cash_in_pool()))?
            .get();
        Ok(BuyQuote::new(
            quantity,
            cost,
            self.capped(new_shares, new_cash),
        ))
    }

    fn sell(&self, pool: &Pool, quantity: Quantity) -> Result<SellQuote, CurveError> {
        if quantity.is_zero() {
            return Ok(SellQuote::new(quantity, 0.0, self.price(pool)));
        }
        let new_shares = pool.shares_after_sell(quantity)?;
        let new_cash = pool.cash_at(new_shares)?;
        let payout = CheckedFloat::new(pool.cash_in_pool())
            .checked_sub(&CheckedFloat::new(new_cash))?
            .get();
        Ok(SellQuote::new(
            quantity,
            payout,
            self.capped(new_shares, new_cash),
        ))
    }
}

impl FromConfig<EngineConfig> for ConstantProductEngine {
    /// Creates an engine after validating `config`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`EngineConfig::validate`].
    fn from_config(config: &EngineConfig) -> Result<Self, CurveError> {
        config.validate()?;
        Ok(Self::new(*config))
    }
}

impl PricingCurve for ConstantProductEngine {
    fn price(&self, pool: &Pool) -> Price {
        self.capped(pool.shares_in_pool(), pool.cash_in_pool())
    }

    fn simulate_buy(&self, pool: &Pool, quantity: f64) -> Result<BuyQuote, CurveError> {
        let result = Quantity::new(quantity).and_then(|q| self.buy(pool, q));
        match &result {
            Ok(quote) => trace!(
                quantity,
                cost = quote.cost(),
                resulting_price = quote.resulting_price().get(),
                "buy simulated"
            ),
            Err(err) => debug!(
                quantity,
                shares_in_pool = pool.shares_in_pool(),
                min_reserve_shares = pool.min_reserve_shares(),
                error = %err,
                "buy rejected"
            ),
        }
        result
    }

    fn simulate_sell(&self, pool: &Pool, quantity: f64) -> Result<SellQuote, CurveError> {
        let result = Quantity::new(quantity).and_then(|q| self.sell(pool, q));
        match &result {
            Ok(quote) => trace!(
                quantity,
                payout = quote.payout(),
                resulting_price = quote.resulting_price().get(),
                "sell simulated"
            ),
            Err(err) => debug!(
                quantity,
                shares_in_pool = pool.shares_in_pool(),
                error = %err,
                "sell rejected"
            ),
        }
        result
    }

    fn verify_invariant(&self, shares: f64, cash: f64, k: f64) -> bool {
        verify_invariant_with(shares, cash, k, self.config.invariant_tolerance())
    }

    fn market_cap(&self, pool: &Pool, initial_shares: f64) -> f64 {
        let issued = initial_shares - pool.shares_in_pool();
        self.price(pool).get() * issued
    }
}
