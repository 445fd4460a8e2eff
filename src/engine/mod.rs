//! Pricing engine implementation and crate-level convenience functions.
//!
//! [`ConstantProductEngine`] implements [`PricingCurve`] for the hyperbola
//! `shares × cash = k`.  The free functions in this module run the default
//! engine (price cap `100`, relative tolerance `1e-9`) and mirror the call
//! table exposed to the application layer:
//!
//! | Call | Output |
//! |------|--------|
//! | [`price`] | capped spot price |
//! | [`simulate_buy`] | [`BuyQuote`] or error |
//! | [`simulate_sell`] | [`SellQuote`] or error |
//! | [`verify_invariant`] | `bool` |
//! | [`market_cap`] | `f64` |

mod constant_product;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::ConstantProductEngine;

use crate::domain::{BuyQuote, Pool, Price, SellQuote};
use crate::traits::PricingCurve;

pub use crate::math::verify_invariant;

/// Capped spot price of `pool` under the default engine.
#[must_use]
pub fn price(pool: &Pool) -> Price {
    ConstantProductEngine::DEFAULT.price(pool)
}

/// Simulates a buy under the default engine.
///
/// # Errors
///
/// See [`PricingCurve::simulate_buy`].
pub fn simulate_buy(pool: &Pool, quantity: f64) -> crate::error::Result<BuyQuote> {
    ConstantProductEngine::DEFAULT.simulate_buy(pool, quantity)
}

/// Simulates a sell under the default engine.
///
/// # Errors
///
/// See [`PricingCurve::simulate_sell`].
pub fn simulate_sell(pool: &Pool, quantity: f64) -> crate::error::Result<SellQuote> {
    ConstantProductEngine::DEFAULT.simulate_sell(pool, quantity)
}

/// Market capitalisation of the shares issued out of `pool`.
#[must_use]
pub fn market_cap(pool: &Pool, initial_shares: f64) -> f64 {
    ConstantProductEngine::DEFAULT.market_cap(pool, initial_shares)
}
