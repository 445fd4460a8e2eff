//! Property-based tests using `proptest` for curve invariants.
//!
//! 1. **Invariant preservation**: `shares × cash ≈ k` after any trade sequence.
//! 2. **Price ceiling**: reported prices never exceed the cap.
//! 3. **Monotonicity**: buys raise the resulting price, sells lower it.
//! 4. **No arbitrage**: buy Q then sell Q never pays out more than it cost.
//! 5. **Zero trades**: identity on cost, payout and price.
//! 6. **Invalid quantities**: always rejected.

use proptest::prelude::*;

use crate::domain::Pool;
use crate::engine::ConstantProductEngine;
use crate::error::CurveError;
use crate::traits::PricingCurve;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_pool(shares: f64, cash: f64, min_reserve: f64) -> Pool {
    let Ok(pool) = Pool::from_parts(shares, cash, shares * cash, min_reserve) else {
        panic!("valid pool");
    };
    pool
}

fn engine() -> ConstantProductEngine {
    ConstantProductEngine::default()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Pool shares in [1_000, 10_000_000].
fn shares_strategy() -> impl Strategy<Value = f64> {
    (1_000u32..=10_000_000u32).prop_map(f64::from)
}

/// Pool cash in [100, 100_000_000].
fn cash_strategy() -> impl Strategy<Value = f64> {
    (100u32..=100_000_000u32).prop_map(f64::from)
}

/// Trade size as a fraction of pool shares, in [0.0001, 0.2].
fn fraction_strategy() -> impl Strategy<Value = f64> {
    (1u32..=2_000u32).prop_map(|v| f64::from(v) / 10_000.0)
}

/// A trade direction and size fraction.
fn trade_strategy() -> impl Strategy<Value = (bool, f64)> {
    (any::<bool>(), fraction_strategy())
}

// ---------------------------------------------------------------------------
// Property 1: Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_holds_across_trade_sequences(
        shares in shares_strategy(),
        cash in cash_strategy(),
        trades in prop::collection::vec(trade_strategy(), 1..50),
    ) {
        let mut pool = make_pool(shares, cash, shares / 100.0);
        let e = engine();
        prop_assert!(e.verify_invariant(pool.shares_in_pool(), pool.cash_in_pool(), pool.k_constant()));

        for (is_buy, fraction) in trades {
            let qty = pool.shares_in_pool() * fraction;
            let next = if is_buy { pool.after_buy(qty) } else { pool.after_sell(qty) };
            let Ok(next) = next else { continue; };
            prop_assert_eq!(next.k_constant(), pool.k_constant());
            prop_assert!(
                e.verify_invariant(next.shares_in_pool(), next.cash_in_pool(), next.k_constant()),
                "invariant broken: {} × {} vs {}",
                next.shares_in_pool(), next.cash_in_pool(), next.k_constant()
            );
            prop_assert!(next.shares_in_pool() >= next.min_reserve_shares() || !is_buy);
            pool = next;
        }
    }

    #[test]
    fn prop_applied_cost_matches_cash_delta(
        shares in shares_strategy(),
        cash in cash_strategy(),
        fraction in fraction_strategy(),
    ) {
        let pool = make_pool(shares, cash, 0.0);
        let qty = shares * fraction;
        let Ok(quote) = engine().simulate_buy(&pool, qty) else {
            return Ok(());
        };
        let Ok(next) = pool.after_buy(qty) else {
            return Ok(());
        };
        let delta = next.cash_in_pool() - pool.cash_in_pool();
        prop_assert!((delta - quote.cost()).abs() <= 1e-9 * next.cash_in_pool().max(1.0));
    }
}

// ---------------------------------------------------------------------------
// Property 2: Price ceiling
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_price_never_exceeds_cap(
        shares in shares_strategy(),
        cash in cash_strategy(),
    ) {
        let pool = make_pool(shares, cash, 0.0);
        let price = engine().price(&pool).get();
        prop_assert!(price <= 100.0);
        prop_assert!(price >= 0.0);
        prop_assert!(price.is_finite());
        if cash / shares <= 100.0 {
            prop_assert_eq!(price, cash / shares);
        } else {
            prop_assert_eq!(price, 100.0);
        }
    }

    #[test]
    fn prop_resulting_price_never_exceeds_cap(
        shares in shares_strategy(),
        cash in cash_strategy(),
        fraction in fraction_strategy(),
    ) {
        let pool = make_pool(shares, cash, 0.0);
        if let Ok(q) = engine().simulate_buy(&pool, shares * fraction) {
            prop_assert!(q.resulting_price().get() <= 100.0);
        }
        if let Ok(q) = engine().simulate_sell(&pool, shares * fraction) {
            prop_assert!(q.resulting_price().get() <= 100.0);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_successive_buys_raise_price(
        shares in shares_strategy(),
        fraction in (1u32..=200u32).prop_map(|v| f64::from(v) / 10_000.0),
    ) {
        // Spot price 0.01: stays well below the cap for a few buys.
        let mut pool = make_pool(shares, shares / 100.0, 0.0);
        let mut last = engine().price(&pool).get();
        for _ in 0..5 {
            let qty = pool.shares_in_pool() * fraction;
            let Ok(quote) = engine().simulate_buy(&pool, qty) else {
                panic!("buy within bounds should succeed");
            };
            prop_assert!(quote.resulting_price().get() > last);
            last = quote.resulting_price().get();
            let Ok(next) = pool.after_buy(qty) else {
                panic!("buy within bounds should apply");
            };
            pool = next;
        }
    }

    #[test]
    fn prop_successive_sells_lower_price(
        shares in shares_strategy(),
        cash in cash_strategy(),
        fraction in fraction_strategy(),
    ) {
        let mut pool = make_pool(shares, cash.min(shares * 50.0), 0.0);
        let mut last = engine().price(&pool).get();
        for _ in 0..5 {
            let qty = pool.shares_in_pool() * fraction;
            let Ok(quote) = engine().simulate_sell(&pool, qty) else {
                panic!("sell should succeed");
            };
            prop_assert!(quote.resulting_price().get() < last);
            last = quote.resulting_price().get();
            let Ok(next) = pool.after_sell(qty) else {
                panic!("sell should apply");
            };
            pool = next;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: No arbitrage
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_never_profits(
        shares in shares_strategy(),
        cash in cash_strategy(),
        fraction in fraction_strategy(),
    ) {
        let pool = make_pool(shares, cash, 0.0);
        let qty = shares * fraction;
        let Ok(buy) = engine().simulate_buy(&pool, qty) else {
            return Ok(());
        };
        let Ok(after) = pool.after_buy(qty) else {
            return Ok(());
        };
        let Ok(sell) = engine().simulate_sell(&after, qty) else {
            return Ok(());
        };
        prop_assert!(
            sell.payout() <= buy.cost() * (1.0 + 1e-9),
            "round-trip should not profit: payout={} cost={}",
            sell.payout(), buy.cost()
        );
    }

    #[test]
    fn prop_sell_then_buy_costs_more_than_paid(
        shares in shares_strategy(),
        cash in cash_strategy(),
        fraction in fraction_strategy(),
    ) {
        let pool = make_pool(shares, cash, 0.0);
        let qty = shares * fraction;
        let Ok(sell) = engine().simulate_sell(&pool, qty) else {
            return Ok(());
        };
        let Ok(after) = pool.after_sell(qty) else {
            return Ok(());
        };
        let Ok(buy) = engine().simulate_buy(&after, qty) else {
            return Ok(());
        };
        prop_assert!(buy.cost() >= sell.payout() * (1.0 - 1e-9));
    }

    #[test]
    fn prop_cost_exceeds_spot_notional(
        shares in shares_strategy(),
        cash in cash_strategy(),
        fraction in fraction_strategy(),
    ) {
        let pool = make_pool(shares, cash, 0.0);
        let qty = shares * fraction;
        let spot = cash / shares;
        let Ok(buy) = engine().simulate_buy(&pool, qty) else {
            return Ok(());
        };
        prop_assert!(buy.cost() > spot * qty);
    }
}

// ---------------------------------------------------------------------------
// Properties 5 & 6: Zero and invalid quantities
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_zero_trades_are_identity(
        shares in shares_strategy(),
        cash in cash_strategy(),
    ) {
        let pool = make_pool(shares, cash, shares / 2.0);
        let spot = engine().price(&pool);
        let Ok(buy) = engine().simulate_buy(&pool, 0.0) else {
            panic!("zero buy must succeed");
        };
        let Ok(sell) = engine().simulate_sell(&pool, 0.0) else {
            panic!("zero sell must succeed");
        };
        prop_assert_eq!(buy.cost(), 0.0);
        prop_assert_eq!(sell.payout(), 0.0);
        prop_assert_eq!(buy.resulting_price(), spot);
        prop_assert_eq!(sell.resulting_price(), spot);
    }

    #[test]
    fn prop_negative_quantities_rejected(
        shares in shares_strategy(),
        cash in cash_strategy(),
        qty in -1e9f64..-1e-9f64,
    ) {
        let pool = make_pool(shares, cash, 0.0);
        prop_assert!(matches!(
            engine().simulate_buy(&pool, qty),
            Err(CurveError::InvalidQuantity(_))
        ));
        prop_assert!(matches!(
            engine().simulate_sell(&pool, qty),
            Err(CurveError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn prop_buys_never_breach_floor(
        shares in shares_strategy(),
        cash in cash_strategy(),
        floor_fraction in (0u32..=90u32).prop_map(|v| f64::from(v) / 100.0),
        qty_fraction in (0u32..=120u32).prop_map(|v| f64::from(v) / 100.0),
    ) {
        let floor = shares * floor_fraction;
        let pool = make_pool(shares, cash, floor);
        let qty = shares * qty_fraction;
        match pool.after_buy(qty) {
            Ok(next) => prop_assert!(next.shares_in_pool() >= floor),
            Err(CurveError::PoolDepleted) => prop_assert!(qty >= shares),
            Err(CurveError::MinimumReserveViolation { projected, minimum }) => {
                prop_assert!(projected < minimum);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
