//! Bonding curve walkthrough.
//!
//! Creates a pool (`shares × cash = k`), quotes buys and sells, commits
//! trades through a [`PoolLedger`], and shows the price cap and reserve
//! floor rejecting out-of-range states.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=bonding_curve_engine=debug cargo run --example bonding_curve
//! ```

use bonding_curve_engine::config::{EngineConfig, PoolConfig};
use bonding_curve_engine::domain::Pool;
use bonding_curve_engine::engine::ConstantProductEngine;
use bonding_curve_engine::ledger::PoolLedger;
use bonding_curve_engine::traits::{FromConfig, PricingCurve};
use tracing_subscriber::EnvFilter;

const POOL_ID: u64 = 1;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Constant Product Bonding Curve (shares × cash = k) ===\n");

    // ── 1. Configure the engine and the pool ────────────────────────────
    let engine = ConstantProductEngine::from_config(&EngineConfig::default())?;
    let config = PoolConfig::new(100_000.0, 1_000_000.0, 1_000.0)?;
    let pool = Pool::from_config(&config)?;
    let initial_shares = config.initial_shares();

    println!("Pool created");
    println!("  Shares:       {}", pool.shares_in_pool());
    println!("  Cash:         {}", pool.cash_in_pool());
    println!("  k:            {}", pool.k_constant());
    println!("  Reserve:      {}", pool.min_reserve_shares());
    println!("  Price cap:    {}", engine.config().price_cap());

    // ── 2. Spot price ───────────────────────────────────────────────────
    let spot = engine.price(&pool);
    println!("\nSpot price: {spot}");

    // ── 3. Quote a buy without touching the pool ────────────────────────
    let quote = engine.simulate_buy(&pool, 1_000.0)?;
    println!("\n--- Quote: buy 1 000 shares ---");
    println!("  Cost:            {:.4}", quote.cost());
    println!("  Resulting price: {}", quote.resulting_price());
    if let Some(avg) = quote.average_price() {
        println!("  Average price:   {avg:.4}");
    }
    if let Some(slip) = quote.slippage(spot) {
        println!("  Slippage:        {:.4}%", slip * 100.0);
    }

    // ── 4. Commit trades through the ledger ─────────────────────────────
    let ledger = PoolLedger::with_engine(engine);
    ledger.insert(POOL_ID, pool);

    let bought = ledger.execute_buy(POOL_ID, 5_000.0)?;
    println!("\n--- Buy 5 000 shares ---");
    println!("  Charged:      {:.4}", bought.quote.cost());
    println!("  New price:    {}", engine.price(&bought.state.pool));
    println!("  Version:      {}", bought.state.version);
    println!(
        "  Market cap:   {:.2}",
        engine.market_cap(&bought.state.pool, initial_shares)
    );

    let sold = ledger.execute_sell(POOL_ID, 2_000.0)?;
    println!("\n--- Sell 2 000 shares ---");
    println!("  Paid out:     {:.4}", sold.quote.payout());
    println!("  New price:    {}", engine.price(&sold.state.pool));
    println!("  Version:      {}", sold.state.version);

    // ── 5. Verify the invariant on the stored state ─────────────────────
    let stored = sold.state.pool;
    let holds = engine.verify_invariant(
        stored.shares_in_pool(),
        stored.cash_in_pool(),
        stored.k_constant(),
    );
    println!("\nInvariant holds: {holds}");

    // ── 6. Reserve floor ────────────────────────────────────────────────
    let too_big = stored.shares_in_pool() - stored.min_reserve_shares() + 1.0;
    match ledger.execute_buy(POOL_ID, too_big) {
        Ok(_) => println!("\nUnexpected: buy past the floor was accepted"),
        Err(e) => println!("\nBuy of {too_big} shares rejected: {e}"),
    }

    // ── 7. Optimistic commit with a stale version ───────────────────────
    let snapshot = ledger.get(POOL_ID).ok_or("pool missing")?;
    let next = snapshot.pool.after_buy(100.0)?;
    ledger.commit(POOL_ID, snapshot.version, next)?;
    match ledger.commit(POOL_ID, snapshot.version, next) {
        Ok(_) => println!("Unexpected: stale commit was accepted"),
        Err(e) => println!("Stale commit rejected: {e}"),
    }

    // ── 8. Price cap ────────────────────────────────────────────────────
    let scarce = Pool::from_parts(1_000.0, 200_000.0, 2e8, 0.0)?;
    println!(
        "\nScarce pool: raw price {} capped to {}",
        engine.raw_price(&scarce),
        engine.price(&scarce)
    );

    println!("\n=== Done ===");
    Ok(())
}
