//! # Bonding Curve Engine
//!
//! Constant-product bonding-curve pricing: given a pool snapshot, compute
//! the spot price, the cost to buy N shares, the payout to sell N shares,
//! and check that `shares × cash = k` still holds.
//!
//! The engine is pure.  It never mutates a pool; it returns quotes and, on
//! request, the next snapshot.  Persisting that snapshot (and serializing
//! concurrent trades against the same pool) belongs to the caller.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `ledger` | yes | In-memory per-pool serialized store ([`ledger`]) |
//! | `serde` | no | `Serialize`/`Deserialize` for pools, configs and quotes |
//!
//! # Quick Start
//!
//! ```rust
//! use bonding_curve_engine::config::PoolConfig;
//! use bonding_curve_engine::domain::Pool;
//! use bonding_curve_engine::engine;
//! use bonding_curve_engine::traits::FromConfig;
//!
//! // 1. Create a pool: k = 100 000 × 1 000 000 = 1e11
//! let config = PoolConfig::new(100_000.0, 1_000_000.0, 1_000.0).expect("valid config");
//! let pool = Pool::from_config(&config).expect("valid pool");
//!
//! // 2. Quote
//! assert_eq!(engine::price(&pool).get(), 10.0);
//! let quote = engine::simulate_buy(&pool, 1_000.0).expect("above reserve floor");
//! assert!((quote.cost() - 10_101.01).abs() < 0.01);
//!
//! // 3. Commit: build the next snapshot and check it before persisting
//! let next = pool.after_buy(1_000.0).expect("above reserve floor");
//! assert!(engine::verify_invariant(
//!     next.shares_in_pool(),
//!     next.cash_in_pool(),
//!     next.k_constant(),
//! ));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Caller /    │  persists snapshots, serializes trades per pool
//! │  PoolLedger  │
//! └──────┬───────┘
//!        │ price / simulate_buy / simulate_sell / market_cap
//!        ▼
//! ┌──────────────┐
//! │    Engine    │  ConstantProductEngine (PricingCurve)
//! └──────┬───────┘
//!        │ reads
//!        ▼
//! ┌──────────────┐
//! │    Domain    │  Pool, Quantity, Price, BuyQuote, SellQuote
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Validated value types: [`Pool`](domain::Pool), [`Price`](domain::Price), quotes |
//! | [`traits`] | [`PricingCurve`](traits::PricingCurve), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), [`EngineConfig`](config::EngineConfig) |
//! | [`engine`] | [`ConstantProductEngine`](engine::ConstantProductEngine) and free functions |
//! | [`math`]   | Checked `f64` arithmetic, invariant checker |
//! | [`error`]  | [`CurveError`](error::CurveError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
#[cfg(feature = "ledger")]
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod traits;
