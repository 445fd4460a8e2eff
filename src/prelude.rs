//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use bonding_curve_engine::prelude::*;
//! ```

pub use crate::config::{EngineConfig, PoolConfig};
pub use crate::domain::{BuyQuote, Pool, Price, Quantity, SellQuote};
pub use crate::engine::ConstantProductEngine;
pub use crate::error::{CurveError, Result};
pub use crate::traits::{FromConfig, PricingCurve};

#[cfg(feature = "ledger")]
pub use crate::ledger::{PoolId, PoolLedger, TradeReceipt, VersionedPool};
