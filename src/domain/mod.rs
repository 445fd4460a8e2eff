//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the value types that model a bonding-curve pool:
//! the pool snapshot itself, trade sizes, prices, and simulated trade
//! outcomes.  Types use validated constructors to enforce invariants.

mod pool;
mod price;
mod quantity;
mod trade_quote;

pub use pool::Pool;
pub use price::Price;
pub use quantity::Quantity;
pub use trade_quote::{BuyQuote, SellQuote};
