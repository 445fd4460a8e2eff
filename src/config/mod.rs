//! Pool and engine configuration structs.
//!
//! [`PoolConfig`] is the declarative blueprint for a new pool; it fixes the
//! initial reserves and therefore `k`.  [`EngineConfig`] carries the
//! parameters shared by every pool an engine prices.

mod engine_config;
mod pool_config;

pub use engine_config::{EngineConfig, DEFAULT_PRICE_CAP};
pub use pool_config::PoolConfig;
