//! In-memory pool store that serializes trades per pool.
//!
//! Every trade is priced from an exact pre-trade snapshot, so two trades
//! against the same pool must never interleave their read and write.
//! [`PoolLedger`] shows both ways a transaction layer can guarantee this:
//!
//! - **Per-pool lock**: [`PoolLedger::execute_buy`] and
//!   [`PoolLedger::execute_sell`] hold the pool's map entry for the whole
//!   read → price → verify → write sequence.
//! - **Optimistic concurrency**: a caller reads a [`VersionedPool`],
//!   prices the trade off-lock, and submits the result through
//!   [`PoolLedger::commit`], which only succeeds if the version is
//!   unchanged.
//!
//! Pools are independent; there is no cross-pool locking.

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::domain::{BuyQuote, Pool, SellQuote};
use crate::engine::ConstantProductEngine;
use crate::error::CurveError;
use crate::traits::PricingCurve;

/// Identifier the external layer assigns to a pool.
pub type PoolId = u64;

/// A pool snapshot together with its commit counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VersionedPool {
    /// Current snapshot.
    pub pool: Pool,
    /// Number of state changes committed since registration.
    pub version: u64,
}

/// A committed trade: the quote the trader was charged and the new state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeReceipt<Q> {
    /// Quote used to settle the trade.
    pub quote: Q,
    /// Pool state after the commit.
    pub state: VersionedPool,
}

/// Thread-safe store of pools keyed by [`PoolId`].
#[derive(Debug, Default)]
pub struct PoolLedger {
    pools: DashMap<PoolId, VersionedPool>,
    engine: ConstantProductEngine,
}

impl PoolLedger {
    /// Creates an empty ledger using the default engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ledger pricing with `engine`.
    #[must_use]
    pub fn with_engine(engine: ConstantProductEngine) -> Self {
        Self {
            pools: DashMap::new(),
            engine,
        }
    }

    /// Returns the pricing engine.
    #[must_use]
    pub const fn engine(&self) -> &ConstantProductEngine {
        &self.engine
    }

    /// Registers `pool` at version 0, returning any pool it replaced.
    pub fn insert(&self, id: PoolId, pool: Pool) -> Option<VersionedPool> {
        let previous = self.pools.insert(id, VersionedPool { pool, version: 0 });
        debug!(
            pool_id = id,
            shares_in_pool = pool.shares_in_pool(),
            cash_in_pool = pool.cash_in_pool(),
            total_pools = self.pools.len(),
            replaced = previous.is_some(),
            "pool registered"
        );
        previous
    }

    /// Removes a pool from the ledger.
    pub fn remove(&self, id: PoolId) -> Option<VersionedPool> {
        self.pools.remove(&id).map(|(_, v)| v)
    }

    /// Returns the current snapshot of a pool.
    #[must_use]
    pub fn get(&self, id: PoolId) -> Option<VersionedPool> {
        self.pools.get(&id).map(|v| *v)
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Ids of all registered pools, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<PoolId> {
        self.pools.iter().map(|e| *e.key()).collect()
    }

    /// Buys `quantity` shares from pool `id` under the pool's lock.
    ///
    /// # Errors
    ///
    /// - [`CurveError::PoolNotFound`] for an unknown id.
    /// - Any error from [`PricingCurve::simulate_buy`]; the pool is left
    ///   untouched.
    /// - [`CurveError::InvariantViolation`] if the derived state fails the
    ///   invariant check.
    pub fn execute_buy(
        &self,
        id: PoolId,
        quantity: f64,
    ) -> crate::error::Result<TradeReceipt<BuyQuote>> {
        let mut entry = self.pools.get_mut(&id).ok_or(CurveError::PoolNotFound(id))?;
        let current = *entry;
        let quote = self.engine.simulate_buy(&current.pool, quantity)?;
        let next = current.pool.after_buy(quantity)?;
        let state = self.advance(id, current, next)?;
        *entry = state;
        Ok(TradeReceipt { quote, state })
    }

    /// Sells `quantity` shares into pool `id` under the pool's lock.
    ///
    /// The seller's ownership of `quantity` is not checked here.
    ///
    /// # Errors
    ///
    /// Same as [`PoolLedger::execute_buy`], minus the reserve checks.
    pub fn execute_sell(
        &self,
        id: PoolId,
        quantity: f64,
    ) -> crate::error::Result<TradeReceipt<SellQuote>> {
        let mut entry = self.pools.get_mut(&id).ok_or(CurveError::PoolNotFound(id))?;
        let current = *entry;
        let quote = self.engine.simulate_sell(&current.pool, quantity)?;
        let next = current.pool.after_sell(quantity)?;
        let state = self.advance(id, current, next)?;
        *entry = state;
        Ok(TradeReceipt { quote, state })
    }

    /// Compare-and-swap commit of a state computed outside the lock.
    ///
    /// # Errors
    ///
    /// - [`CurveError::PoolNotFound`] for an unknown id.
    /// - [`CurveError::VersionConflict`] if another writer committed since
    ///   `expected_version` was read.
    /// - [`CurveError::InvariantViolation`] if `next` changes `k` or fails
    ///   the invariant check.
    pub fn commit(
        &self,
        id: PoolId,
        expected_version: u64,
        next: Pool,
    ) -> crate::error::Result<VersionedPool> {
        let mut entry = self.pools.get_mut(&id).ok_or(CurveError::PoolNotFound(id))?;
        let current = *entry;
        if current.version != expected_version {
            warn!(
                pool_id = id,
                expected = expected_version,
                actual = current.version,
                "commit rejected: stale version"
            );
            return Err(CurveError::VersionConflict {
                expected: expected_version,
                actual: current.version,
            });
        }
        let state = self.advance(id, current, next)?;
        *entry = state;
        Ok(state)
    }

    /// Checks `next` against `current` and returns the bumped state.
    ///
    /// An unchanged pool keeps its version.
    fn advance(
        &self,
        id: PoolId,
        current: VersionedPool,
        next: Pool,
    ) -> crate::error::Result<VersionedPool> {
        if next == current.pool {
            return Ok(current);
        }
        if next.k_constant() != current.pool.k_constant() {
            warn!(
                pool_id = id,
                stored_k = current.pool.k_constant(),
                proposed_k = next.k_constant(),
                "commit rejected: k constant changed"
            );
            return Err(CurveError::InvariantViolation("k constant must not change"));
        }
        if !self.engine.verify_pool(&next) {
            warn!(
                pool_id = id,
                shares_in_pool = next.shares_in_pool(),
                cash_in_pool = next.cash_in_pool(),
                k_constant = next.k_constant(),
                "commit rejected: invariant violated"
            );
            return Err(CurveError::InvariantViolation(
                "shares × cash does not match k constant",
            ));
        }
        let state = VersionedPool {
            pool: next,
            version: current.version + 1,
        };
        debug!(
            pool_id = id,
            version = state.version,
            shares_in_pool = next.shares_in_pool(),
            cash_in_pool = next.cash_in_pool(),
            "pool state committed"
        );
        Ok(state)
    }
}
