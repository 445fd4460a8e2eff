//! Unified error types for the bonding-curve engine.
//!
//! All fallible operations across the crate return [`CurveError`] as their
//! error type.  Every variant is non-fatal: the caller rejects the trade and
//! the pool state stays exactly as it was.

use thiserror::Error;

/// Errors produced by pool construction, trade simulation and the ledger.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Trade size is negative, NaN or infinite.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A buy would leave fewer shares in the pool than the reserve floor.
    #[error("minimum reserve violation: projected shares {projected} below floor {minimum}")]
    MinimumReserveViolation {
        /// Shares the pool would hold after the buy.
        projected: f64,
        /// Configured reserve floor.
        minimum: f64,
    },

    /// A buy would drain the pool to zero (or fewer) shares.
    #[error("pool depleted: trade would leave no shares in the pool")]
    PoolDepleted,

    /// A pool snapshot failed validation.
    #[error("invalid pool: {0}")]
    InvalidPool(&'static str),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A checked floating-point operation produced a non-finite value.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// No pool is registered under the requested id.
    #[error("pool not found: {0}")]
    PoolNotFound(u64),

    /// Optimistic commit lost the race against another writer.
    #[error("version conflict: expected {expected}, found {actual}")]
    VersionConflict {
        /// Version the caller read before computing the trade.
        expected: u64,
        /// Version currently stored.
        actual: u64,
    },

    /// A proposed snapshot does not satisfy `shares × cash ≈ k`.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, CurveError>;
