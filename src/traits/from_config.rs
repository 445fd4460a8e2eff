//! Generic construction trait for building values from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating pools and
//! engines from their configuration structs:
//!
//! ```text
//! PoolConfig   => Pool::from_config(&cfg)
//! EngineConfig => ConstantProductEngine::from_config(&cfg)
//! ```
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed value is guaranteed to be in a
//! valid initial state.

use crate::error::CurveError;

/// Generic construction trait for building a value from a configuration.
///
/// # Type Parameters
///
/// - `C`: the configuration type that fully describes the value's
///   immutable parameters.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for Pool`
/// - `impl FromConfig<EngineConfig> for ConstantProductEngine`
///
/// # Errors
///
/// Returns [`CurveError::InvalidConfiguration`] (or a more specific
/// variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidConfiguration`] if any parameter is out of
    ///   range or inconsistent.
    /// - [`CurveError::InvalidPool`] if the derived pool snapshot fails
    ///   validation.
    fn from_config(config: &C) -> Result<Self, CurveError>
    where
        Self: Sized;
}
