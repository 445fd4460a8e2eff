//! Arithmetic utilities for curve calculations.
//!
//! This module provides [`CheckedFloat`] for overflow-safe `f64` operations
//! and the constant-product invariant checker.

mod checked_float;
mod invariant;

pub use checked_float::CheckedFloat;
pub use invariant::{
    invariant_tolerance, verify_invariant, verify_invariant_with, DEFAULT_RELATIVE_TOLERANCE,
};
