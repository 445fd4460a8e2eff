//! Core trait abstractions for pricing and construction.
//!
//! This module defines [`PricingCurve`], the surface every pricing engine
//! exposes, and [`FromConfig`] for configuration-driven construction.

mod from_config;
mod pricing_curve;

pub use from_config::FromConfig;
pub use pricing_curve::PricingCurve;
