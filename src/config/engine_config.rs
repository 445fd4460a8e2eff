//! Engine-wide pricing parameters.

use crate::error::CurveError;
use crate::math::DEFAULT_RELATIVE_TOLERANCE;

/// Default ceiling applied to every reported price.
pub const DEFAULT_PRICE_CAP: f64 = 100.0;

/// Parameters shared by every pool an engine prices.
///
/// # Fields
///
/// - `price_cap`: upper bound on reported prices (default `100`).
/// - `invariant_tolerance`: relative epsilon for `shares × cash ≈ k`
///   (default `1e-9`).
///
/// # Examples
///
/// ```
/// use bonding_curve_engine::config::EngineConfig;
///
/// let cfg = EngineConfig::default().with_price_cap(250.0).expect("valid cap");
/// assert_eq!(cfg.price_cap(), 250.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "EngineConfigRecord", into = "EngineConfigRecord")
)]
pub struct EngineConfig {
    price_cap: f64,
    invariant_tolerance: f64,
}

impl EngineConfig {
    /// Default configuration, usable in `const` contexts.
    pub const DEFAULT: Self = Self {
        price_cap: DEFAULT_PRICE_CAP,
        invariant_tolerance: DEFAULT_RELATIVE_TOLERANCE,
    };

    /// Creates a new `EngineConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] if the cap is not finite
    /// and positive, or the tolerance is not in `(0, 1)`.
    pub fn new(price_cap: f64, invariant_tolerance: f64) -> Result<Self, CurveError> {
        let config = Self {
            price_cap,
            invariant_tolerance,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] on the first violation.
    pub fn validate(&self) -> Result<(), CurveError> {
        if !self.price_cap.is_finite() || self.price_cap <= 0.0 {
            return Err(CurveError::InvalidConfiguration(
                "price cap must be finite and positive",
            ));
        }
        if !self.invariant_tolerance.is_finite()
            || self.invariant_tolerance <= 0.0
            || self.invariant_tolerance >= 1.0
        {
            return Err(CurveError::InvalidConfiguration(
                "invariant tolerance must be in (0, 1)",
            ));
        }
        Ok(())
    }

    /// Returns a copy with a different price cap.
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::new`].
    pub fn with_price_cap(self, price_cap: f64) -> Result<Self, CurveError> {
        Self::new(price_cap, self.invariant_tolerance)
    }

    /// Returns a copy with a different invariant tolerance.
    ///
    /// # Errors
    ///
    /// Same as [`EngineConfig::new`].
    pub fn with_invariant_tolerance(self, tolerance: f64) -> Result<Self, CurveError> {
        Self::new(self.price_cap, tolerance)
    }

    /// Upper bound on reported prices.
    #[must_use]
    pub const fn price_cap(&self) -> f64 {
        self.price_cap
    }

    /// Relative epsilon for the invariant check.
    #[must_use]
    pub const fn invariant_tolerance(&self) -> f64 {
        self.invariant_tolerance
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// On-disk shape of [`EngineConfig`]; missing fields take the defaults.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct EngineConfigRecord {
    price_cap: f64,
    invariant_tolerance: f64,
}

#[cfg(feature = "serde")]
impl Default for EngineConfigRecord {
    fn default() -> Self {
        EngineConfig::DEFAULT.into()
    }
}

#[cfg(feature = "serde")]
impl TryFrom<EngineConfigRecord> for EngineConfig {
    type Error = CurveError;

    fn try_from(r: EngineConfigRecord) -> Result<Self, Self::Error> {
        Self::new(r.price_cap, r.invariant_tolerance)
    }
}

#[cfg(feature = "serde")]
impl From<EngineConfig> for EngineConfigRecord {
    fn from(c: EngineConfig) -> Self {
        Self {
            price_cap: c.price_cap,
            invariant_tolerance: c.invariant_tolerance,
        }
    }
}
