//! Error types for return attribution.

use thiserror::Error;

use horizon_bonds::PricingError;
use horizon_curves::CurveError;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur while attributing returns.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// One of the pricing legs failed.
    #[error("pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// A curve lookup failed.
    #[error("curve error: {0}")]
    Curve(#[from] CurveError),

    /// The horizon is negative or not a number.
    #[error("invalid horizon: {horizon} years")]
    InvalidHorizon {
        /// The rejected horizon.
        horizon: f64,
    },

    /// A return would be divided by a zero start price.
    #[error("degenerate division: {0}")]
    DegenerateDivision(String),
}

impl AnalyticsError {
    /// Creates a degenerate division error.
    #[must_use]
    pub fn degenerate(context: impl Into<String>) -> Self {
        Self::DegenerateDivision(context.into())
    }
}
