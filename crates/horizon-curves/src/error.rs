//! Error types for curve operations.

use horizon_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
///
/// Every variant describes a curve that cannot be interpolated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Not enough data points for interpolation.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Two points share a tenor.
    #[error("Duplicate tenor {tenor:.4}")]
    DuplicateTenor {
        /// The repeated tenor in years.
        tenor: f64,
    },

    /// A tenor lies before the valuation date.
    #[error("Negative tenor {tenor:.4}")]
    NegativeTenor {
        /// The offending tenor in years.
        tenor: f64,
    },

    /// A rate at or below -100% makes `1 + r` non-positive.
    #[error("Rate {rate:.4}% at tenor {tenor:.4} is at or below -100%")]
    RateBelowFloor {
        /// Tenor of the offending point.
        tenor: f64,
        /// The rate in percent.
        rate: f64,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },

    /// Mathematical error.
    #[error("Math error: {reason}")]
    MathError {
        /// Description of the mathematical error.
        reason: String,
    },
}

impl CurveError {
    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData { required, actual } => Self::InsufficientPoints {
                required,
                got: actual,
            },
            other => Self::MathError {
                reason: other.to_string(),
            },
        }
    }
}
