//! Error types for bond operations.

use thiserror::Error;

use horizon_curves::CurveError;

/// A specialized Result type for bond pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur while scheduling, pricing or solving a bond.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// The discount curve could not be built or evaluated.
    #[error("Invalid curve: {0}")]
    InvalidCurve(#[from] CurveError),

    /// Bond parameters are out of range.
    #[error("Invalid bond parameters: {reason}")]
    InvalidBondParameters {
        /// Description of what's invalid.
        reason: String,
    },

    /// The target price cannot be solved for.
    #[error("Invalid price: {reason}")]
    InvalidPrice {
        /// Description of what's invalid.
        reason: String,
    },

    /// There is nothing left to discount.
    #[error("No future cash flows")]
    NoCashFlows,

    /// Yield iteration stopped without meeting the tolerance.
    ///
    /// `estimate` is the last iterate and can still be shown with a warning.
    #[error("Yield did not converge after {iterations} iterations (estimate: {estimate}, residual: {residual:.2e})")]
    YieldNotConverged {
        /// Best-effort yield (decimal).
        estimate: f64,
        /// Number of Newton steps taken.
        iterations: u32,
        /// Price error at `estimate`.
        residual: f64,
    },

    /// A ratio would divide by a zero or non-finite price.
    #[error("Degenerate division: {context}")]
    DegenerateDivision {
        /// What was being divided.
        context: String,
    },
}

impl PricingError {
    /// Creates an invalid bond parameters error.
    #[must_use]
    pub fn invalid_bond(reason: impl Into<String>) -> Self {
        Self::InvalidBondParameters {
            reason: reason.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            reason: reason.into(),
        }
    }

    /// Creates a degenerate division error.
    #[must_use]
    pub fn degenerate(context: impl Into<String>) -> Self {
        Self::DegenerateDivision {
            context: context.into(),
        }
    }

    /// Returns the best-effort yield carried by a non-convergence error.
    #[must_use]
    pub fn yield_estimate(&self) -> Option<f64> {
        match self {
            Self::YieldNotConverged { estimate, .. } => Some(*estimate),
            _ => None,
        }
    }
}
