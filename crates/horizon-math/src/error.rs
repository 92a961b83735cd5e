//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    ///
    /// Carries the last iterate so callers can still report a best-effort value.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e}, estimate: {estimate})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
        /// Last iterate reached before giving up.
        estimate: f64,
    },

    /// The derivative vanished, so no Newton step could be taken.
    #[error("Zero derivative at iteration {iterations} (estimate: {estimate})")]
    ZeroDerivative {
        /// Iteration at which the derivative vanished.
        iterations: u32,
        /// Iterate at which the derivative vanished.
        estimate: f64,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64, estimate: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
            estimate,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Returns the best-effort estimate carried by a solver failure, if any.
    #[must_use]
    pub fn estimate(&self) -> Option<f64> {
        match self {
            Self::ConvergenceFailed { estimate, .. } | Self::ZeroDerivative { estimate, .. } => {
                Some(*estimate)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(20, 1e-6, 0.051);
        assert!(err.to_string().contains("20 iterations"));
    }

    #[test]
    fn test_estimate_only_on_solver_failures() {
        assert_eq!(MathError::convergence_failed(20, 1e-3, 0.04).estimate(), Some(0.04));
        assert_eq!(
            MathError::ZeroDerivative {
                iterations: 3,
                estimate: 0.07
            }
            .estimate(),
            Some(0.07)
        );
        assert_eq!(MathError::insufficient_data(2, 1).estimate(), None);
    }
}
