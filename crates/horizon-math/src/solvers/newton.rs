//! Newton-Raphson root-finding algorithm.

use tracing::trace;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// Convergence is declared when `|f(x)| < tolerance`. Steps are not
/// clamped or bracketed.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// - [`MathError::ZeroDerivative`] if `f'(x)` is exactly zero at some iterate
/// - [`MathError::ConvergenceFailed`] if the iteration budget runs out or the
///   function stops producing finite values
///
/// Both carry the last usable iterate as `estimate`.
///
/// # Example
///
/// ```rust
/// use horizon_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let mut last_finite = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        if !fx.is_finite() {
            return Err(MathError::convergence_failed(iteration, fx.abs(), last_finite));
        }
        last_finite = x;

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);

        if dfx == 0.0 {
            return Err(MathError::ZeroDerivative {
                iterations: iteration,
                estimate: x,
            });
        }

        x -= fx / dfx;
        trace!(iteration, x, residual = fx, "newton step");
    }

    // The last update has not been checked yet
    let fx = f(x);
    if fx.is_finite() && fx.abs() < config.tolerance {
        return Ok(SolverResult {
            root: x,
            iterations: config.max_iterations,
            residual: fx,
        });
    }

    let estimate = if fx.is_finite() { x } else { last_finite };
    Err(MathError::convergence_failed(
        config.max_iterations,
        fx.abs(),
        estimate,
    ))
}
