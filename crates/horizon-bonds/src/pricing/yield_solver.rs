//! Yield-to-maturity solver.
//!
//! Inverts price to yield with Newton-Raphson on the bond's own cash flows,
//! discounting each flow at the flat periodic yield:
//!
//! ```text
//! f(y)  = Σ CF_i · (1 + y/f)^(-t_i·f) - target
//! f'(y) = Σ -CF_i · t_i · (1 + y/f)^(-t_i·f - 1)
//! ```
//!
//! # Example
//!
//! ```rust
//! use horizon_bonds::pricing::YieldSolver;
//! use horizon_bonds::types::{CashFlow, Frequency};
//!
//! // 5% annual coupon, 3 years, priced at par
//! let flows = [
//!     CashFlow::new(1.0, 5.0),
//!     CashFlow::new(2.0, 5.0),
//!     CashFlow::new(3.0, 105.0),
//! ];
//! let result = YieldSolver::new().solve(&flows, 100.0, Frequency::Annual).unwrap();
//! assert!((result.yield_value - 0.05).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use horizon_math::solvers::{newton_raphson, SolverConfig};
use horizon_math::MathError;

use crate::error::{PricingError, PricingResult};
use crate::types::{CashFlow, Frequency};

/// Starting yield for the Newton iteration (decimal).
pub const DEFAULT_INITIAL_GUESS: f64 = 0.05;

/// Result of a converged yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Final residual (should be near zero).
    pub residual: f64,
}

/// Yield-to-maturity solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
    initial_guess: f64,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a solver with tolerance 1e-8, 20 iterations and a 5% start.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            initial_guess: DEFAULT_INITIAL_GUESS,
        }
    }

    /// Creates a solver from an existing configuration.
    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            initial_guess: DEFAULT_INITIAL_GUESS,
        }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the starting yield (decimal).
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the starting yield.
    #[must_use]
    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }

    /// Solves for the yield that discounts `cash_flows` to `target_price`.
    ///
    /// # Errors
    ///
    /// - [`PricingError::NoCashFlows`] if `cash_flows` is empty
    /// - [`PricingError::InvalidPrice`] if the target is not a positive number
    /// - [`PricingError::YieldNotConverged`] carrying the last iterate if
    ///   the tolerance is not met or the derivative vanishes
    pub fn solve(
        &self,
        cash_flows: &[CashFlow],
        target_price: f64,
        frequency: Frequency,
    ) -> PricingResult<YieldResult> {
        if cash_flows.is_empty() {
            return Err(PricingError::NoCashFlows);
        }
        if !target_price.is_finite() || target_price <= 0.0 {
            return Err(PricingError::invalid_price(format!(
                "target price must be positive, got {target_price}"
            )));
        }

        let periods_per_year = f64::from(frequency.periods_per_year());
        let objective = |y: f64| pv_at_yield(cash_flows, y, periods_per_year) - target_price;
        let derivative = |y: f64| pv_derivative(cash_flows, y, periods_per_year);

        match newton_raphson(objective, derivative, self.initial_guess, &self.config) {
            Ok(result) => {
                debug!(
                    yield_value = result.root,
                    iterations = result.iterations,
                    "yield converged"
                );
                Ok(YieldResult {
                    yield_value: result.root,
                    iterations: result.iterations,
                    residual: result.residual,
                })
            }
            Err(err) => {
                let (estimate, iterations) = match err {
                    MathError::ConvergenceFailed {
                        iterations,
                        estimate,
                        ..
                    }
                    | MathError::ZeroDerivative {
                        iterations,
                        estimate,
                    } => (estimate, iterations),
                    _ => (self.initial_guess, 0),
                };
                Err(PricingError::YieldNotConverged {
                    estimate,
                    iterations,
                    residual: objective(estimate),
                })
            }
        }
    }
}

/// Present value of `cash_flows` at a flat yield compounded `periods_per_year`.
#[must_use]
pub fn pv_at_yield(cash_flows: &[CashFlow], yield_value: f64, periods_per_year: f64) -> f64 {
    let base = 1.0 + yield_value / periods_per_year;
    cash_flows
        .iter()
        .map(|cf| cf.amount * base.powf(-cf.t * periods_per_year))
        .sum()
}

/// First derivative of [`pv_at_yield`] with respect to the yield.
#[must_use]
pub fn pv_derivative(cash_flows: &[CashFlow], yield_value: f64, periods_per_year: f64) -> f64 {
    let base = 1.0 + yield_value / periods_per_year;
    cash_flows
        .iter()
        .map(|cf| -cf.amount * cf.t * base.powf(-cf.t * periods_per_year - 1.0))
        .sum()
}
