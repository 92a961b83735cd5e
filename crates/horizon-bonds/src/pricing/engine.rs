//! Curve-based bond pricing.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use horizon_curves::ZeroCurve;

use crate::cashflows::CashFlowSchedule;
use crate::error::{PricingError, PricingResult};
use crate::pricing::yield_solver::YieldSolver;
use crate::types::BondParameters;

/// How the yield in a [`BondResult`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum YieldStatus {
    /// The solver met its tolerance.
    Converged {
        /// Newton steps taken.
        iterations: u32,
    },
    /// The solver gave up; the yield is its last iterate.
    NotConverged {
        /// Newton steps taken.
        iterations: u32,
        /// Price error at the reported yield.
        residual: f64,
    },
    /// The bond has matured and no yield applies.
    Matured,
}

impl YieldStatus {
    /// True unless the solver gave up.
    #[must_use]
    pub fn is_reliable(&self) -> bool {
        !matches!(self, YieldStatus::NotConverged { .. })
    }
}

/// Price, yield and risk of a bond on one curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondResult {
    /// Dirty price less accrued interest.
    pub clean_price: f64,
    /// Present value of the remaining cash flows.
    pub dirty_price: f64,
    /// Interest accrued since the last coupon.
    pub accrued_interest: f64,
    /// Yield to maturity in percent, compounded at the coupon frequency.
    pub yield_to_maturity: f64,
    /// Macaulay duration in years.
    pub duration: f64,
    /// Convexity in years squared.
    pub convexity: f64,
    /// Whether the yield can be trusted.
    pub yield_status: YieldStatus,
    /// Coupon payments per year, carried for derived measures.
    pub frequency: u32,
}

impl BondResult {
    /// The result for a bond at or past maturity: face value, nothing else.
    #[must_use]
    pub fn matured(face_value: f64, frequency: u32) -> Self {
        Self {
            clean_price: face_value,
            dirty_price: face_value,
            accrued_interest: 0.0,
            yield_to_maturity: 0.0,
            duration: 0.0,
            convexity: 0.0,
            yield_status: YieldStatus::Matured,
            frequency,
        }
    }

    /// Macaulay duration divided by `1 + y/f`.
    #[must_use]
    pub fn modified_duration(&self) -> f64 {
        let f = f64::from(self.frequency.max(1));
        self.duration / (1.0 + self.yield_to_maturity / 100.0 / f)
    }

    /// Price change for a one basis point move in yield.
    #[must_use]
    pub fn dv01(&self) -> f64 {
        self.modified_duration() * self.dirty_price * 1e-4
    }
}

/// Prices bonds against zero curves.
///
/// Flows are discounted at the curve's zero rate with annual compounding,
/// `df = (1 + r)^-t`, whatever the coupon frequency. The yield is then
/// solved at the coupon frequency against the resulting dirty price.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PricingEngine {
    solver: YieldSolver,
}

impl PricingEngine {
    /// Creates an engine with the default yield solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a configured yield solver.
    #[must_use]
    pub fn with_solver(solver: YieldSolver) -> Self {
        Self { solver }
    }

    /// Returns the yield solver.
    #[must_use]
    pub fn solver(&self) -> &YieldSolver {
        &self.solver
    }

    /// Prices `bond` on `curve`, `elapsed_years` after issue.
    ///
    /// A matured bond prices at face value. A yield that fails to converge
    /// is not an error: the best estimate is returned and flagged in
    /// [`BondResult::yield_status`].
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidBondParameters`] for out-of-range inputs
    /// - [`PricingError::InvalidCurve`] if a discount factor cannot be read
    /// - [`PricingError::DegenerateDivision`] if the dirty price is not positive
    pub fn price(
        &self,
        bond: &BondParameters,
        curve: &ZeroCurve,
        elapsed_years: f64,
    ) -> PricingResult<BondResult> {
        let schedule = CashFlowSchedule::generate(bond, elapsed_years)?;
        let frequency = bond.frequency.periods_per_year();

        if schedule.is_matured() {
            return Ok(BondResult::matured(bond.face_value, frequency));
        }

        let mut dirty_price = 0.0;
        let mut weighted_time = 0.0;
        let mut weighted_convexity = 0.0;
        for cf in schedule.flows() {
            let pv = cf.amount * curve.discount_factor(cf.t)?;
            dirty_price += pv;
            weighted_time += cf.t * pv;
            weighted_convexity += cf.t * (cf.t + 1.0) * pv;
        }

        if !dirty_price.is_finite() || dirty_price <= 0.0 {
            return Err(PricingError::degenerate(format!(
                "dirty price {dirty_price} cannot normalise duration"
            )));
        }

        let (yield_value, yield_status) =
            match self
                .solver
                .solve(schedule.flows(), dirty_price, bond.frequency)
            {
                Ok(result) => (
                    result.yield_value,
                    YieldStatus::Converged {
                        iterations: result.iterations,
                    },
                ),
                Err(PricingError::YieldNotConverged {
                    estimate,
                    iterations,
                    residual,
                }) => {
                    warn!(
                        estimate,
                        iterations, residual, "yield did not converge, using best estimate"
                    );
                    (
                        estimate,
                        YieldStatus::NotConverged {
                            iterations,
                            residual,
                        },
                    )
                }
                Err(err) => return Err(err),
            };

        let accrued_interest = schedule.accrued_interest();
        let periodic = 1.0 + yield_value / f64::from(frequency);
        let duration = weighted_time / dirty_price;
        let convexity = weighted_convexity / (dirty_price * periodic * periodic);

        debug!(
            dirty_price,
            yield_value, duration, convexity, elapsed_years, "priced bond"
        );

        Ok(BondResult {
            clean_price: dirty_price - accrued_interest,
            dirty_price,
            accrued_interest,
            yield_to_maturity: yield_value * 100.0,
            duration,
            convexity,
            yield_status,
            frequency,
        })
    }
}

/// Prices `bond` on `curve` with the default engine.
///
/// # Example
///
/// ```rust
/// use horizon_bonds::prelude::*;
/// use horizon_curves::ZeroCurve;
///
/// let bond = BondParameters::new(5.0, 10.0, Frequency::SemiAnnual);
/// let curve = ZeroCurve::flat(5.0).unwrap();
///
/// let result = price_bond(&bond, &curve, 0.0).unwrap();
/// assert!((result.clean_price - 100.0).abs() < 1.0);
/// assert!(result.yield_status.is_reliable());
/// ```
pub fn price_bond(
    bond: &BondParameters,
    curve: &ZeroCurve,
    elapsed_years: f64,
) -> PricingResult<BondResult> {
    PricingEngine::new().price(bond, curve, elapsed_years)
}
