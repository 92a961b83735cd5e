//! Remaining cash flows and accrual state of a bond.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::types::{BondParameters, CashFlow};

/// Most coupon periods a schedule may hold.
///
/// Twice the longest quarterly maturity, leaving room for valuation dates
/// before issue.
pub const MAX_PERIODS: usize = 800;

/// The remaining cash flows of a bond, as seen `elapsed_years` after issue.
///
/// Flow times are measured from the valuation date. A bond with no time
/// left is matured: it has no flows and no accrual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSchedule {
    flows: Vec<CashFlow>,
    accrued_interest: f64,
    coupon_amount: f64,
    time_to_next_coupon: f64,
    period_length: f64,
    remaining_years: f64,
}

impl CashFlowSchedule {
    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidBondParameters`] if the bond fails
    /// validation, `elapsed_years` is not finite, or the remaining life
    /// needs more than [`MAX_PERIODS`] coupon periods.
    pub fn generate(bond: &BondParameters, elapsed_years: f64) -> PricingResult<Self> {
        bond.validate()?;
        if !elapsed_years.is_finite() {
            return Err(PricingError::invalid_bond(format!(
                "elapsed years must be finite, got {elapsed_years}"
            )));
        }

        let remaining = bond.maturity_years - elapsed_years;
        let period_length = bond.frequency.period_length();
        let coupon_amount = bond.coupon_amount();

        if remaining <= 0.0 {
            debug!(maturity = bond.maturity_years, elapsed_years, "bond has matured");
            return Ok(Self {
                flows: Vec::new(),
                accrued_interest: 0.0,
                coupon_amount,
                time_to_next_coupon: 0.0,
                period_length,
                remaining_years: remaining,
            });
        }

        let frequency = f64::from(bond.frequency.periods_per_year());
        let periods = (remaining * frequency).ceil();
        if periods > MAX_PERIODS as f64 {
            return Err(PricingError::invalid_bond(format!(
                "{remaining} years to maturity needs {periods} coupon periods, more than {MAX_PERIODS}"
            )));
        }
        let periods = periods as usize;
        let time_to_next = remaining - (periods - 1) as f64 * period_length;
        let time_since_last = period_length - time_to_next;
        let accrued_interest = time_since_last / period_length * coupon_amount;

        let mut flows: Vec<CashFlow> = (0..periods)
            .map(|i| CashFlow::new(time_to_next + i as f64 * period_length, coupon_amount))
            .collect();
        if let Some(last) = flows.last_mut() {
            last.amount += bond.face_value;
        }

        debug!(
            periods,
            time_to_next,
            accrued_interest,
            "generated cash flow schedule"
        );

        Ok(Self {
            flows,
            accrued_interest,
            coupon_amount,
            time_to_next_coupon: time_to_next,
            period_length,
            remaining_years: remaining,
        })
    }

    /// Remaining flows, earliest first. Principal is folded into the last one.
    #[must_use]
    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Consumes the schedule, returning its flows.
    #[must_use]
    pub fn into_flows(self) -> Vec<CashFlow> {
        self.flows
    }

    /// Interest accrued since the last coupon.
    #[must_use]
    pub fn accrued_interest(&self) -> f64 {
        self.accrued_interest
    }

    /// Coupon paid each period.
    #[must_use]
    pub fn coupon_amount(&self) -> f64 {
        self.coupon_amount
    }

    /// Years until the next payment; zero once matured.
    #[must_use]
    pub fn time_to_next_coupon(&self) -> f64 {
        self.time_to_next_coupon
    }

    /// Share of the current period already accrued, in `[0, 1)`.
    #[must_use]
    pub fn accrued_fraction(&self) -> f64 {
        if self.is_matured() {
            0.0
        } else {
            (self.period_length - self.time_to_next_coupon) / self.period_length
        }
    }

    /// Years left to maturity; zero or negative once matured.
    #[must_use]
    pub fn remaining_years(&self) -> f64 {
        self.remaining_years
    }

    /// True when no time is left to maturity.
    #[must_use]
    pub fn is_matured(&self) -> bool {
        self.remaining_years <= 0.0
    }
}
