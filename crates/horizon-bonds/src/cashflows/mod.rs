//! Cash flow generation for fixed-coupon bonds.
//!
//! Schedules are laid out backwards from maturity in whole coupon periods,
//! so the first remaining coupon may be less than a full period away.
//! Accrued interest is straight-line over the current period.

mod schedule;

pub use schedule::{CashFlowSchedule, MAX_PERIODS};

use crate::error::PricingResult;
use crate::types::BondParameters;

/// Generates the remaining cash flows of `bond` after `elapsed_years`.
pub fn schedule(bond: &BondParameters, elapsed_years: f64) -> PricingResult<CashFlowSchedule> {
    CashFlowSchedule::generate(bond, elapsed_years)
}
