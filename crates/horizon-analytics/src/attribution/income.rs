//! Coupon income and its reinvestment up to a horizon.

use tracing::trace;

use horizon_bonds::cashflows::CashFlowSchedule;
use horizon_bonds::BondParameters;
use horizon_curves::ZeroCurve;

use crate::error::AnalyticsResult;

/// Coupons received by a horizon and what reinvesting them earned.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CouponIncome {
    /// Sum of coupons paid in `(0, horizon]`.
    pub coupons: f64,
    /// Growth on those coupons from payment to horizon.
    pub reinvestment: f64,
}

/// Accumulates coupons paid in `(0, horizon]` over the bond's whole life.
///
/// Each coupon is rolled forward to the horizon at the zero rate of
/// `reinvestment_curve` for the remaining time, compounded annually.
/// Principal is not income: it shows up in the end price instead.
pub fn coupon_income(
    bond: &BondParameters,
    reinvestment_curve: &ZeroCurve,
    horizon_years: f64,
) -> AnalyticsResult<CouponIncome> {
    let schedule = CashFlowSchedule::generate(bond, 0.0)?;
    let coupon = schedule.coupon_amount();

    let mut income = CouponIncome::default();
    for cf in schedule.flows() {
        if cf.t <= 0.0 || cf.t > horizon_years {
            continue;
        }
        income.coupons += coupon;

        let time_to_reinvest = horizon_years - cf.t;
        if time_to_reinvest > 0.0 {
            let growth = reinvestment_curve.growth_factor(time_to_reinvest)?;
            income.reinvestment += coupon * (growth - 1.0);
            trace!(t = cf.t, time_to_reinvest, growth, "reinvested coupon");
        }
    }

    Ok(income)
}
