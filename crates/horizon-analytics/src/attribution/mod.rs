//! Total-return attribution over a holding horizon.
//!
//! A bond bought today on the start curve and marked at the horizon on the
//! end curve earns price change, coupons and reinvestment income. The price
//! change is split by repricing at the horizon on intermediate curves:
//!
//! | Leg | Curve at horizon | Component |
//! |-----|------------------|-----------|
//! | rolldown | start curve | `rolldown - start` |
//! | parallel | start curve + one shift | `parallel - rolldown` |
//! | end | end curve | `end - parallel` |
//!
//! The shift is the end-minus-start zero rate at the bond's remaining
//! maturity, so the duration leg captures a parallel move and the shape leg
//! whatever reshaping is left. The three legs telescope to the full price
//! change.

mod income;

pub use income::{coupon_income, CouponIncome};

use serde::{Deserialize, Serialize};
use tracing::debug;

use horizon_bonds::{BondParameters, BondResult, PricingEngine};
use horizon_curves::ZeroCurve;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Return over one horizon and its decomposition.
///
/// Prices are dirty. Every `*_return` field is a percentage of the start
/// dirty price, so `rolldown_return + duration_return + shape_return`
/// equals `price_return`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalReturnResult {
    /// Holding period in years.
    pub horizon_years: f64,
    /// Valuation today on the start curve.
    pub start: BondResult,
    /// Valuation at the horizon on the end curve.
    pub end: BondResult,
    /// Start dirty price.
    pub start_price: f64,
    /// End dirty price.
    pub end_price: f64,
    /// Dirty price at the horizon on the unchanged start curve.
    pub rolldown_price: f64,
    /// Dirty price at the horizon on the parallel-shifted start curve.
    pub parallel_price: f64,
    /// Parallel shift applied to the start curve, in percent.
    pub parallel_shift: f64,
    /// Coupons received by the horizon.
    pub coupon_income: f64,
    /// Income from reinvesting those coupons to the horizon.
    pub reinvestment_income: f64,
    /// Holding-period return in percent.
    pub total_return: f64,
    /// Annualised return in percent; equal to `total_return` for horizons up to a year.
    pub annualized_return: f64,
    /// Price change.
    pub price_return: f64,
    /// Coupons.
    pub coupon_return: f64,
    /// Reinvestment income.
    pub reinvestment_return: f64,
    /// Passage of time on an unchanged curve.
    pub rolldown_return: f64,
    /// Parallel move at the remaining maturity.
    pub duration_return: f64,
    /// Residual curve reshaping (twist, curvature).
    pub shape_return: f64,
}

impl TotalReturnResult {
    /// Sum of the three price legs, for checking against `price_return`.
    #[must_use]
    pub fn decomposed_price_return(&self) -> f64 {
        self.rolldown_return + self.duration_return + self.shape_return
    }

    /// Price, coupon and reinvestment components together.
    #[must_use]
    pub fn components_total(&self) -> f64 {
        self.price_return + self.coupon_return + self.reinvestment_return
    }
}

/// Runs the pricing legs of a total-return attribution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReturnAttributor {
    engine: PricingEngine,
}

impl ReturnAttributor {
    /// Creates an attributor with the default pricing engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an attributor that prices with `engine`.
    #[must_use]
    pub fn with_engine(engine: PricingEngine) -> Self {
        Self { engine }
    }

    /// Returns the pricing engine.
    #[must_use]
    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    /// Attributes the return of `bond` bought on `start_curve` and marked on
    /// `end_curve` after `horizon_years`.
    ///
    /// # Errors
    ///
    /// - [`AnalyticsError::InvalidHorizon`] for a negative or non-finite horizon
    /// - [`AnalyticsError::Pricing`] if any leg fails to price
    /// - [`AnalyticsError::DegenerateDivision`] if the start price is zero
    pub fn attribute(
        &self,
        bond: &BondParameters,
        start_curve: &ZeroCurve,
        end_curve: &ZeroCurve,
        horizon_years: f64,
    ) -> AnalyticsResult<TotalReturnResult> {
        if !horizon_years.is_finite() || horizon_years < 0.0 {
            return Err(AnalyticsError::InvalidHorizon {
                horizon: horizon_years,
            });
        }

        let start = self.engine.price(bond, start_curve, 0.0)?;
        let end = self.engine.price(bond, end_curve, horizon_years)?;
        let rolldown = self.engine.price(bond, start_curve, horizon_years)?;

        let remaining = bond.maturity_years - horizon_years;
        let (parallel_price, parallel_shift) = if remaining <= 0.0 {
            (rolldown.dirty_price, 0.0)
        } else {
            let shift = end_curve.rate_at(remaining)? - start_curve.rate_at(remaining)?;
            let shifted = start_curve.shifted(shift)?;
            let parallel = self.engine.price(bond, &shifted, horizon_years)?;
            (parallel.dirty_price, shift)
        };

        let income = coupon_income(bond, end_curve, horizon_years)?;

        let start_price = start.dirty_price;
        if start_price == 0.0 || !start_price.is_finite() {
            return Err(AnalyticsError::degenerate(format!(
                "start price {start_price} cannot normalise returns"
            )));
        }
        let pct = |amount: f64| amount / start_price * 100.0;

        let end_price = end.dirty_price;
        let total =
            (end_price + income.coupons + income.reinvestment - start_price) / start_price;
        let annualized = if horizon_years > 1.0 {
            (1.0 + total).powf(1.0 / horizon_years) - 1.0
        } else {
            total
        };

        debug!(
            horizon_years,
            start_price,
            rolldown_price = rolldown.dirty_price,
            parallel_price,
            end_price,
            parallel_shift,
            "attributed total return"
        );

        Ok(TotalReturnResult {
            horizon_years,
            start,
            end,
            start_price,
            end_price,
            rolldown_price: rolldown.dirty_price,
            parallel_price,
            parallel_shift,
            coupon_income: income.coupons,
            reinvestment_income: income.reinvestment,
            total_return: total * 100.0,
            annualized_return: annualized * 100.0,
            price_return: pct(end_price - start_price),
            coupon_return: pct(income.coupons),
            reinvestment_return: pct(income.reinvestment),
            rolldown_return: pct(rolldown.dirty_price - start_price),
            duration_return: pct(parallel_price - rolldown.dirty_price),
            shape_return: pct(end_price - parallel_price),
        })
    }
}

/// Attributes a total return with the default pricing engine.
///
/// # Example
///
/// ```rust
/// use horizon_analytics::compute_total_return;
/// use horizon_bonds::{BondParameters, Frequency};
/// use horizon_curves::{ScenarioBump, ZeroCurve};
///
/// let bond = BondParameters::new(4.0, 10.0, Frequency::SemiAnnual);
/// let start = ZeroCurve::flat(4.0).unwrap();
/// let end = ScenarioBump::parallel(50.0).apply(&start).unwrap();
///
/// let result = compute_total_return(&bond, &start, &end, 1.0).unwrap();
/// assert!(result.duration_return < 0.0);
/// assert!(result.shape_return.abs() < 1e-9);
/// ```
pub fn compute_total_return(
    bond: &BondParameters,
    start_curve: &ZeroCurve,
    end_curve: &ZeroCurve,
    horizon_years: f64,
) -> AnalyticsResult<TotalReturnResult> {
    ReturnAttributor::new().attribute(bond, start_curve, end_curve, horizon_years)
}
