//! Bond parameters and cash flows.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::types::Frequency;

/// Default face value used when none is given.
pub const DEFAULT_FACE_VALUE: f64 = 100.0;

/// Longest maturity accepted, in years.
pub const MAX_MATURITY_YEARS: f64 = 100.0;

/// A plain fixed-coupon bullet bond, described in years from issue.
///
/// Rates are percentages at this boundary: `coupon_rate = 4.5` means 4.5%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondParameters {
    /// Annual coupon rate in percent.
    pub coupon_rate: f64,
    /// Years from issue to maturity.
    pub maturity_years: f64,
    /// Coupon payments per year.
    #[serde(default)]
    pub frequency: Frequency,
    /// Principal repaid at maturity.
    #[serde(default = "default_face_value")]
    pub face_value: f64,
}

fn default_face_value() -> f64 {
    DEFAULT_FACE_VALUE
}

impl BondParameters {
    /// Creates a bond with face value 100.
    #[must_use]
    pub fn new(coupon_rate: f64, maturity_years: f64, frequency: Frequency) -> Self {
        Self {
            coupon_rate,
            maturity_years,
            frequency,
            face_value: DEFAULT_FACE_VALUE,
        }
    }

    /// Sets the face value.
    #[must_use]
    pub fn with_face_value(mut self, face_value: f64) -> Self {
        self.face_value = face_value;
        self
    }

    /// Checks every field is in range.
    ///
    /// Frequency is already restricted by its type.
    pub fn validate(&self) -> PricingResult<()> {
        if !self.coupon_rate.is_finite() || self.coupon_rate < 0.0 {
            return Err(PricingError::invalid_bond(format!(
                "coupon rate must be a finite, non-negative percentage, got {}",
                self.coupon_rate
            )));
        }
        if !self.maturity_years.is_finite()
            || self.maturity_years <= 0.0
            || self.maturity_years > MAX_MATURITY_YEARS
        {
            return Err(PricingError::invalid_bond(format!(
                "maturity must be in (0, {MAX_MATURITY_YEARS}] years, got {}",
                self.maturity_years
            )));
        }
        if !self.face_value.is_finite() || self.face_value <= 0.0 {
            return Err(PricingError::invalid_bond(format!(
                "face value must be positive, got {}",
                self.face_value
            )));
        }
        Ok(())
    }

    /// Coupon paid each period.
    #[must_use]
    pub fn coupon_amount(&self) -> f64 {
        self.coupon_rate / 100.0 * self.face_value / f64::from(self.frequency.periods_per_year())
    }
}

/// A single payment, timed in years from the valuation date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Years from valuation.
    pub t: f64,
    /// Amount paid.
    pub amount: f64,
}

impl CashFlow {
    /// Creates a cash flow.
    #[must_use]
    pub fn new(t: f64, amount: f64) -> Self {
        Self { t, amount }
    }
}
