//! Coupon payment frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PricingError;

/// Payment frequency for coupon bonds.
///
/// Serialises as its payments-per-year integer (`1`, `2` or `4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
        }
    }

    /// Length of one coupon period in years.
    #[must_use]
    pub fn period_length(&self) -> f64 {
        1.0 / f64::from(self.periods_per_year())
    }
}

impl TryFrom<u32> for Frequency {
    type Error = PricingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            4 => Ok(Frequency::Quarterly),
            other => Err(PricingError::invalid_bond(format!(
                "frequency must be 1, 2 or 4 payments per year, got {other}"
            ))),
        }
    }
}

impl From<Frequency> for u32 {
    fn from(frequency: Frequency) -> Self {
        frequency.periods_per_year()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert!((Frequency::Quarterly.period_length() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_try_from_rejects_unsupported() {
        assert_eq!(Frequency::try_from(2).unwrap(), Frequency::SemiAnnual);
        for bad in [0, 3, 12] {
            assert!(matches!(
                Frequency::try_from(bad),
                Err(PricingError::InvalidBondParameters { .. })
            ));
        }
    }

    #[test]
    fn test_serde_as_integer() {
        assert_eq!(serde_json::to_string(&Frequency::Quarterly).unwrap(), "4");
        let parsed: Frequency = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, Frequency::Annual);
        assert!(serde_json::from_str::<Frequency>("3").is_err());
    }
}
