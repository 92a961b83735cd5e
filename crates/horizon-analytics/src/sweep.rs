//! Attribution across many horizons.
//!
//! Every horizon is an independent set of pricing legs on shared, immutable
//! curves, so the sweep runs on the rayon pool when the `parallel` feature is
//! enabled. Output order always follows the input horizons.

use horizon_bonds::BondParameters;
use horizon_curves::ZeroCurve;

use crate::attribution::{ReturnAttributor, TotalReturnResult};
use crate::error::AnalyticsResult;

impl ReturnAttributor {
    /// Attributes the same bond and curve pair at each of `horizons`.
    ///
    /// A failing horizon does not stop the others.
    #[cfg(feature = "parallel")]
    pub fn attribute_horizons(
        &self,
        bond: &BondParameters,
        start_curve: &ZeroCurve,
        end_curve: &ZeroCurve,
        horizons: &[f64],
    ) -> Vec<AnalyticsResult<TotalReturnResult>> {
        use rayon::prelude::*;

        horizons
            .par_iter()
            .map(|&horizon| self.attribute(bond, start_curve, end_curve, horizon))
            .collect()
    }

    /// Attributes the same bond and curve pair at each of `horizons`.
    ///
    /// A failing horizon does not stop the others.
    #[cfg(not(feature = "parallel"))]
    pub fn attribute_horizons(
        &self,
        bond: &BondParameters,
        start_curve: &ZeroCurve,
        end_curve: &ZeroCurve,
        horizons: &[f64],
    ) -> Vec<AnalyticsResult<TotalReturnResult>> {
        horizons
            .iter()
            .map(|&horizon| self.attribute(bond, start_curve, end_curve, horizon))
            .collect()
    }
}

/// Attributes at each of `horizons` with the default pricing engine.
pub fn attribute_horizons(
    bond: &BondParameters,
    start_curve: &ZeroCurve,
    end_curve: &ZeroCurve,
    horizons: &[f64],
) -> Vec<AnalyticsResult<TotalReturnResult>> {
    ReturnAttributor::new().attribute_horizons(bond, start_curve, end_curve, horizons)
}
