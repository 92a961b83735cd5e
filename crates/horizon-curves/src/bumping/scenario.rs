//! Market-move scenarios built from a start curve.
//!
//! Scenarios turn a start-of-period curve into an end-of-period curve for
//! what-if attribution: a parallel move, or a twist that pivots around a
//! chosen tenor.

use std::fmt;

use crate::error::CurveResult;
use crate::zero_curve::ZeroCurve;

/// Tenor at which a twist reaches its full long-end shift.
pub const LONG_END_TENOR: f64 = 30.0;

/// A single market move applied to every pillar of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScenarioBump {
    /// Parallel (uniform) shift across all tenors.
    Parallel {
        /// Shift in basis points.
        shift_bps: f64,
    },

    /// Steepener: short rates down, long rates up.
    Steepener {
        /// Downward shift at the short end (bps, positive = rates down).
        short_shift_bps: f64,
        /// Upward shift at the long end (bps, positive = rates up).
        long_shift_bps: f64,
        /// Pivot tenor where the shift is zero (years).
        pivot_tenor: f64,
    },

    /// Flattener: short rates up, long rates down.
    Flattener {
        /// Upward shift at the short end (bps).
        short_shift_bps: f64,
        /// Downward shift at the long end (bps).
        long_shift_bps: f64,
        /// Pivot tenor where the shift is zero (years).
        pivot_tenor: f64,
    },
}

impl ScenarioBump {
    /// Creates a parallel bump.
    #[must_use]
    pub fn parallel(shift_bps: f64) -> Self {
        ScenarioBump::Parallel { shift_bps }
    }

    /// Creates a steepener bump.
    ///
    /// Short rates decrease, long rates increase.
    #[must_use]
    pub fn steepener(short_shift_bps: f64, long_shift_bps: f64, pivot_tenor: f64) -> Self {
        ScenarioBump::Steepener {
            short_shift_bps,
            long_shift_bps,
            pivot_tenor,
        }
    }

    /// Creates a flattener bump.
    ///
    /// Short rates increase, long rates decrease.
    #[must_use]
    pub fn flattener(short_shift_bps: f64, long_shift_bps: f64, pivot_tenor: f64) -> Self {
        ScenarioBump::Flattener {
            short_shift_bps,
            long_shift_bps,
            pivot_tenor,
        }
    }

    /// Shift in basis points applied at tenor `t`.
    #[must_use]
    pub fn shift_bps_at(&self, t: f64) -> f64 {
        match self {
            ScenarioBump::Parallel { shift_bps } => *shift_bps,
            ScenarioBump::Steepener {
                short_shift_bps,
                long_shift_bps,
                pivot_tenor,
            } => twist(t, -short_shift_bps, *long_shift_bps, *pivot_tenor),
            ScenarioBump::Flattener {
                short_shift_bps,
                long_shift_bps,
                pivot_tenor,
            } => twist(t, *short_shift_bps, -long_shift_bps, *pivot_tenor),
        }
    }

    /// Applies the move to every pillar, returning the scenario curve.
    pub fn apply(&self, curve: &ZeroCurve) -> CurveResult<ZeroCurve> {
        curve.map_rates(|tenor, rate| rate + self.shift_bps_at(tenor) / 100.0)
    }
}

/// Linear from `short` at t=0 to zero at the pivot, then linear to `long`
/// at [`LONG_END_TENOR`] and constant beyond.
fn twist(t: f64, short: f64, long: f64, pivot: f64) -> f64 {
    if t < pivot {
        short * (1.0 - t / pivot)
    } else {
        let remaining = LONG_END_TENOR - pivot;
        if remaining > 0.0 {
            long * ((t - pivot) / remaining).min(1.0)
        } else {
            long
        }
    }
}

impl fmt::Display for ScenarioBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioBump::Parallel { shift_bps } => write!(f, "Parallel {shift_bps:+.0}bp"),
            ScenarioBump::Steepener {
                short_shift_bps,
                long_shift_bps,
                pivot_tenor,
            } => write!(
                f,
                "Steepener -{short_shift_bps:.0}bp/{pivot_tenor:.0}Y/+{long_shift_bps:.0}bp"
            ),
            ScenarioBump::Flattener {
                short_shift_bps,
                long_shift_bps,
                pivot_tenor,
            } => write!(
                f,
                "Flattener +{short_shift_bps:.0}bp/{pivot_tenor:.0}Y/-{long_shift_bps:.0}bp"
            ),
        }
    }
}
