//! Parallel (uniform) curve bumping.
//!
//! A parallel bump shifts every pillar by the same amount, quoted in basis
//! points.

use crate::error::CurveResult;
use crate::zero_curve::ZeroCurve;

/// A parallel (uniform) shift applied to a curve.
///
/// # Example
///
/// ```rust
/// use horizon_curves::bumping::ParallelBump;
///
/// let bump_up = ParallelBump::new(1.0);    // +1bp
/// let bump_down = ParallelBump::new(-1.0); // -1bp
/// assert_eq!(ParallelBump::from_percent(0.25).shift_bps(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelBump {
    /// Shift amount in basis points.
    shift_bps: f64,
}

impl ParallelBump {
    /// Creates a new parallel bump of `shift_bps` basis points.
    #[must_use]
    pub fn new(shift_bps: f64) -> Self {
        Self { shift_bps }
    }

    /// Creates a bump from a shift quoted in percent (0.25 = 25bp).
    #[must_use]
    pub fn from_percent(shift_percent: f64) -> Self {
        Self {
            shift_bps: shift_percent * 100.0,
        }
    }

    /// Creates a 1bp upward shift (standard for DV01).
    #[must_use]
    pub fn one_bp_up() -> Self {
        Self::new(1.0)
    }

    /// Returns the shift in basis points.
    #[must_use]
    pub fn shift_bps(&self) -> f64 {
        self.shift_bps
    }

    /// Returns the shift in percent, the unit curve rates are quoted in.
    #[must_use]
    pub fn shift_percent(&self) -> f64 {
        self.shift_bps / 100.0
    }

    /// Applies the bump, returning a new curve.
    pub fn apply(&self, curve: &ZeroCurve) -> CurveResult<ZeroCurve> {
        curve.shifted(self.shift_percent())
    }
}

impl Default for ParallelBump {
    fn default() -> Self {
        Self::one_bp_up()
    }
}
