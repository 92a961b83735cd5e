//! Interpolation methods for zero-rate curves.
//!
//! # Available Methods
//!
//! - [`MonotoneCubic`]: Fritsch-Carlson monotone cubic Hermite with flat
//!   extrapolation (the curve default)
//!
//! # Why Monotone Cubic
//!
//! | Method | Smoothness | Overshoot between nodes | Beyond last node |
//! |--------|------------|-------------------------|------------------|
//! | Natural cubic spline | C2 | Yes, on sparse curves | Polynomial trend |
//! | Monotone cubic | C1 | **No** (on monotone data) | **Flat** |
//!
//! Yields are not extrapolated past the observed tenors: the first and last
//! node values are held constant.

mod monotone_cubic;

pub use monotone_cubic::MonotoneCubic;

use crate::error::MathResult;

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_yield_curve_construction() {
        // Realistic upward-sloping curve in percent
        let maturities = vec![0.25, 0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 20.0, 30.0];
        let zero_rates = vec![2.00, 2.10, 2.25, 2.50, 2.75, 3.10, 3.40, 3.70, 4.00, 4.10];

        let mc = MonotoneCubic::new(maturities, zero_rates).unwrap();

        let z = mc.interpolate(4.0).unwrap();
        assert!(z > 2.75 && z < 3.10);
        assert!(mc.derivative(4.0).unwrap() > 0.0);
    }

    #[test]
    fn test_trait_object_range() {
        let mc = MonotoneCubic::new(vec![1.0, 2.0, 5.0], vec![3.0, 3.5, 4.0]).unwrap();
        let interp: &dyn Interpolator = &mc;

        assert!(interp.allows_extrapolation());
        assert!(interp.in_range(3.0));
        assert!(!interp.in_range(0.5));
        assert_relative_eq!(interp.min_x(), 1.0);
        assert_relative_eq!(interp.max_x(), 5.0);
    }
}
