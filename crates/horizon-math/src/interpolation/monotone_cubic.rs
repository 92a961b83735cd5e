//! Monotone cubic Hermite interpolation (Fritsch-Carlson).
//!
//! Sparse zero curves (five or six pillars spanning 0-30 years) make a
//! natural cubic spline overshoot between nodes. The Fritsch-Carlson
//! tangent limiter keeps every segment inside the range of its endpoints
//! whenever the data is monotone on that segment.
//!
//! Outside the node range the interpolant is flat: it returns the first or
//! last node value and never projects a trend.

use tracing::trace;

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Radius of the Fritsch-Carlson monotonicity region.
const MONOTONE_RADIUS: f64 = 3.0;

/// Monotone cubic Hermite interpolation with flat extrapolation.
///
/// # Example
///
/// ```rust
/// use horizon_math::interpolation::{Interpolator, MonotoneCubic};
///
/// let tenors = vec![0.5, 2.0, 5.0, 10.0, 30.0];
/// let rates = vec![4.1, 4.3, 4.5, 4.7, 4.9];
///
/// let interp = MonotoneCubic::new(tenors, rates).unwrap();
/// let r = interp.interpolate(7.0).unwrap();
/// assert!(r > 4.5 && r < 4.7);
///
/// // Flat beyond the last node
/// assert_eq!(interp.interpolate(50.0).unwrap(), 4.9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MonotoneCubic {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Limited tangent at each node
    tangents: Vec<f64>,
}

impl MonotoneCubic {
    /// Builds the interpolant.
    ///
    /// # Arguments
    ///
    /// * `xs` - Node abscissae (must be finite and strictly increasing)
    /// * `ys` - Node values (must be finite)
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if any value is non-finite or out of order.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("values must be finite"));
        }
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::invalid_input(
                    "x values must be strictly increasing",
                ));
            }
        }

        let tangents = limited_tangents(&xs, &ys);
        trace!(nodes = xs.len(), ?tangents, "built monotone cubic interpolant");

        Ok(Self { xs, ys, tangents })
    }

    /// Returns the node abscissae.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the node values.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the limited node tangents.
    pub fn tangents(&self) -> &[f64] {
        &self.tangents
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    ///
    /// Linear scan; curves carry a handful of nodes.
    fn find_segment(&self, x: f64) -> usize {
        let last = self.xs.len() - 2;
        (0..last).find(|&i| x < self.xs[i + 1]).unwrap_or(last)
    }

    /// Evaluates the interpolant, clamping to the boundary values outside the node range.
    fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }

        let i = self.find_segment(x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * self.ys[i]
            + h10 * h * self.tangents[i]
            + h01 * self.ys[i + 1]
            + h11 * h * self.tangents[i + 1]
    }

    fn eval_derivative(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if x < self.xs[0] || x > self.xs[n - 1] {
            return 0.0;
        }

        let i = self.find_segment(x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;

        let d00 = 6.0 * t2 - 6.0 * t;
        let d10 = 3.0 * t2 - 4.0 * t + 1.0;
        let d01 = -6.0 * t2 + 6.0 * t;
        let d11 = 3.0 * t2 - 2.0 * t;

        (d00 * self.ys[i] + d01 * self.ys[i + 1]) / h
            + d10 * self.tangents[i]
            + d11 * self.tangents[i + 1]
    }
}

impl Interpolator for MonotoneCubic {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if x.is_nan() {
            return Err(MathError::invalid_input("cannot interpolate at NaN"));
        }
        Ok(self.eval(x))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        if x.is_nan() {
            return Err(MathError::invalid_input("cannot differentiate at NaN"));
        }
        Ok(self.eval_derivative(x))
    }

    fn allows_extrapolation(&self) -> bool {
        true
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Computes node tangents and applies the Fritsch-Carlson limiter.
///
/// A node's tangent is shared by its two adjoining segments, so the limiter
/// runs over every segment before any evaluation takes place.
fn limited_tangents(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();

    let secants: Vec<f64> = (0..n - 1)
        .map(|i| (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]))
        .collect();

    let mut tangents = vec![0.0; n];
    tangents[0] = secants[0];
    tangents[n - 1] = secants[n - 2];
    for i in 1..n - 1 {
        tangents[i] = (secants[i - 1] + secants[i]) / 2.0;
    }

    for (i, &m) in secants.iter().enumerate() {
        if m == 0.0 {
            // Flat segment
            tangents[i] = 0.0;
            tangents[i + 1] = 0.0;
            continue;
        }

        let alpha = tangents[i] / m;
        let beta = tangents[i + 1] / m;

        if alpha < 0.0 {
            tangents[i] = 0.0;
        }
        if beta < 0.0 {
            tangents[i + 1] = 0.0;
        }

        let radius = alpha.hypot(beta);
        if radius > MONOTONE_RADIUS {
            let tau = MONOTONE_RADIUS / radius;
            tangents[i] *= tau;
            tangents[i + 1] *= tau;
        }
    }

    tangents
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> MonotoneCubic {
        MonotoneCubic::new(
            vec![0.25, 1.0, 2.0, 5.0, 10.0, 30.0],
            vec![5.25, 5.0, 4.6, 4.2, 4.3, 4.6],
        )
        .unwrap()
    }

    #[test]
    fn test_passes_through_nodes() {
        let interp = sample();
        for (x, y) in interp.xs().iter().zip(interp.ys()) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_flat_extrapolation() {
        let interp = sample();
        assert_eq!(interp.interpolate(0.0).unwrap(), 5.25);
        assert_eq!(interp.interpolate(-3.0).unwrap(), 5.25);
        assert_eq!(interp.interpolate(30.0).unwrap(), 4.6);
        assert_eq!(interp.interpolate(100.0).unwrap(), 4.6);
        assert_eq!(interp.derivative(50.0).unwrap(), 0.0);
    }

    #[test]
    fn test_two_points_is_linear_like() {
        // One segment: both tangents equal the secant, so the cubic is the chord
        let interp = MonotoneCubic::new(vec![1.0, 3.0], vec![2.0, 4.0]).unwrap();
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_segment_zeroes_tangents() {
        let interp = MonotoneCubic::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 2.0, 2.0, 3.0]).unwrap();
        assert_eq!(interp.tangents()[1], 0.0);
        assert_eq!(interp.tangents()[2], 0.0);
        for x in [1.1, 1.5, 1.9] {
            assert_relative_eq!(interp.interpolate(x).unwrap(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_local_extremum_clamps_tangent() {
        // Node 1 is a peak: averaged tangent has the wrong sign for segment 1
        let interp = MonotoneCubic::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.5]).unwrap();
        assert_eq!(interp.tangents()[1], 0.0);
        for x in [1.2, 1.5, 1.8] {
            let y = interp.interpolate(x).unwrap();
            assert!(y <= 1.0 && y >= 0.5, "overshoot at {x}: {y}");
        }
    }

    #[test]
    fn test_steep_step_is_rescaled() {
        let interp =
            MonotoneCubic::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 0.01, 1.0, 1.01]).unwrap();
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=300 {
            let x = f64::from(i) / 100.0;
            let y = interp.interpolate(x).unwrap();
            assert!(y >= prev - 1e-12, "not monotone at {x}");
            prev = y;
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let interp = sample();
        let h = 1e-6;
        for x in [0.5, 1.5, 3.0, 7.5, 20.0] {
            let numerical =
                (interp.interpolate(x + h).unwrap() - interp.interpolate(x - h).unwrap()) / (2.0 * h);
            assert_relative_eq!(interp.derivative(x).unwrap(), numerical, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(MonotoneCubic::new(vec![1.0], vec![1.0]).is_err());
        assert!(MonotoneCubic::new(vec![1.0, 2.0], vec![1.0]).is_err());
        assert!(MonotoneCubic::new(vec![2.0, 1.0], vec![1.0, 2.0]).is_err());
        assert!(MonotoneCubic::new(vec![1.0, 1.0], vec![1.0, 2.0]).is_err());
        assert!(MonotoneCubic::new(vec![1.0, 2.0], vec![f64::NAN, 2.0]).is_err());
        assert!(sample().interpolate(f64::NAN).is_err());
    }
}
