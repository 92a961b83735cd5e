//! Zero-rate curves.
//!
//! A [`ZeroCurve`] is an immutable, validated set of (tenor, rate) pillars
//! together with the interpolant built from them. The interpolant is
//! constructed exactly once, when the curve is created, and travels with
//! the curve value: there is no process-wide cache, so two curves with the
//! same contents always interpolate identically and a curve can be shared
//! freely across threads.
//!
//! Rates are quoted in percent (4.5 means 4.5%) and interpreted with
//! discrete annual compounding.

use serde::{Deserialize, Serialize};
use tracing::debug;

use horizon_math::interpolation::{Interpolator, MonotoneCubic};

use crate::error::{CurveError, CurveResult};

/// Default tenor of the far pillar used by [`ZeroCurve::flat`].
const FLAT_CURVE_MAX_TENOR: f64 = 30.0;

/// A single curve pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Time to maturity in years.
    pub tenor: f64,
    /// Zero rate in percent.
    pub rate: f64,
}

impl CurvePoint {
    /// Creates a new curve point.
    #[must_use]
    pub fn new(tenor: f64, rate: f64) -> Self {
        Self { tenor, rate }
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((tenor, rate): (f64, f64)) -> Self {
        Self { tenor, rate }
    }
}

/// A validated zero-rate curve with its interpolant.
///
/// # Example
///
/// ```rust
/// use horizon_curves::{CurvePoint, ZeroCurve};
///
/// // Caller order does not matter
/// let curve = ZeroCurve::new(vec![
///     CurvePoint::new(10.0, 4.7),
///     CurvePoint::new(0.5, 4.1),
///     CurvePoint::new(2.0, 4.3),
/// ])
/// .unwrap();
///
/// assert_eq!(curve.rate_at(2.0).unwrap(), 4.3);
/// assert_eq!(curve.rate_at(40.0).unwrap(), 4.7); // flat beyond the last pillar
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct ZeroCurve {
    points: Vec<CurvePoint>,
    interpolant: MonotoneCubic,
}

// A validated curve always has at least two pillars
#[allow(clippy::len_without_is_empty)]
impl ZeroCurve {
    /// Builds a curve from pillars in any order.
    ///
    /// Points are sorted by tenor before the interpolant is built.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InsufficientPoints`] for fewer than two pillars
    /// - [`CurveError::InvalidValue`] for a non-finite tenor or rate
    /// - [`CurveError::NegativeTenor`] for a tenor below zero
    /// - [`CurveError::RateBelowFloor`] for a rate at or below -100%
    /// - [`CurveError::DuplicateTenor`] when two pillars share a tenor
    pub fn new(points: impl Into<Vec<CurvePoint>>) -> CurveResult<Self> {
        let mut points = points.into();

        if points.len() < 2 {
            return Err(CurveError::insufficient_points(2, points.len()));
        }

        for p in &points {
            if !p.tenor.is_finite() || !p.rate.is_finite() {
                return Err(CurveError::invalid_value(format!(
                    "non-finite curve point (tenor {}, rate {})",
                    p.tenor, p.rate
                )));
            }
            if p.tenor < 0.0 {
                return Err(CurveError::NegativeTenor { tenor: p.tenor });
            }
            if p.rate <= -100.0 {
                return Err(CurveError::RateBelowFloor {
                    tenor: p.tenor,
                    rate: p.rate,
                });
            }
        }

        points.sort_by(|a, b| a.tenor.total_cmp(&b.tenor));

        if let Some(pair) = points.windows(2).find(|w| w[0].tenor == w[1].tenor) {
            return Err(CurveError::DuplicateTenor {
                tenor: pair[0].tenor,
            });
        }

        let interpolant = MonotoneCubic::new(
            points.iter().map(|p| p.tenor).collect(),
            points.iter().map(|p| p.rate).collect(),
        )?;

        debug!(
            pillars = points.len(),
            min_tenor = points[0].tenor,
            max_tenor = points[points.len() - 1].tenor,
            "built zero curve"
        );

        Ok(Self {
            points,
            interpolant,
        })
    }

    /// Creates a curve at a single rate for every tenor.
    pub fn flat(rate: f64) -> CurveResult<Self> {
        Self::new(vec![
            CurvePoint::new(0.0, rate),
            CurvePoint::new(FLAT_CURVE_MAX_TENOR, rate),
        ])
    }

    /// Returns the pillars, sorted by tenor.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the number of pillars.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Shortest pillar tenor.
    pub fn min_tenor(&self) -> f64 {
        self.interpolant.min_x()
    }

    /// Longest pillar tenor.
    pub fn max_tenor(&self) -> f64 {
        self.interpolant.max_x()
    }

    /// Zero rate in percent at `tenor`.
    ///
    /// Flat outside the pillar range.
    pub fn rate_at(&self, tenor: f64) -> CurveResult<f64> {
        Ok(self.interpolant.interpolate(tenor)?)
    }

    /// Zero rate as a decimal (0.045 for 4.5%) at `tenor`.
    pub fn decimal_rate_at(&self, tenor: f64) -> CurveResult<f64> {
        Ok(self.rate_at(tenor)? / 100.0)
    }

    /// Discount factor at `tenor` under discrete annual compounding.
    ///
    /// `df = (1 + r)^(-t)`
    pub fn discount_factor(&self, tenor: f64) -> CurveResult<f64> {
        let r = self.decimal_rate_at(tenor)?;
        Ok((1.0 + r).powf(-tenor))
    }

    /// Growth factor from today to `tenor`, the reciprocal of [`Self::discount_factor`].
    pub fn growth_factor(&self, tenor: f64) -> CurveResult<f64> {
        let r = self.decimal_rate_at(tenor)?;
        Ok((1.0 + r).powf(tenor))
    }

    /// Returns a new curve with `shift` percent added to every pillar.
    pub fn shifted(&self, shift: f64) -> CurveResult<Self> {
        self.map_rates(|_, rate| rate + shift)
    }

    /// Returns a new curve with an additive credit spread in basis points.
    pub fn with_spread_bps(&self, spread_bps: f64) -> CurveResult<Self> {
        self.shifted(spread_bps / 100.0)
    }

    /// Returns a new curve with each pillar rate replaced by `f(tenor, rate)`.
    pub fn map_rates<F>(&self, f: F) -> CurveResult<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        Self::new(
            self.points
                .iter()
                .map(|p| CurvePoint::new(p.tenor, f(p.tenor, p.rate)))
                .collect::<Vec<_>>(),
        )
    }
}

impl TryFrom<Vec<CurvePoint>> for ZeroCurve {
    type Error = CurveError;

    fn try_from(points: Vec<CurvePoint>) -> CurveResult<Self> {
        Self::new(points)
    }
}

impl From<ZeroCurve> for Vec<CurvePoint> {
    fn from(curve: ZeroCurve) -> Self {
        curve.points
    }
}

/// Interpolates a zero rate (percent) at `tenor` from raw pillars.
///
/// Builds a throwaway [`ZeroCurve`]; callers pricing repeatedly against the
/// same pillars should build the curve once and reuse it.
///
/// # Example
///
/// ```rust
/// use horizon_curves::{interpolate_rate, CurvePoint};
///
/// let points = [CurvePoint::new(1.0, 4.0), CurvePoint::new(5.0, 4.5)];
/// assert_eq!(interpolate_rate(&points, 0.25).unwrap(), 4.0);
/// ```
pub fn interpolate_rate(points: &[CurvePoint], tenor: f64) -> CurveResult<f64> {
    ZeroCurve::new(points.to_vec())?.rate_at(tenor)
}
