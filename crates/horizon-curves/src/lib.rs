//! # Horizon Curves
//!
//! Zero-rate curves for the Horizon bond analytics kernel.
//!
//! This crate provides:
//!
//! - **Zero Curve**: [`ZeroCurve`], a validated, immutable set of pillars that
//!   owns its monotone cubic interpolant
//! - **Interpolation**: [`interpolate_rate`] for one-off lookups on raw pillars
//! - **Bumping**: Parallel shifts, credit-spread overlays, steepeners and
//!   flatteners for attribution and scenario construction
//!
//! ## Quick Start
//!
//! ```rust
//! use horizon_curves::{CurvePoint, ParallelBump, ScenarioBump, ZeroCurve};
//!
//! let curve = ZeroCurve::new(vec![
//!     CurvePoint::new(0.25, 5.30),
//!     CurvePoint::new(2.0, 4.70),
//!     CurvePoint::new(10.0, 4.25),
//!     CurvePoint::new(30.0, 4.45),
//! ])
//! .unwrap();
//!
//! // Zero rate in percent, and the annually compounded discount factor
//! let rate = curve.rate_at(5.0).unwrap();
//! let df = curve.discount_factor(5.0).unwrap();
//! assert!(df < 1.0);
//!
//! // +10bp parallel move
//! let bumped = ParallelBump::new(10.0).apply(&curve).unwrap();
//! assert!((bumped.rate_at(5.0).unwrap() - rate - 0.10).abs() < 1e-12);
//!
//! // 25bp steepener pivoting at 5y
//! let steeper = ScenarioBump::steepener(25.0, 25.0, 5.0).apply(&curve).unwrap();
//! assert!(steeper.rate_at(30.0).unwrap() > curve.rate_at(30.0).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod bumping;
pub mod error;
pub mod zero_curve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bumping::{ParallelBump, ScenarioBump};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::zero_curve::{interpolate_rate, CurvePoint, ZeroCurve};
}

pub use bumping::{ParallelBump, ScenarioBump};
pub use error::{CurveError, CurveResult};
pub use zero_curve::{interpolate_rate, CurvePoint, ZeroCurve};
