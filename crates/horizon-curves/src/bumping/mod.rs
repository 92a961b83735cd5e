//! Curve bumping for attribution and scenario construction.
//!
//! - [`ParallelBump`]: Uniform shift of every pillar
//! - [`ScenarioBump`]: Parallel, steepener and flattener market moves
//!
//! # Design
//!
//! Bumps produce new [`ZeroCurve`](crate::ZeroCurve) values rather than
//! wrapping the base curve. Each bumped curve owns its own interpolant,
//! rebuilt from the shifted pillars, so it can be priced like any other
//! curve and outlives the base.
//!
//! # Example: Scenario Analysis
//!
//! ```rust
//! use horizon_curves::bumping::ScenarioBump;
//! use horizon_curves::ZeroCurve;
//!
//! let start = ZeroCurve::flat(4.0).unwrap();
//! let end = ScenarioBump::parallel(25.0).apply(&start).unwrap();
//!
//! assert!((end.rate_at(5.0).unwrap() - 4.25).abs() < 1e-12);
//! ```

mod parallel;
mod scenario;

pub use parallel::ParallelBump;
pub use scenario::{ScenarioBump, LONG_END_TENOR};
