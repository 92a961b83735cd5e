//! # Horizon Bonds
//!
//! Bond pricing for the Horizon bond analytics kernel.
//!
//! This crate provides:
//!
//! - **Types**: [`BondParameters`], [`Frequency`] and [`CashFlow`]
//! - **Cash Flows**: remaining coupon schedule and straight-line accrual
//! - **Pricing**: dirty/clean price, Macaulay duration and convexity off a zero curve
//! - **Yield**: Newton-Raphson yield-to-maturity at the coupon frequency
//!
//! ## Example
//!
//! ```rust
//! use horizon_bonds::prelude::*;
//! use horizon_curves::{CurvePoint, ZeroCurve};
//!
//! let curve = ZeroCurve::new(vec![
//!     CurvePoint::new(0.5, 4.10),
//!     CurvePoint::new(2.0, 4.30),
//!     CurvePoint::new(10.0, 4.60),
//! ])
//! .unwrap();
//!
//! let bond = BondParameters::new(4.5, 7.0, Frequency::SemiAnnual);
//! let result = price_bond(&bond, &curve, 0.25).unwrap();
//!
//! assert!(result.accrued_interest > 0.0);
//! assert!(result.duration < 7.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]

pub mod cashflows;
pub mod error;
pub mod pricing;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{schedule, CashFlowSchedule};
    pub use crate::error::{PricingError, PricingResult};
    pub use crate::pricing::{price_bond, BondResult, PricingEngine, YieldResult, YieldSolver, YieldStatus};
    pub use crate::types::{BondParameters, CashFlow, Frequency};
}

pub use error::{PricingError, PricingResult};
pub use pricing::{price_bond, BondResult, PricingEngine, YieldSolver, YieldStatus};
pub use types::{BondParameters, CashFlow, Frequency};
