//! Bond pricing calculations.
//!
//! This module provides:
//! - [`PricingEngine`]: discounts a cash flow schedule against a zero curve
//! - [`price_bond`]: one-shot pricing with the default yield solver
//! - [`YieldSolver`]: Newton-Raphson yield-to-maturity solver
//! - [`BondResult`]: price, yield and risk for one valuation

mod engine;
mod yield_solver;

pub use engine::{price_bond, BondResult, PricingEngine, YieldStatus};
pub use yield_solver::{pv_at_yield, pv_derivative, YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS};
