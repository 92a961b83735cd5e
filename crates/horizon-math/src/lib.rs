//! # Horizon Math
//!
//! Numerical primitives for the Horizon bond analytics kernel.
//!
//! This crate provides:
//!
//! - **Interpolation**: Shape-preserving monotone cubic Hermite interpolation
//!   with flat extrapolation, the standard for sparse zero-rate curves
//! - **Solvers**: Newton-Raphson root finding that reports its last iterate
//!   when it fails to converge
//!
//! ## Design Philosophy
//!
//! - **Plain `f64`**: Results must reproduce existing outputs bit for bit
//! - **No hidden state**: Every interpolant is an explicit value owned by the caller
//! - **Failures carry estimates**: Non-convergence is reported, never silently swallowed

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, MonotoneCubic};
    pub use crate::solvers::{newton_raphson, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
