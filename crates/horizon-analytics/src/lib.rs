//! # Horizon Analytics
//!
//! Total-return attribution for fixed-coupon bonds.
//!
//! Given a start curve, an end curve and a horizon, [`compute_total_return`]
//! splits a bond's return into:
//!
//! - **Income**: coupons received and their reinvestment to the horizon
//! - **Rolldown**: time passing on an unchanged curve
//! - **Duration**: a parallel move at the bond's remaining maturity
//! - **Shape**: the rest of the curve change
//!
//! [`attribute_horizons`] runs the same attribution over many horizons.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod attribution;
pub mod error;
pub mod sweep;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::attribution::{compute_total_return, ReturnAttributor, TotalReturnResult};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::sweep::attribute_horizons;
}

pub use attribution::{compute_total_return, ReturnAttributor, TotalReturnResult};
pub use error::{AnalyticsError, AnalyticsResult};
pub use sweep::attribute_horizons;
