//! Bond description types.

mod bond;
mod frequency;

pub use bond::{BondParameters, CashFlow, DEFAULT_FACE_VALUE, MAX_MATURITY_YEARS};
pub use frequency::Frequency;
