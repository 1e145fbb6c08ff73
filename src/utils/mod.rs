//! Utility modules

pub mod currency;
pub mod gstin;

pub use currency::*;
pub use gstin::*;
