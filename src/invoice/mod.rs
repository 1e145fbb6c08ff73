//! Invoice breakdown and summary modules

pub mod breakdown;
pub mod summary;

pub use breakdown::*;
pub use summary::*;
