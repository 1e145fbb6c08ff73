//! # GST Core
//!
//! A GST (Goods and Services Tax) calculation library for Indian
//! point-of-sale billing, providing forward and reverse tax calculation,
//! multi-item breakdowns, discount handling, HSN classification, GSTIN
//! validation, and invoice summaries.
//!
//! ## Features
//!
//! - **GST calculation**: CGST/SGST split for intra-state supplies, IGST for inter-state
//! - **Reverse calculation**: extract the tax content of a tax-inclusive price
//! - **Tax breakdowns**: per-item and aggregate totals for multi-item sales
//! - **Discount handling**: discounts on the base amount or the tax-inclusive total
//! - **HSN classification**: built-in rate table with custom per-code overrides
//! - **GSTIN validation**: format checks, state codes, supply-type derivation
//! - **Invoice summaries**: B2B detection and the ₹50,000 e-invoice threshold
//! - **Indian currency handling**: cash/digital rounding and en-IN formatting
//!
//! ## Quick Start
//!
//! ```rust
//! use gst_core::{GstCalculation, GstRate};
//! use bigdecimal::BigDecimal;
//!
//! let calculation = GstCalculation::calculate(
//!     BigDecimal::from(100),
//!     GstRate::intra_state(BigDecimal::from(18)),
//! )?;
//!
//! assert_eq!(calculation.sgst_amount, BigDecimal::from(9));
//! assert_eq!(calculation.cgst_amount, BigDecimal::from(9));
//! assert_eq!(calculation.total_amount, BigDecimal::from(118));
//! # Ok::<(), gst_core::GstError>(())
//! ```

pub mod invoice;
pub mod tax;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use invoice::*;
pub use tax::*;
pub use types::*;
pub use utils::*;
