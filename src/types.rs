//! Core types shared across the GST calculation modules

use serde::{Deserialize, Serialize};

/// Locality of a taxable supply under Indian GST rules
///
/// The supply type decides how the total GST rate is levied: an
/// intra-state supply is split equally into CGST and SGST, while an
/// inter-state supply is charged as a single undivided IGST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplyType {
    /// Buyer and seller are registered in the same state - CGST + SGST
    IntraState,
    /// Supply crosses state lines - IGST only
    InterState,
}

impl SupplyType {
    /// Returns true for same-state supplies
    pub fn is_intra_state(&self) -> bool {
        matches!(self, SupplyType::IntraState)
    }
}

/// Point-of-sale counters serve walk-in customers in their own state,
/// so same-state supply is the default.
impl Default for SupplyType {
    fn default() -> Self {
        SupplyType::IntraState
    }
}

/// Errors that can occur during GST calculations
#[derive(Debug, thiserror::Error)]
pub enum GstError {
    #[error("Invalid GST rate: {0}")]
    InvalidRate(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Result type for GST operations
pub type GstResult<T> = Result<T, GstError>;
