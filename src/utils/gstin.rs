//! GSTIN format validation and state-code helpers

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::SupplyType;

/// GST state code for Maharashtra, where the POS verticals operate
pub const MAHARASHTRA_STATE_CODE: &str = "27";

// 2-digit state code, 5-letter PAN prefix, 4-digit PAN number, PAN check
// letter, entity code, literal Z, checksum character.
static GSTIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("valid GSTIN pattern")
});

/// Validate a GSTIN's format
///
/// Input is uppercased before matching. Empty or malformed input returns
/// `false` rather than erroring - an absent GSTIN just means a B2C
/// counterparty.
pub fn validate_gstin(gstin: &str) -> bool {
    if gstin.is_empty() {
        return false;
    }
    GSTIN_PATTERN.is_match(&gstin.to_uppercase())
}

/// State code of a GSTIN (its first two digits), if the GSTIN is valid
pub fn gstin_state_code(gstin: &str) -> Option<String> {
    if validate_gstin(gstin) {
        Some(gstin[..2].to_string())
    } else {
        None
    }
}

/// Derive the supply type between two GSTIN holders
///
/// Same registered state means an intra-state supply. Returns `None` when
/// either GSTIN is malformed.
pub fn supply_type_between(seller_gstin: &str, customer_gstin: &str) -> Option<SupplyType> {
    let seller_state = gstin_state_code(seller_gstin)?;
    let customer_state = gstin_state_code(customer_gstin)?;

    Some(if seller_state == customer_state {
        SupplyType::IntraState
    } else {
        SupplyType::InterState
    })
}
