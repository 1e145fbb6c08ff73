//! HSN (Harmonized System Nomenclature) classification to GST rates

use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tax::gst::GstRate;

/// Standard GST slabs for categories of goods and services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstSlab {
    /// Essential items (staple grains, pulses) - 0%
    Essential,
    /// Reduced rate items - 5%
    Reduced,
    /// Standard rate items (medicines, clothing) - 12%
    Standard,
    /// Higher rate items (most processed goods and services) - 18%
    Higher,
    /// Luxury/Sin goods - 28%
    Luxury,
}

impl GstSlab {
    /// Get the GST rate percentage for this slab
    pub fn rate(&self) -> BigDecimal {
        match self {
            GstSlab::Essential => BigDecimal::from(0),
            GstSlab::Reduced => BigDecimal::from(5),
            GstSlab::Standard => BigDecimal::from(12),
            GstSlab::Higher => BigDecimal::from(18),
            GstSlab::Luxury => BigDecimal::from(28),
        }
    }

    /// Create an intra-state GST rate for this slab
    pub fn intra_state_rate(&self) -> GstRate {
        GstRate::intra_state(self.rate())
    }

    /// Create an inter-state GST rate for this slab
    pub fn inter_state_rate(&self) -> GstRate {
        GstRate::inter_state(self.rate())
    }
}

/// Built-in HSN prefix to slab table
///
/// Covers the product categories the POS verticals sell: pharmacy,
/// grains and agricultural produce, restaurant supplies, common retail.
static HSN_SLABS: Lazy<HashMap<&'static str, GstSlab>> = Lazy::new(|| {
    HashMap::from([
        // Medicines and medical equipment
        ("3004", GstSlab::Standard),
        ("9018", GstSlab::Standard),
        // Food items
        ("1006", GstSlab::Reduced),
        ("1001", GstSlab::Essential),
        ("1701", GstSlab::Essential),
        // Agricultural products
        ("1201", GstSlab::Essential),
        ("1202", GstSlab::Essential),
        ("0713", GstSlab::Essential),
        // Restaurant items
        ("2101", GstSlab::Higher),
        ("2102", GstSlab::Higher),
        ("2103", GstSlab::Higher),
        // Common retail items
        ("8517", GstSlab::Higher),
        ("6204", GstSlab::Standard),
        ("6203", GstSlab::Standard),
    ])
});

/// Look up the slab for an HSN code by its first four characters
///
/// Returns `None` for codes the table does not cover, letting callers
/// distinguish an unmapped code from one that genuinely attracts 18%.
pub fn hsn_slab(hsn_code: &str) -> Option<GstSlab> {
    let prefix = hsn_code.get(..4).unwrap_or(hsn_code);
    HSN_SLABS.get(prefix).copied()
}

/// GST rate for an HSN code; unmapped codes default to the 18% slab
pub fn gst_rate_for_hsn(hsn_code: &str) -> BigDecimal {
    hsn_slab(hsn_code).unwrap_or(GstSlab::Higher).rate()
}
