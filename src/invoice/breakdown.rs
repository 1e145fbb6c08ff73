//! Per-item tax processing and aggregate breakdowns for multi-item sales

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::tax::gst::{GstCalculation, GstRate};
use crate::types::{GstResult, SupplyType};

/// A raw sale line as entered at the counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description
    pub description: String,
    /// Unit amount before tax
    pub amount: BigDecimal,
    /// Total GST rate percentage for the item
    pub gst_rate: BigDecimal,
    /// Units sold; `None` means a single unit
    pub quantity: Option<BigDecimal>,
}

/// A sale line after tax computation
///
/// Exactly one of the SGST/CGST pair or IGST is populated, per the
/// supply type of the sale; the other side is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedLineItem {
    /// Item description
    pub description: String,
    /// Taxable line amount (unit amount times quantity)
    pub amount: BigDecimal,
    /// Total GST rate percentage applied
    pub gst_rate: BigDecimal,
    /// SGST amount for the line
    pub sgst: BigDecimal,
    /// CGST amount for the line
    pub cgst: BigDecimal,
    /// IGST amount for the line
    pub igst: BigDecimal,
}

/// Aggregate tax position over a list of sale lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Sum of taxable line amounts
    pub subtotal: BigDecimal,
    /// Total SGST across all lines
    pub total_sgst: BigDecimal,
    /// Total CGST across all lines
    pub total_cgst: BigDecimal,
    /// Total IGST across all lines
    pub total_igst: BigDecimal,
    /// Total tax (SGST + CGST + IGST)
    pub total_tax: BigDecimal,
    /// Subtotal plus total tax
    pub grand_total: BigDecimal,
    /// Processed lines in input order
    pub items: Vec<ProcessedLineItem>,
}

impl TaxBreakdown {
    /// Compute the tax breakdown for a list of sale lines
    ///
    /// The supply type is uniform across the whole sale. Any invalid line
    /// aborts the computation with no partial result.
    pub fn calculate(line_items: &[LineItem], supply_type: SupplyType) -> GstResult<Self> {
        let mut items = Vec::with_capacity(line_items.len());

        for line in line_items {
            let quantity = line
                .quantity
                .clone()
                .unwrap_or_else(|| BigDecimal::from(1));
            let line_amount = &line.amount * quantity;
            let calculation = GstCalculation::calculate(
                line_amount,
                GstRate::new(line.gst_rate.clone(), supply_type),
            )?;

            items.push(ProcessedLineItem {
                description: line.description.clone(),
                amount: calculation.base_amount,
                gst_rate: line.gst_rate.clone(),
                sgst: calculation.sgst_amount,
                cgst: calculation.cgst_amount,
                igst: calculation.igst_amount,
            });
        }

        let subtotal: BigDecimal = items.iter().map(|item| &item.amount).sum();
        let total_sgst: BigDecimal = items.iter().map(|item| &item.sgst).sum();
        let total_cgst: BigDecimal = items.iter().map(|item| &item.cgst).sum();
        let total_igst: BigDecimal = items.iter().map(|item| &item.igst).sum();

        let total_tax = &total_sgst + &total_cgst + &total_igst;
        let grand_total = &subtotal + &total_tax;

        Ok(Self {
            subtotal,
            total_sgst,
            total_cgst,
            total_igst,
            total_tax,
            grand_total,
            items,
        })
    }
}
