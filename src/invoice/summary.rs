//! Invoice summaries with B2B detection and e-invoice determination

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::invoice::breakdown::{LineItem, TaxBreakdown};
use crate::tax::gst::{GstCalculation, GstRate};
use crate::types::{GstResult, SupplyType};
use crate::utils::currency::round_to_paise;
use crate::utils::gstin::validate_gstin;

/// E-invoicing is mandatory for B2B invoices at or above this grand total
pub const E_INVOICE_THRESHOLD_RUPEES: i64 = 50_000;

/// An invoice line as captured at billing time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Item description
    pub description: String,
    /// HSN classification code for the item
    pub hsn_code: String,
    /// Units billed
    pub quantity: BigDecimal,
    /// Price per unit before tax
    pub unit_price: BigDecimal,
    /// Total GST rate percentage for the item
    pub gst_rate: BigDecimal,
    /// Flat rupee discount on the line, if any
    pub discount: Option<BigDecimal>,
}

/// An invoice line with its amounts and tax worked out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineDetail {
    /// Item description
    pub description: String,
    /// HSN classification code for the item
    pub hsn_code: String,
    /// Units billed
    pub quantity: BigDecimal,
    /// Price per unit before tax
    pub unit_price: BigDecimal,
    /// Total GST rate percentage applied
    pub gst_rate: BigDecimal,
    /// Quantity times unit price, before discount
    pub base_amount: BigDecimal,
    /// Discount applied to the line
    pub discount_amount: BigDecimal,
    /// Taxable value after discount
    pub net_amount: BigDecimal,
    /// GST computed on the net amount
    pub gst_calculation: GstCalculation,
}

/// Complete invoice summary for a sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    /// Fully detailed lines in input order
    pub items: Vec<InvoiceLineDetail>,
    /// Aggregate tax breakdown over the net amounts
    pub summary: TaxBreakdown,
    /// Counterparty holds a valid GSTIN
    pub is_b2b: bool,
    /// B2B and at or above the e-invoice threshold
    pub requires_einvoice: bool,
}

impl InvoiceSummary {
    /// Build the invoice summary for a set of billed items
    ///
    /// A missing or malformed customer GSTIN makes the sale B2C, never an
    /// error. A line discount exceeding the line's base amount fails as an
    /// invalid amount.
    pub fn generate(
        invoice_items: &[InvoiceItem],
        customer_gstin: Option<&str>,
        supply_type: SupplyType,
    ) -> GstResult<Self> {
        let mut items = Vec::with_capacity(invoice_items.len());

        for item in invoice_items {
            let base_amount = &item.quantity * &item.unit_price;
            let discount_amount = item
                .discount
                .clone()
                .unwrap_or_else(|| BigDecimal::from(0));
            let net_amount = &base_amount - &discount_amount;
            let gst_calculation = GstCalculation::calculate(
                net_amount.clone(),
                GstRate::new(item.gst_rate.clone(), supply_type),
            )?;

            items.push(InvoiceLineDetail {
                description: item.description.clone(),
                hsn_code: item.hsn_code.clone(),
                quantity: item.quantity.clone(),
                unit_price: item.unit_price.clone(),
                gst_rate: item.gst_rate.clone(),
                base_amount: round_to_paise(&base_amount),
                discount_amount: round_to_paise(&discount_amount),
                net_amount: round_to_paise(&net_amount),
                gst_calculation,
            });
        }

        let breakdown_lines: Vec<LineItem> = items
            .iter()
            .map(|item| LineItem {
                description: item.description.clone(),
                amount: item.net_amount.clone(),
                gst_rate: item.gst_rate.clone(),
                quantity: None,
            })
            .collect();
        let summary = TaxBreakdown::calculate(&breakdown_lines, supply_type)?;

        let is_b2b = customer_gstin.is_some_and(validate_gstin);
        let requires_einvoice =
            is_b2b && summary.grand_total >= BigDecimal::from(E_INVOICE_THRESHOLD_RUPEES);

        Ok(Self {
            items,
            summary,
            is_b2b,
            requires_einvoice,
        })
    }
}
