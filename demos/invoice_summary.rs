//! Checkout-to-invoice walkthrough for a Maharashtra pharmacy counter

use bigdecimal::BigDecimal;
use gst_core::{
    format_indian_currency, round_to_indian_currency, supply_type_between, InvoiceItem,
    InvoiceSummary, SupplyType, MAHARASHTRA_STATE_CODE,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 GST Core - Invoice Summary Example\n");

    // 1. Derive the supply type from the two GSTINs
    let seller_gstin = "27AAPFU0939F1ZV";
    let customer_gstin = "27AADCB2230M1ZT";

    let supply_type =
        supply_type_between(seller_gstin, customer_gstin).unwrap_or(SupplyType::IntraState);

    println!("🏪 Seller GSTIN:   {} (state {})", seller_gstin, MAHARASHTRA_STATE_CODE);
    println!("🧑 Customer GSTIN: {}", customer_gstin);
    println!("   Supply type:    {:?}\n", supply_type);

    // 2. Bill the items
    let items = vec![
        InvoiceItem {
            description: "Paracetamol 500mg strip".to_string(),
            hsn_code: "3004".to_string(),
            quantity: BigDecimal::from(10),
            unit_price: BigDecimal::from(30),
            gst_rate: BigDecimal::from(12),
            discount: Some(BigDecimal::from(20)),
        },
        InvoiceItem {
            description: "Digital thermometer".to_string(),
            hsn_code: "9018".to_string(),
            quantity: BigDecimal::from(2),
            unit_price: BigDecimal::from(250),
            gst_rate: BigDecimal::from(12),
            discount: None,
        },
        InvoiceItem {
            description: "Protein powder 1kg".to_string(),
            hsn_code: "2106".to_string(),
            quantity: BigDecimal::from(1),
            unit_price: BigDecimal::from(1800),
            gst_rate: BigDecimal::from(18),
            discount: Some(BigDecimal::from(100)),
        },
    ];

    let invoice = InvoiceSummary::generate(&items, Some(customer_gstin), supply_type)?;

    println!("📋 Line Items:");
    for (i, line) in invoice.items.iter().enumerate() {
        println!(
            "  {}. {} (HSN {}) × {} @ ₹{}",
            i + 1,
            line.description,
            line.hsn_code,
            line.quantity,
            line.unit_price
        );
        println!(
            "     Base ₹{} - Discount ₹{} = Net ₹{} (GST ₹{})",
            line.base_amount,
            line.discount_amount,
            line.net_amount,
            line.gst_calculation.total_gst_amount
        );
    }
    println!();

    // 3. Aggregate summary
    let summary = &invoice.summary;
    println!("🧮 Invoice Summary:");
    println!("  Subtotal:    {}", format_indian_currency(&summary.subtotal, true));
    println!("  Total CGST:  {}", format_indian_currency(&summary.total_cgst, true));
    println!("  Total SGST:  {}", format_indian_currency(&summary.total_sgst, true));
    println!("  Total IGST:  {}", format_indian_currency(&summary.total_igst, true));
    println!("  Total Tax:   {}", format_indian_currency(&summary.total_tax, true));
    println!("  Grand Total: {}", format_indian_currency(&summary.grand_total, true));
    println!();

    // 4. Compliance flags
    println!("📑 Compliance:");
    println!("  B2B sale:          {}", invoice.is_b2b);
    println!("  E-invoice needed:  {}", invoice.requires_einvoice);
    println!();

    // 5. Settle in cash (nearest 5 paise)
    let cash_payable = round_to_indian_currency(&summary.grand_total, true);
    println!("💵 Cash payable: {}", format_indian_currency(&cash_payable, true));

    println!("\n🎉 Invoice summary example completed successfully!");
    Ok(())
}
