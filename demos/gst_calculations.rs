//! GST calculation examples

use bigdecimal::BigDecimal;
use gst_core::{
    format_indian_currency, gst_rate_for_hsn, round_to_indian_currency, DiscountedGst,
    GstCalculation, GstCalculator, GstRate, GstSlab, SupplyType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 GST Core - Calculation Examples\n");

    // 1. Standard GST slabs
    println!("📊 Standard GST Slabs:");
    let slabs = [
        (GstSlab::Essential, "Essential items (grains, pulses)"),
        (GstSlab::Reduced, "Reduced rate items (rice)"),
        (GstSlab::Standard, "Standard rate items (medicines, clothing)"),
        (GstSlab::Higher, "Higher rate items (most goods and services)"),
        (GstSlab::Luxury, "Luxury/Sin goods"),
    ];

    for (slab, description) in slabs.iter() {
        println!("  {:?}: {}% - {}", slab, slab.rate(), description);
    }
    println!();

    // 2. Intra-state vs inter-state calculations
    println!("🏢 Intra-state Supply (CGST + SGST):");
    let base_amount = BigDecimal::from(10000);

    let intra_state_calc = GstCalculation::calculate(
        base_amount.clone(),
        GstRate::intra_state(BigDecimal::from(18)),
    )?;

    println!("  Base Amount: ₹{}", intra_state_calc.base_amount);
    println!("  CGST (9%):   ₹{}", intra_state_calc.cgst_amount);
    println!("  SGST (9%):   ₹{}", intra_state_calc.sgst_amount);
    println!("  IGST:        ₹{}", intra_state_calc.igst_amount);
    println!("  Total GST:   ₹{}", intra_state_calc.total_gst_amount);
    println!("  Final Total: ₹{}", intra_state_calc.total_amount);
    println!();

    println!("🌍 Inter-state Supply (IGST only):");
    let inter_state_calc = GstCalculation::calculate(
        base_amount.clone(),
        GstRate::inter_state(BigDecimal::from(18)),
    )?;

    println!("  Base Amount: ₹{}", inter_state_calc.base_amount);
    println!("  CGST:        ₹{}", inter_state_calc.cgst_amount);
    println!("  SGST:        ₹{}", inter_state_calc.sgst_amount);
    println!("  IGST (18%):  ₹{}", inter_state_calc.igst_amount);
    println!("  Total GST:   ₹{}", inter_state_calc.total_gst_amount);
    println!("  Final Total: ₹{}", inter_state_calc.total_amount);
    println!();

    // 3. Reverse calculation (tax-inclusive price to base)
    println!("🔄 Reverse Calculation (Inclusive to Base):");
    let inclusive_amount = BigDecimal::from(11800);
    let reverse_calc = GstCalculation::reverse_calculate(
        inclusive_amount.clone(),
        GstRate::intra_state(BigDecimal::from(18)),
    )?;

    println!("  Given Total: ₹{}", inclusive_amount);
    println!("  Base Amount: ₹{}", reverse_calc.base_amount);
    println!("  GST Amount:  ₹{}", reverse_calc.total_gst_amount);
    println!("  CGST:        ₹{}", reverse_calc.cgst_amount);
    println!("  SGST:        ₹{}", reverse_calc.sgst_amount);
    println!();

    // 4. HSN rate classification
    println!("🏷️ HSN Rate Lookup:");
    let products = [
        ("1006", "Rice"),
        ("1001", "Wheat"),
        ("3004", "Medicaments"),
        ("8517", "Mobile phones"),
        ("4901", "Printed books (unmapped, defaults)"),
    ];

    for (hsn, description) in products.iter() {
        println!("  HSN {}: {}% - {}", hsn, gst_rate_for_hsn(hsn), description);
    }
    println!();

    // 5. Calculator engine with custom HSN rates
    println!("⚙️ Calculator with Custom HSN Rate:");
    let mut calculator = GstCalculator::new(SupplyType::IntraState);
    calculator.set_custom_hsn_rate("4901", BigDecimal::from(5))?;

    let custom_calc = calculator.calculate_for_hsn(BigDecimal::from(5000), "4901", None)?;

    println!("  HSN 4901 overridden to 5%");
    println!("  Base Amount: ₹{}", custom_calc.base_amount);
    println!("  Total GST:   ₹{}", custom_calc.total_gst_amount);
    println!("  Total:       ₹{}", custom_calc.total_amount);
    println!();

    // 6. Discounts with GST
    println!("💸 Discount Handling:");
    let on_base = DiscountedGst::calculate(
        BigDecimal::from(1000),
        BigDecimal::from(10),
        GstRate::intra_state(BigDecimal::from(18)),
        true,
    )?;

    println!("  ₹1000 at 18% with 10% off the base:");
    println!("    Discount:       ₹{}", on_base.discount_amount);
    println!("    New Base:       ₹{}", on_base.discounted_gst.base_amount);
    println!("    New Total:      ₹{}", on_base.discounted_gst.total_amount);
    println!("    Total Savings:  ₹{}", on_base.total_savings);

    let on_total = DiscountedGst::calculate(
        BigDecimal::from(1000),
        BigDecimal::from(10),
        GstRate::intra_state(BigDecimal::from(18)),
        false,
    )?;

    println!("  ₹1000 at 18% with 10% off the inclusive total:");
    println!("    Discount:       ₹{}", on_total.discount_amount);
    println!("    New Base:       ₹{}", on_total.discounted_gst.base_amount);
    println!("    Total Savings:  ₹{}", on_total.total_savings);
    println!();

    // 7. Settlement rounding and display formatting
    println!("💰 Settlement Rounding and Formatting:");
    let payable: BigDecimal = "101.23".parse()?;
    println!(
        "  Cash payment:    {} -> {}",
        payable,
        round_to_indian_currency(&payable, true)
    );
    println!(
        "  Digital payment: {} -> {}",
        payable,
        round_to_indian_currency(&payable, false)
    );
    println!(
        "  Display:         {}",
        format_indian_currency(&BigDecimal::from(100000), true)
    );
    println!();

    // 8. Validation
    println!("✅ Rate Validation:");
    match GstCalculation::calculate(BigDecimal::from(100), GstRate::intra_state(BigDecimal::from(101))) {
        Ok(_) => println!("  ✓ Valid rate"),
        Err(e) => println!("  ❌ {}", e),
    }
    match GstCalculation::calculate(BigDecimal::from(-1), GstRate::intra_state(BigDecimal::from(18))) {
        Ok(_) => println!("  ✓ Valid amount"),
        Err(e) => println!("  ❌ {}", e),
    }

    println!("\n🎉 GST calculation examples completed successfully!");
    Ok(())
}
