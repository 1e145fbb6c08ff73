//! Indian currency rounding and display formatting

use bigdecimal::{BigDecimal, RoundingMode};

/// Round a monetary amount to whole paise (2 decimal places)
///
/// Half-paisa values round away from zero. Every monetary field the
/// calculation types construct passes through this boundary.
pub fn round_to_paise(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfUp)
}

/// Round an amount as per Indian currency conventions
///
/// Cash settlements round to the nearest 5 paise since smaller coins are
/// out of circulation; digital settlements round to the nearest paisa.
/// This is a settlement-time policy - tax computation itself always works
/// at paisa precision, so only apply this to the amount a customer pays.
pub fn round_to_indian_currency(amount: &BigDecimal, is_cash_transaction: bool) -> BigDecimal {
    if is_cash_transaction {
        let twentieths = (amount * BigDecimal::from(20)).with_scale_round(0, RoundingMode::HalfUp);
        (twentieths / BigDecimal::from(20)).with_scale(2)
    } else {
        round_to_paise(amount)
    }
}

/// Format an amount with Indian digit grouping and two fixed decimals
///
/// Grouping follows the en-IN locale: the last three integer digits form
/// one group, everything above groups in twos (`100000` formats as
/// `1,00,000.00`). With `show_symbol` the rupee sign is prefixed after
/// any minus sign, e.g. `-₹5.50`.
pub fn format_indian_currency(amount: &BigDecimal, show_symbol: bool) -> String {
    let rounded = round_to_paise(amount);
    let is_negative = rounded < BigDecimal::from(0);

    let plain = rounded.abs().to_string();
    let (rupees, paise) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    let magnitude = format!("{}.{}", group_indian_digits(rupees), paise);

    match (is_negative, show_symbol) {
        (true, true) => format!("-₹{}", magnitude),
        (true, false) => format!("-{}", magnitude),
        (false, true) => format!("₹{}", magnitude),
        (false, false) => magnitude,
    }
}

/// Insert en-IN group separators into a plain digit string
fn group_indian_digits(rupees: &str) -> String {
    if rupees.len() <= 3 {
        return rupees.to_string();
    }

    let (head, last_three) = rupees.split_at(rupees.len() - 3);

    // Above the thousands boundary, digits group in twos from the right
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}
