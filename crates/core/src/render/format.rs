//! Number formatting for printed output.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as printed: two decimals with thousands separators.
///
/// `1234567.891` becomes `1,234,567.89`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

/// Formats a percentage without trailing zeros, e.g. `7%` or `1.5%`.
#[must_use]
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "0.00")]
    #[case(dec!(5), "5.00")]
    #[case(dec!(240.75), "240.75")]
    #[case(dec!(1234.5), "1,234.50")]
    #[case(dec!(1234567.891), "1,234,567.89")]
    #[case(dec!(100000), "100,000.00")]
    #[case(dec!(0.005), "0.01")]
    #[case(dec!(-1500), "-1,500.00")]
    #[case(dec!(-0.001), "0.00")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[rstest]
    #[case(dec!(7), "7%")]
    #[case(dec!(7.00), "7%")]
    #[case(dec!(1.50), "1.5%")]
    #[case(dec!(0), "0%")]
    fn test_format_rate(#[case] rate: Decimal, #[case] expected: &str) {
        assert_eq!(format_rate(rate), expected);
    }
}
