//! Amounts written out in Thai words.
//!
//! Certificates and receipts repeat the total in words, e.g. 1,234.56 is
//! "หนึ่งพันสองร้อยสามสิบสี่บาทห้าสิบหกสตางค์".

use rust_decimal::{Decimal, RoundingStrategy};

const DIGITS: [&str; 10] = [
    "ศูนย์", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
];
const PLACES: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];
const MILLION: &str = "ล้าน";

/// Writes a baht amount in Thai words, rounded to satang.
#[must_use]
pub fn baht_text(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        return format!("ลบ{}", baht_text(-rounded));
    }

    let baht = rounded.trunc();
    let satang = ((rounded - baht) * Decimal::ONE_HUNDRED).trunc();

    if baht.is_zero() && satang.is_zero() {
        return format!("{}บาทถ้วน", DIGITS[0]);
    }

    let mut text = String::new();
    if !baht.is_zero() {
        text.push_str(&read_digits(&integer_digits(baht)));
        text.push_str("บาท");
    }
    if satang.is_zero() {
        text.push_str("ถ้วน");
    } else {
        text.push_str(&read_digits(&integer_digits(satang)));
        text.push_str("สตางค์");
    }
    text
}

fn integer_digits(value: Decimal) -> String {
    let text = value.to_string();
    text.split('.').next().unwrap_or_default().to_string()
}

/// Reads a digit string, grouping by millions.
fn read_digits(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    if digits.len() <= 6 {
        return read_group(digits, false);
    }

    let (high, low) = digits.split_at(digits.len() - 6);
    format!("{}{MILLION}{}", read_digits(high), read_group(low, true))
}

/// Reads up to six digits.
///
/// `after_million` is set for the group below a million prefix, whose
/// trailing one is read "เอ็ด" even when the rest of the group is zero.
fn read_group(group: &str, after_million: bool) -> String {
    let digits: Vec<usize> = group
        .bytes()
        .map(|b| usize::from(b - b'0'))
        .collect();
    let has_higher_digits = after_million || digits.iter().rev().skip(1).any(|d| *d != 0);

    let mut text = String::new();
    for (i, &d) in digits.iter().enumerate() {
        if d == 0 {
            continue;
        }
        let place = digits.len() - 1 - i;
        match place {
            0 if d == 1 && has_higher_digits => text.push_str("เอ็ด"),
            0 => text.push_str(DIGITS[d]),
            1 => {
                match d {
                    1 => {}
                    2 => text.push_str("ยี่"),
                    _ => text.push_str(DIGITS[d]),
                }
                text.push_str(PLACES[1]);
            }
            _ => {
                text.push_str(DIGITS[d]);
                text.push_str(PLACES[place]);
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "ศูนย์บาทถ้วน")]
    #[case(dec!(1), "หนึ่งบาทถ้วน")]
    #[case(dec!(10), "สิบบาทถ้วน")]
    #[case(dec!(11), "สิบเอ็ดบาทถ้วน")]
    #[case(dec!(20), "ยี่สิบบาทถ้วน")]
    #[case(dec!(21), "ยี่สิบเอ็ดบาทถ้วน")]
    #[case(dec!(101), "หนึ่งร้อยเอ็ดบาทถ้วน")]
    #[case(dec!(550), "ห้าร้อยห้าสิบบาทถ้วน")]
    #[case(dec!(14450), "หนึ่งหมื่นสี่พันสี่ร้อยห้าสิบบาทถ้วน")]
    #[case(dec!(1500000), "หนึ่งล้านห้าแสนบาทถ้วน")]
    #[case(dec!(11000000), "สิบเอ็ดล้านบาทถ้วน")]
    #[case(dec!(1000001), "หนึ่งล้านเอ็ดบาทถ้วน")]
    #[case(dec!(2000021), "สองล้านยี่สิบเอ็ดบาทถ้วน")]
    #[case(dec!(1000000), "หนึ่งล้านบาทถ้วน")]
    #[case(dec!(101000001), "หนึ่งร้อยเอ็ดล้านเอ็ดบาทถ้วน")]
    #[case(dec!(1234.56), "หนึ่งพันสองร้อยสามสิบสี่บาทห้าสิบหกสตางค์")]
    #[case(dec!(0.50), "ห้าสิบสตางค์")]
    #[case(dec!(240.75), "สองร้อยสี่สิบบาทเจ็ดสิบห้าสตางค์")]
    fn test_baht_text(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(baht_text(amount), expected);
    }

    #[test]
    fn test_baht_text_rounds_to_satang() {
        assert_eq!(baht_text(dec!(99.999)), "หนึ่งร้อยบาทถ้วน");
        assert_eq!(baht_text(dec!(0.005)), "หนึ่งสตางค์");
    }

    #[test]
    fn test_baht_text_negative() {
        assert_eq!(baht_text(dec!(-50)), "ลบห้าสิบบาทถ้วน");
    }
}
