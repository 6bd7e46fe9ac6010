//! Thai taxpayer identification numbers.

/// Checks a 13-digit taxpayer ID against its mod-11 check digit.
///
/// Dashes and spaces used for display grouping are ignored.
#[must_use]
pub fn is_valid_tax_id(tax_id: &str) -> bool {
    let digits: Option<Vec<u32>> = tax_id
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .map(|c| c.to_digit(10))
        .collect();

    let Some(digits) = digits else {
        return false;
    };
    if digits.len() != 13 {
        return false;
    }

    let weighted: u32 = digits[..12]
        .iter()
        .zip((2..=13).rev())
        .map(|(d, weight)| d * weight)
        .sum();

    (11 - weighted % 11) % 10 == digits[12]
}
