//! The four stages of the summary chain.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Result of the discount stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountResult {
    /// Discount taken off the subtotal.
    pub discount_amount: Decimal,
    /// Subtotal minus discount.
    pub after_discount: Decimal,
}

/// Result of the VAT stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatResult {
    /// VAT charged on the discounted amount.
    pub vat_amount: Decimal,
    /// Discounted amount plus VAT.
    pub grand_total: Decimal,
}

/// Returns `rate` percent of `amount`.
///
/// Every stage saturates at the bounds of [`Decimal`] rather than
/// overflowing, so the chain cannot fail on absurd input.
#[must_use]
pub fn percent_of(amount: Decimal, rate: Decimal) -> Decimal {
    amount.saturating_mul(rate) / Decimal::ONE_HUNDRED
}

/// Sums the line totals of a document.
///
/// An empty document sums to zero. Lines whose inputs were malformed have
/// already been coerced to zero and contribute nothing.
#[must_use]
pub fn aggregate(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .map(LineItem::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Applies a percentage discount to a subtotal.
///
/// The rate is used as given: a negative rate increases the amount and a
/// rate above 100 drives it below zero.
#[must_use]
pub fn apply_discount(subtotal: Decimal, discount_rate: Decimal) -> DiscountResult {
    let discount_amount = percent_of(subtotal, discount_rate);

    DiscountResult {
        discount_amount,
        after_discount: subtotal.saturating_sub(discount_amount),
    }
}

/// Applies a percentage VAT rate to the discounted amount.
///
/// The rate is a parameter; the company-wide default comes from settings at
/// the call site.
#[must_use]
pub fn apply_vat(after_discount: Decimal, vat_rate: Decimal) -> VatResult {
    let vat_amount = percent_of(after_discount, vat_rate);

    VatResult {
        vat_amount,
        grand_total: after_discount.saturating_add(vat_amount),
    }
}

/// Deducts withholding tax from the grand total.
///
/// The result may be negative when more is withheld than is owed.
#[must_use]
pub fn apply_withholding(grand_total: Decimal, withholding_amount: Decimal) -> Decimal {
    grand_total.saturating_sub(withholding_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_saturates_at_max() {
        let items = vec![
            LineItem::flat("Huge", Decimal::MAX),
            LineItem::flat("More", Decimal::MAX),
            LineItem::priced("Huger", Decimal::MAX, dec!(2)),
        ];
        assert_eq!(aggregate(&items), Decimal::MAX);
        assert_eq!(apply_vat(Decimal::MAX, dec!(7)).grand_total, Decimal::MAX);
        assert_eq!(apply_withholding(Decimal::MIN, dec!(1)), Decimal::MIN);
    }

    #[test]
    fn test_aggregate_mixed_lines() {
        let items = vec![
            LineItem::priced("Widget", dec!(2), dec!(100)),
            LineItem::flat("Delivery", dec!(50)),
        ];
        assert_eq!(aggregate(&items), dec!(250));
    }

    #[test]
    fn test_discount_ten_percent() {
        let result = apply_discount(dec!(250), dec!(10));
        assert_eq!(result.discount_amount, dec!(25));
        assert_eq!(result.after_discount, dec!(225));
    }

    #[test]
    fn test_discount_keeps_full_precision() {
        let result = apply_discount(dec!(100), dec!(33.333));
        assert_eq!(result.discount_amount, dec!(33.333));
        assert_eq!(result.after_discount, dec!(66.667));
    }

    #[test]
    fn test_discount_negative_rate_is_trusted() {
        let result = apply_discount(dec!(200), dec!(-10));
        assert_eq!(result.discount_amount, dec!(-20));
        assert_eq!(result.after_discount, dec!(220));
    }

    #[test]
    fn test_discount_above_hundred_is_trusted() {
        let result = apply_discount(dec!(200), dec!(150));
        assert_eq!(result.discount_amount, dec!(300));
        assert_eq!(result.after_discount, dec!(-100));
    }

    #[test]
    fn test_vat_seven_percent() {
        let result = apply_vat(dec!(225), dec!(7));
        assert_eq!(result.vat_amount, dec!(15.75));
        assert_eq!(result.grand_total, dec!(240.75));
    }

    #[test]
    fn test_withholding_deducts() {
        assert_eq!(apply_withholding(dec!(1605), dec!(30)), dec!(1575));
    }

    #[test]
    fn test_withholding_can_go_negative() {
        assert_eq!(apply_withholding(dec!(100), dec!(150)), dec!(-50));
    }
}
