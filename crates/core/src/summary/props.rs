//! Property-based tests for the summary chain.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculation::{aggregate, apply_discount, apply_vat, apply_withholding};
use super::line_item::LineItem;
use bizdocs_shared::types::NegativeTotals;

use super::types::{DocumentSummary, SummaryInput};

/// Strategy to generate a non-negative amount (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a percentage rate (0.00 to 100.00).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate a single line item of either shape.
fn line_item() -> impl Strategy<Value = LineItem> {
    prop_oneof![
        ((0i64..1_000i64), amount())
            .prop_map(|(qty, price)| LineItem::priced("item", Decimal::from(qty), price)),
        amount().prop_map(|amount| LineItem::flat("item", amount)),
    ]
}

/// Strategy to generate a signed rate (-300.00 to 300.00).
fn signed_rate() -> impl Strategy<Value = Decimal> {
    (-30_000i64..=30_000i64).prop_map(|v| Decimal::new(v, 2))
}

fn line_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(line_item(), 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Concatenating two documents sums their subtotals.
    #[test]
    fn prop_aggregate_is_additive(a in line_items(), b in line_items()) {
        let mut combined = a.clone();
        combined.extend(b.iter().cloned());

        prop_assert_eq!(aggregate(&combined), aggregate(&a) + aggregate(&b));
    }

    /// Line order does not change the subtotal.
    #[test]
    fn prop_aggregate_ignores_order(items in line_items()) {
        let mut reversed = items.clone();
        reversed.reverse();

        prop_assert_eq!(aggregate(&items), aggregate(&reversed));
    }

    /// Same inputs, same outputs.
    #[test]
    fn prop_chain_is_idempotent(
        items in line_items(),
        discount in rate(),
        vat in rate(),
        withheld in amount(),
    ) {
        let input = SummaryInput::new(vat)
            .with_discount(discount)
            .with_withholding(withheld);

        prop_assert_eq!(
            DocumentSummary::compute(&items, &input),
            DocumentSummary::compute(&items, &input)
        );
        prop_assert_eq!(apply_discount(aggregate(&items), discount), apply_discount(aggregate(&items), discount));
    }

    /// Zero rates and zero withholding leave the amount unchanged.
    #[test]
    fn prop_zero_rate_identities(x in amount()) {
        prop_assert_eq!(apply_discount(x, Decimal::ZERO).after_discount, x);
        prop_assert_eq!(apply_vat(x, Decimal::ZERO).grand_total, x);
        prop_assert_eq!(apply_withholding(x, Decimal::ZERO), x);
    }

    /// A 100% discount leaves nothing.
    #[test]
    fn prop_full_discount_is_zero(x in amount()) {
        prop_assert_eq!(apply_discount(x, Decimal::ONE_HUNDRED).after_discount, Decimal::ZERO);
    }

    /// The parts of each stage add back up to its input.
    #[test]
    fn prop_stages_are_consistent(
        items in line_items(),
        discount in rate(),
        vat in rate(),
        withheld in amount(),
    ) {
        let input = SummaryInput::new(vat)
            .with_discount(discount)
            .with_withholding(withheld);
        let s = DocumentSummary::compute(&items, &input);

        prop_assert_eq!(s.discount_amount + s.after_discount, s.subtotal);
        prop_assert_eq!(s.after_discount + s.vat_amount, s.grand_total);
        prop_assert_eq!(s.net_total + s.withholding_amount, s.grand_total);
    }

    /// Clamped totals still add up stage by stage and never go negative.
    #[test]
    fn prop_clamped_stages_are_consistent(
        items in line_items(),
        discount in signed_rate(),
        vat in signed_rate(),
        withheld in amount(),
    ) {
        let input = SummaryInput::new(vat)
            .with_discount(discount)
            .with_withholding(withheld);
        let s = DocumentSummary::compute_with_policy(&items, &input, NegativeTotals::ClampToZero);

        prop_assert_eq!(s.discount_amount + s.after_discount, s.subtotal);
        prop_assert_eq!(s.after_discount + s.vat_amount, s.grand_total);
        prop_assert!(s.after_discount >= Decimal::ZERO);
        prop_assert!(s.grand_total >= Decimal::ZERO);
        prop_assert!(s.net_total >= Decimal::ZERO);
    }
}
