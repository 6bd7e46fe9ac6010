//! Property-based tests for certificate totals.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::certificate::{CertificateTotals, WhtLine, compute_tax_line};
use super::income_type::IncomeType;

fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..=1_500i64).prop_map(|v| Decimal::new(v, 2))
}

fn income_type() -> impl Strategy<Value = IncomeType> {
    prop::sample::select(IncomeType::ALL.to_vec())
}

fn wht_line() -> impl Strategy<Value = WhtLine> {
    (income_type(), amount(), prop::option::of(rate())).prop_map(|(income_type, amount, rate)| {
        let paid_on = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap_or_default();
        let line = WhtLine::new(income_type, paid_on, amount);
        match rate {
            Some(rate) => line.with_rate(rate),
            None => line,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Net payable is always the paid total minus the withheld total.
    #[test]
    fn prop_net_payable_identity(lines in prop::collection::vec(wht_line(), 0..12)) {
        let totals = CertificateTotals::from_lines(&lines);
        prop_assert_eq!(totals.net_payable, totals.total_amount - totals.total_tax);
    }

    /// Certificate tax is the sum of the per-line tax.
    #[test]
    fn prop_total_tax_is_sum_of_lines(lines in prop::collection::vec(wht_line(), 0..12)) {
        let totals = CertificateTotals::from_lines(&lines);
        let expected: Decimal = lines
            .iter()
            .map(|l| compute_tax_line(l.amount, l.effective_rate()))
            .sum();
        prop_assert_eq!(totals.total_tax, expected);
    }

    /// Withholding never exceeds the payment at statutory rates.
    #[test]
    fn prop_tax_not_above_amount(line in wht_line()) {
        prop_assert!(line.tax_amount() <= line.amount);
    }
}
