//! Summary data types.

use bizdocs_shared::config::SummaryConfig;
use bizdocs_shared::types::{NegativeTotals, PayloadRounding};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculation::{aggregate, apply_discount, apply_vat, apply_withholding};
use super::line_item::LineItem;

/// Rates and deductions entered on a document form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryInput {
    /// Discount percentage.
    pub discount_rate: Decimal,
    /// VAT percentage.
    pub vat_rate: Decimal,
    /// Flat amount withheld from the grand total.
    pub withholding_amount: Decimal,
}

impl SummaryInput {
    /// Input with the given VAT rate and no discount or withholding.
    #[must_use]
    pub const fn new(vat_rate: Decimal) -> Self {
        Self {
            discount_rate: Decimal::ZERO,
            vat_rate,
            withholding_amount: Decimal::ZERO,
        }
    }

    /// Sets the discount percentage.
    #[must_use]
    pub const fn with_discount(mut self, discount_rate: Decimal) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    /// Sets the withheld amount.
    #[must_use]
    pub const fn with_withholding(mut self, withholding_amount: Decimal) -> Self {
        self.withholding_amount = withholding_amount;
        self
    }
}

/// Policies applied to a computed summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryPolicy {
    /// Rounding of the saved snapshot.
    pub rounding: PayloadRounding,
    /// Treatment of totals below zero.
    pub negative_totals: NegativeTotals,
}

impl From<&SummaryConfig> for SummaryPolicy {
    fn from(config: &SummaryConfig) -> Self {
        Self {
            rounding: config.rounding,
            negative_totals: config.negative_totals,
        }
    }
}

/// Derived totals of a document.
///
/// Never stored on its own: it is recomputed whenever the line items or
/// rates change, and serialized as a snapshot into the save payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// Sum of line totals.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Discount percentage.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_rate: Decimal,
    /// Discount amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_amount: Decimal,
    /// Subtotal after discount.
    #[serde(with = "rust_decimal::serde::float")]
    pub after_discount: Decimal,
    /// VAT percentage.
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_rate: Decimal,
    /// VAT amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_amount: Decimal,
    /// Discounted amount plus VAT.
    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
    /// Amount withheld.
    #[serde(with = "rust_decimal::serde::float")]
    pub withholding_amount: Decimal,
    /// Grand total minus withholding.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_total: Decimal,
}

impl DocumentSummary {
    /// Runs the full chain with negative totals kept as computed.
    #[must_use]
    pub fn compute(items: &[LineItem], input: &SummaryInput) -> Self {
        Self::compute_with_policy(items, input, NegativeTotals::Allow)
    }

    /// Runs aggregate, discount, VAT and withholding in order.
    ///
    /// With [`NegativeTotals::ClampToZero`] each intermediate total is
    /// floored before it feeds the next stage. The discount and VAT amounts
    /// are then restated as the difference between the clamped totals, so
    /// `after_discount + vat_amount == grand_total` always holds.
    #[must_use]
    pub fn compute_with_policy(
        items: &[LineItem],
        input: &SummaryInput,
        negative_totals: NegativeTotals,
    ) -> Self {
        let subtotal = aggregate(items);

        let discount = apply_discount(subtotal, input.discount_rate);
        let after_discount = negative_totals.apply(discount.after_discount);
        let discount_amount = subtotal.saturating_sub(after_discount);

        let vat = apply_vat(after_discount, input.vat_rate);
        let grand_total = negative_totals.apply(vat.grand_total);
        let vat_amount = grand_total.saturating_sub(after_discount);

        let net_total =
            negative_totals.apply(apply_withholding(grand_total, input.withholding_amount));

        Self {
            subtotal,
            discount_rate: input.discount_rate,
            discount_amount,
            after_discount,
            vat_rate: input.vat_rate,
            vat_amount,
            grand_total,
            withholding_amount: input.withholding_amount,
            net_total,
        }
    }

    /// Returns a copy with every amount rounded per `rounding`.
    ///
    /// Rates are left untouched. Each field is rounded independently, the
    /// same way each figure is formatted on screen.
    #[must_use]
    pub fn rounded(&self, rounding: PayloadRounding) -> Self {
        Self {
            subtotal: rounding.apply(self.subtotal),
            discount_rate: self.discount_rate,
            discount_amount: rounding.apply(self.discount_amount),
            after_discount: rounding.apply(self.after_discount),
            vat_rate: self.vat_rate,
            vat_amount: rounding.apply(self.vat_amount),
            grand_total: rounding.apply(self.grand_total),
            withholding_amount: rounding.apply(self.withholding_amount),
            net_total: rounding.apply(self.net_total),
        }
    }

    /// Computes and snapshots in one step.
    #[must_use]
    pub fn snapshot(items: &[LineItem], input: &SummaryInput, policy: SummaryPolicy) -> Self {
        Self::compute_with_policy(items, input, policy.negative_totals).rounded(policy.rounding)
    }

    /// True when an amount is withheld.
    #[must_use]
    pub fn has_withholding(&self) -> bool {
        !self.withholding_amount.is_zero()
    }
}
