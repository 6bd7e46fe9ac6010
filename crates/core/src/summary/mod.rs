//! Document financial summary.
//!
//! Every document form (quotation, purchase order, invoice, receipt,
//! vouchers, withholding-tax certificate) derives its totals through the
//! same chain:
//!
//! 1. `aggregate` - sum of line totals
//! 2. `apply_discount` - percentage discount on the subtotal
//! 3. `apply_vat` - percentage VAT on the discounted amount
//! 4. `apply_withholding` - withheld amount deducted from the grand total
//!
//! All stages are pure and keep full precision. Rounding happens only when a
//! summary is snapshotted (see [`DocumentSummary::rounded`]).

pub mod calculation;
pub mod line_item;
pub mod types;

#[cfg(test)]
mod props;

pub use calculation::{
    DiscountResult, VatResult, aggregate, apply_discount, apply_vat, apply_withholding, percent_of,
};
pub use line_item::{FlatLine, LineItem, PricedLine, ProductRef};
pub use types::{DocumentSummary, SummaryInput, SummaryPolicy};
