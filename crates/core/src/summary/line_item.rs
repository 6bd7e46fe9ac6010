//! Document line items.

use bizdocs_shared::types::{ProductId, lenient, non_negative};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a document.
///
/// Product rows carry a quantity and unit price; voucher and service rows
/// carry only a description and a flat amount. The line total is never
/// stored, it is recomputed from the inputs on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineItem {
    /// Quantity times unit price.
    Priced(PricedLine),
    /// Flat amount.
    Flat(FlatLine),
}

/// A quantity-based line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Catalogue product this line was filled from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Number of units, one when not given.
    #[serde(default = "lenient::one", deserialize_with = "lenient::quantity")]
    pub quantity: Decimal,
    /// Price per unit.
    #[serde(deserialize_with = "lenient::non_negative")]
    pub unit_price: Decimal,
}

/// An amount-only line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatLine {
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Line amount.
    #[serde(default, deserialize_with = "lenient::non_negative")]
    pub amount: Decimal,
}

/// The parts of a catalogue product a line item copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    /// Product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Catalogue selling price.
    #[serde(default, deserialize_with = "lenient::non_negative")]
    pub price: Decimal,
}

impl LineItem {
    /// Creates a quantity-based line. Negative inputs are floored at zero.
    #[must_use]
    pub fn priced(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self::Priced(PricedLine {
            description: description.into(),
            product_id: None,
            quantity: non_negative(quantity),
            unit_price: non_negative(unit_price),
        })
    }

    /// Creates an amount-only line. A negative amount is floored at zero.
    #[must_use]
    pub fn flat(description: impl Into<String>, amount: Decimal) -> Self {
        Self::Flat(FlatLine {
            description: description.into(),
            amount: non_negative(amount),
        })
    }

    /// Creates a line from a selected catalogue product.
    #[must_use]
    pub fn from_product(product: &ProductRef, quantity: Decimal) -> Self {
        Self::Priced(PricedLine {
            description: product.name.clone(),
            product_id: Some(product.id),
            quantity: non_negative(quantity),
            unit_price: product.price,
        })
    }

    /// Line total: `quantity * unit_price`, or the flat amount.
    ///
    /// Saturates at [`Decimal::MAX`] instead of overflowing.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        match self {
            Self::Priced(line) => line.quantity.saturating_mul(line.unit_price),
            Self::Flat(line) => line.amount,
        }
    }

    /// Description shown on the document.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Priced(line) => &line.description,
            Self::Flat(line) => &line.description,
        }
    }

    /// Quantity, if this is a quantity-based line.
    #[must_use]
    pub fn quantity(&self) -> Option<Decimal> {
        match self {
            Self::Priced(line) => Some(line.quantity),
            Self::Flat(_) => None,
        }
    }

    /// Unit price, if this is a quantity-based line.
    #[must_use]
    pub fn unit_price(&self) -> Option<Decimal> {
        match self {
            Self::Priced(line) => Some(line.unit_price),
            Self::Flat(_) => None,
        }
    }
}
