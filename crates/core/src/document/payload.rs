//! Save payloads sent to the backend.

use bizdocs_shared::types::{DocumentId, PayloadRounding, ProductId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::draft::Party;
use super::kind::{DocumentKind, DocumentStatus};
use crate::summary::{DocumentSummary, LineItem};

/// JSON body for `POST`/`PUT /api/<resource>`.
///
/// The summary fields are flattened next to the document fields and are
/// trusted by the backend as sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    /// Document kind.
    #[serde(rename = "documentType")]
    pub kind: DocumentKind,
    /// Backend ID when updating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Document number.
    pub number: String,
    /// Issue date.
    pub issued_on: NaiveDate,
    /// Due or valid-until date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<NaiveDate>,
    /// Counterparty.
    pub party: Party,
    /// Lines with their computed totals.
    pub items: Vec<PayloadLine>,
    /// Summary snapshot.
    #[serde(flatten)]
    pub summary: DocumentSummary,
    /// Workflow status.
    pub status: DocumentStatus,
    /// Source document number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Remarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One line of a save payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadLine {
    /// Description.
    pub description: String,
    /// Catalogue product, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Quantity, for priced lines.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub quantity: Option<Decimal>,
    /// Unit price, for priced lines.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub unit_price: Option<Decimal>,
    /// Line total.
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

impl PayloadLine {
    /// Snapshots a line item.
    #[must_use]
    pub fn from_item(item: &LineItem, rounding: PayloadRounding) -> Self {
        let product_id = match item {
            LineItem::Priced(line) => line.product_id,
            LineItem::Flat(_) => None,
        };

        Self {
            description: item.description().to_string(),
            product_id,
            quantity: item.quantity(),
            unit_price: item.unit_price(),
            line_total: rounding.apply(item.line_total()),
        }
    }
}
