//! Editable document drafts.

use bizdocs_shared::types::{CustomerId, DocumentId, lenient};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::DocumentError;
use super::kind::{DocumentKind, DocumentStatus};
use super::payload::{DocumentPayload, PayloadLine};
use crate::summary::{DocumentSummary, LineItem, SummaryInput, SummaryPolicy};

/// Counterparty of a document: customer, supplier, or payee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    /// Backend ID when picked from the customer list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    /// Name.
    #[serde(default)]
    pub name: String,
    /// 13-digit taxpayer ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Party {
    /// Party with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when no name has been entered.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// A document as edited on its form.
///
/// Holds only inputs. Totals come from [`DocumentDraft::summary`] and are
/// recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    /// Document kind.
    pub kind: DocumentKind,
    /// Backend ID once saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Document number, e.g. `QT-2026-0001`.
    #[serde(default)]
    pub number: String,
    /// Issue date.
    pub issued_on: NaiveDate,
    /// Due or valid-until date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<NaiveDate>,
    /// Counterparty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<Party>,
    /// Line items in display order.
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Discount percentage.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub discount_rate: Decimal,
    /// VAT percentage; the company default applies when absent.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub vat_rate: Option<Decimal>,
    /// Flat amount withheld (vouchers only).
    #[serde(default, deserialize_with = "lenient::non_negative")]
    pub withholding_amount: Decimal,
    /// Workflow status.
    #[serde(default)]
    pub status: DocumentStatus,
    /// Number of the document this one was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Free-text remarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DocumentDraft {
    /// Empty draft of the given kind.
    #[must_use]
    pub fn new(kind: DocumentKind, issued_on: NaiveDate) -> Self {
        Self {
            kind,
            id: None,
            number: String::new(),
            issued_on,
            due_on: None,
            party: None,
            items: Vec::new(),
            discount_rate: Decimal::ZERO,
            vat_rate: None,
            withholding_amount: Decimal::ZERO,
            status: DocumentStatus::Draft,
            reference: None,
            notes: None,
        }
    }

    /// Rates for the summary chain.
    ///
    /// `default_vat_rate` comes from company settings and is used unless the
    /// draft overrides it. Withholding is ignored on kinds that do not
    /// deduct it.
    #[must_use]
    pub fn summary_input(&self, default_vat_rate: Decimal) -> SummaryInput {
        let withholding = if self.kind.supports_withholding() {
            self.withholding_amount
        } else {
            Decimal::ZERO
        };

        SummaryInput::new(self.vat_rate.unwrap_or(default_vat_rate))
            .with_discount(self.discount_rate)
            .with_withholding(withholding)
    }

    /// Live totals at full precision.
    #[must_use]
    pub fn summary(&self, default_vat_rate: Decimal, policy: SummaryPolicy) -> DocumentSummary {
        DocumentSummary::compute_with_policy(
            &self.items,
            &self.summary_input(default_vat_rate),
            policy.negative_totals,
        )
    }

    /// Checks the draft can be saved.
    ///
    /// # Errors
    ///
    /// Returns the first rule the draft breaks.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.kind == DocumentKind::WithholdingTax {
            return Err(DocumentError::UseCertificate(self.kind));
        }
        if self.party.as_ref().is_none_or(Party::is_blank) {
            return Err(DocumentError::MissingParty(self.kind.party_role().as_str()));
        }
        if self.items.is_empty() {
            return Err(DocumentError::NoLineItems);
        }
        if !self.kind.supports_withholding() && !self.withholding_amount.is_zero() {
            return Err(DocumentError::WithholdingNotSupported(self.kind));
        }
        Ok(())
    }

    /// Validates and builds the body sent to the backend on save.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] if the draft fails validation.
    pub fn to_payload(
        &self,
        default_vat_rate: Decimal,
        policy: SummaryPolicy,
    ) -> Result<DocumentPayload, DocumentError> {
        self.validate()?;

        let summary = self.summary(default_vat_rate, policy).rounded(policy.rounding);
        let items = self
            .items
            .iter()
            .map(|item| PayloadLine::from_item(item, policy.rounding))
            .collect();

        debug!(
            kind = %self.kind,
            number = %self.number,
            lines = self.items.len(),
            grand_total = %summary.grand_total,
            "Prepared document payload"
        );

        Ok(DocumentPayload {
            kind: self.kind,
            id: self.id,
            number: self.number.clone(),
            issued_on: self.issued_on,
            due_on: self.due_on,
            party: self.party.clone().unwrap_or_default(),
            items,
            summary,
            status: self.status,
            reference: self.reference.clone(),
            notes: self.notes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizdocs_shared::types::{NegativeTotals, PayloadRounding};
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn invoice() -> DocumentDraft {
        let mut draft = DocumentDraft::new(DocumentKind::Invoice, date());
        draft.number = "INV-2026-0001".into();
        draft.party = Some(Party::named("Siam Trading Co., Ltd."));
        draft.items = vec![
            LineItem::priced("A", dec!(2), dec!(100)),
            LineItem::priced("B", dec!(1), dec!(50)),
        ];
        draft.discount_rate = dec!(10);
        draft
    }

    #[test]
    fn test_summary_uses_default_vat_rate() {
        let summary = invoice().summary(dec!(7), SummaryPolicy::default());
        assert_eq!(summary.vat_rate, dec!(7));
        assert_eq!(summary.grand_total, dec!(240.75));
    }

    #[test]
    fn test_summary_draft_vat_rate_overrides_default() {
        let mut draft = invoice();
        draft.vat_rate = Some(Decimal::ZERO);
        let summary = draft.summary(dec!(7), SummaryPolicy::default());
        assert_eq!(summary.vat_amount, Decimal::ZERO);
        assert_eq!(summary.grand_total, dec!(225));
    }

    #[test]
    fn test_withholding_ignored_on_unsupported_kind() {
        let mut draft = invoice();
        draft.withholding_amount = dec!(10);
        let input = draft.summary_input(dec!(7));
        assert_eq!(input.withholding_amount, Decimal::ZERO);
    }

    #[test]
    fn test_voucher_deducts_withholding() {
        let mut draft = DocumentDraft::new(DocumentKind::PaymentVoucher, date());
        draft.party = Some(Party::named("Supplier"));
        draft.items = vec![
            LineItem::flat("Service", dec!(1000)),
            LineItem::flat("Parts", dec!(500)),
        ];
        draft.withholding_amount = dec!(30);

        let summary = draft.summary(dec!(7), SummaryPolicy::default());
        assert_eq!(summary.subtotal, dec!(1500));
        assert_eq!(summary.grand_total, dec!(1605));
        assert_eq!(summary.net_total, dec!(1575));
    }

    #[test]
    fn test_validate_requires_party() {
        let mut draft = invoice();
        draft.party = None;
        assert_eq!(draft.validate(), Err(DocumentError::MissingParty("Customer")));

        draft.party = Some(Party::named("   "));
        assert_eq!(draft.validate(), Err(DocumentError::MissingParty("Customer")));

        let mut order = DocumentDraft::new(DocumentKind::PurchaseOrder, date());
        order.items = vec![LineItem::flat("x", dec!(1))];
        assert_eq!(order.validate(), Err(DocumentError::MissingParty("Supplier")));
    }

    #[test]
    fn test_validate_requires_line_items() {
        let mut draft = invoice();
        draft.items.clear();
        assert_eq!(draft.validate(), Err(DocumentError::NoLineItems));
    }

    #[test]
    fn test_validate_rejects_withholding_on_invoice() {
        let mut draft = invoice();
        draft.withholding_amount = dec!(10);
        assert_eq!(
            draft.validate(),
            Err(DocumentError::WithholdingNotSupported(DocumentKind::Invoice))
        );
    }

    #[test]
    fn test_validate_rejects_certificate_kind() {
        let mut draft = invoice();
        draft.kind = DocumentKind::WithholdingTax;
        assert_eq!(
            draft.validate(),
            Err(DocumentError::UseCertificate(DocumentKind::WithholdingTax))
        );
    }

    #[test]
    fn test_to_payload_snapshots_rounded_summary() {
        let mut draft = invoice();
        draft.items.push(LineItem::priced("C", dec!(3), dec!(0.335)));

        let payload = draft.to_payload(dec!(7), SummaryPolicy::default()).unwrap();

        // 251.005 -> 225.9045 after discount -> 241.717815 with VAT
        assert_eq!(payload.summary.subtotal, dec!(251.01));
        assert_eq!(payload.summary.after_discount, dec!(225.90));
        assert_eq!(payload.summary.grand_total, dec!(241.72));
        assert_eq!(payload.items.len(), 3);
        assert_eq!(payload.items[2].line_total, dec!(1.01));
        assert_eq!(payload.party.name, "Siam Trading Co., Ltd.");
    }

    #[test]
    fn test_to_payload_full_precision() {
        let mut draft = invoice();
        draft.items.push(LineItem::priced("C", dec!(3), dec!(0.335)));
        let policy = SummaryPolicy {
            rounding: PayloadRounding::FullPrecision,
            negative_totals: NegativeTotals::Allow,
        };

        let payload = draft.to_payload(dec!(7), policy).unwrap();
        assert_eq!(payload.summary.subtotal, dec!(251.005));
        assert_eq!(payload.summary.grand_total, dec!(241.717815));
    }

    #[test]
    fn test_to_payload_rejects_invalid_draft() {
        let mut draft = invoice();
        draft.items.clear();
        assert_eq!(
            draft.to_payload(dec!(7), SummaryPolicy::default()),
            Err(DocumentError::NoLineItems)
        );
    }

    #[test]
    fn test_deserialize_form_json() {
        let json = r#"{
            "kind": "quotation",
            "number": "QT-2026-0007",
            "issuedOn": "2026-03-15",
            "party": {"name": "Bangkok Foods"},
            "items": [
                {"description": "Rice 5kg", "quantity": "2", "unitPrice": "100"},
                {"description": "Setup", "amount": 50}
            ],
            "discountRate": "10",
            "vatRate": ""
        }"#;

        let draft: DocumentDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.kind, DocumentKind::Quotation);
        assert_eq!(draft.vat_rate, Some(Decimal::ZERO));
        assert_eq!(draft.status, DocumentStatus::Draft);

        let summary = draft.summary(dec!(7), SummaryPolicy::default());
        assert_eq!(summary.subtotal, dec!(250));
        assert_eq!(summary.after_discount, dec!(225));
    }
}
