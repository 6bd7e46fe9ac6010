//! Withholding-tax certificate form, totals, and payload.

use bizdocs_shared::types::{DocumentId, PayloadRounding, lenient, non_negative};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::amount_words::baht_text;
use super::error::CertificateError;
use super::income_type::IncomeType;
use super::tax_id::is_valid_tax_id;
use crate::document::{DocumentStatus, Party};
use crate::summary::percent_of;

/// Tax withheld on one payment: `amount * rate / 100`.
#[must_use]
pub fn compute_tax_line(amount: Decimal, tax_rate: Decimal) -> Decimal {
    percent_of(amount, tax_rate)
}

/// Return form the withheld tax is filed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhtForm {
    /// ภ.ง.ด.1ก
    Pnd1a,
    /// ภ.ง.ด.1ก พิเศษ
    Pnd1aSpecial,
    /// ภ.ง.ด.2
    Pnd2,
    /// ภ.ง.ด.3
    #[default]
    Pnd3,
    /// ภ.ง.ด.2ก
    Pnd2a,
    /// ภ.ง.ด.3ก
    Pnd3a,
    /// ภ.ง.ด.53
    Pnd53,
}

impl WhtForm {
    /// Label printed next to the form checkbox.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pnd1a => "ภ.ง.ด.1ก",
            Self::Pnd1aSpecial => "ภ.ง.ด.1ก พิเศษ",
            Self::Pnd2 => "ภ.ง.ด.2",
            Self::Pnd3 => "ภ.ง.ด.3",
            Self::Pnd2a => "ภ.ง.ด.2ก",
            Self::Pnd3a => "ภ.ง.ด.3ก",
            Self::Pnd53 => "ภ.ง.ด.53",
        }
    }
}

/// How the tax was borne.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentCondition {
    /// Deducted from the payment.
    #[default]
    WithheldAtSource,
    /// Paid by the payer on every payment.
    PaidEveryTime,
    /// Paid by the payer once.
    PaidOneTime,
    /// Anything else, described in the certificate note.
    Other,
}

impl PaymentCondition {
    /// Label printed next to the condition checkbox.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WithheldAtSource => "หัก ณ ที่จ่าย",
            Self::PaidEveryTime => "ออกให้ตลอดไป",
            Self::PaidOneTime => "ออกให้ครั้งเดียว",
            Self::Other => "อื่น ๆ",
        }
    }
}

/// One income line on a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhtLine {
    /// Income category.
    pub income_type: IncomeType,
    /// Extra description, e.g. the service rendered.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Date the income was paid.
    pub paid_on: NaiveDate,
    /// Amount paid before tax.
    #[serde(default, deserialize_with = "lenient::non_negative")]
    pub amount: Decimal,
    /// Rate entered by the user; the income type's default otherwise.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub rate: Option<Decimal>,
}

impl WhtLine {
    /// Line using the income type's default rate. A negative amount is
    /// floored at zero.
    #[must_use]
    pub fn new(income_type: IncomeType, paid_on: NaiveDate, amount: Decimal) -> Self {
        Self {
            income_type,
            description: String::new(),
            paid_on,
            amount: non_negative(amount),
            rate: None,
        }
    }

    /// Overrides the rate.
    #[must_use]
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Switches the income type, discarding any rate override.
    pub fn select_income_type(&mut self, income_type: IncomeType) {
        self.income_type = income_type;
        self.rate = None;
    }

    /// Rate in effect for this line.
    #[must_use]
    pub fn effective_rate(&self) -> Decimal {
        self.rate.unwrap_or_else(|| self.income_type.default_rate())
    }

    /// Tax withheld on this line.
    #[must_use]
    pub fn tax_amount(&self) -> Decimal {
        compute_tax_line(self.amount, self.effective_rate())
    }
}

/// Certificate-level totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateTotals {
    /// Sum of amounts paid.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    /// Sum of tax withheld.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_tax: Decimal,
    /// Amount actually handed to the payee.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_payable: Decimal,
}

impl CertificateTotals {
    /// Sums the lines of a certificate.
    #[must_use]
    pub fn from_lines(lines: &[WhtLine]) -> Self {
        let total_amount = lines
            .iter()
            .map(|l| l.amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let total_tax = lines
            .iter()
            .map(WhtLine::tax_amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        Self {
            total_amount,
            total_tax,
            net_payable: total_amount.saturating_sub(total_tax),
        }
    }

    /// Returns a copy rounded per `rounding`.
    #[must_use]
    pub fn rounded(&self, rounding: PayloadRounding) -> Self {
        Self {
            total_amount: rounding.apply(self.total_amount),
            total_tax: rounding.apply(self.total_tax),
            net_payable: rounding.apply(self.net_payable),
        }
    }
}

/// A withholding-tax certificate as edited on its form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhtCertificate {
    /// Backend ID once saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Book number (เล่มที่).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_number: Option<String>,
    /// Certificate number (เลขที่).
    #[serde(default)]
    pub number: String,
    /// Issue date.
    pub issued_on: NaiveDate,
    /// The business withholding the tax.
    pub payer: Party,
    /// The recipient of the payment.
    pub payee: Party,
    /// Return form.
    #[serde(default)]
    pub form: WhtForm,
    /// How the tax was borne.
    #[serde(default)]
    pub condition: PaymentCondition,
    /// Description when the condition is `Other`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_note: Option<String>,
    /// Income lines.
    #[serde(default)]
    pub lines: Vec<WhtLine>,
    /// Workflow status.
    #[serde(default)]
    pub status: DocumentStatus,
}

impl WhtCertificate {
    /// Live totals at full precision.
    #[must_use]
    pub fn totals(&self) -> CertificateTotals {
        CertificateTotals::from_lines(&self.lines)
    }

    /// Checks the certificate can be saved.
    ///
    /// # Errors
    ///
    /// Returns the first rule the certificate breaks.
    pub fn validate(&self) -> Result<(), CertificateError> {
        if self.payer.is_blank() {
            return Err(CertificateError::MissingPayer);
        }
        if self.payee.is_blank() {
            return Err(CertificateError::MissingPayee);
        }
        check_tax_id("payer", &self.payer)?;
        check_tax_id("payee", &self.payee)?;
        if self.lines.is_empty() {
            return Err(CertificateError::NoLines);
        }
        if self.totals().total_amount.is_zero() {
            return Err(CertificateError::ZeroTotal);
        }
        Ok(())
    }

    /// Validates and builds the body sent to the backend on save.
    ///
    /// # Errors
    ///
    /// Returns a [`CertificateError`] if the certificate fails validation.
    pub fn to_payload(&self, rounding: PayloadRounding) -> Result<CertificatePayload, CertificateError> {
        self.validate()?;

        let totals = self.totals().rounded(rounding);
        let lines = self
            .lines
            .iter()
            .map(|line| WhtPayloadLine {
                income_type: line.income_type,
                description: line.description.clone(),
                paid_on: line.paid_on,
                amount: rounding.apply(line.amount),
                rate: line.effective_rate(),
                tax_amount: rounding.apply(line.tax_amount()),
            })
            .collect();

        debug!(
            number = %self.number,
            lines = self.lines.len(),
            total_tax = %totals.total_tax,
            "Prepared withholding certificate payload"
        );

        Ok(CertificatePayload {
            id: self.id,
            book_number: self.book_number.clone(),
            number: self.number.clone(),
            issued_on: self.issued_on,
            payer: self.payer.clone(),
            payee: self.payee.clone(),
            form: self.form,
            condition: self.condition,
            condition_note: self.condition_note.clone(),
            lines,
            total_tax_text: baht_text(totals.total_tax),
            totals,
            status: self.status,
        })
    }
}

fn check_tax_id(party: &'static str, who: &Party) -> Result<(), CertificateError> {
    match who.tax_id.as_deref() {
        Some(tax_id) if is_valid_tax_id(tax_id) => Ok(()),
        other => Err(CertificateError::InvalidTaxId {
            party,
            tax_id: other.unwrap_or_default().to_string(),
        }),
    }
}

/// JSON body for saving a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificatePayload {
    /// Backend ID when updating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Book number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_number: Option<String>,
    /// Certificate number.
    pub number: String,
    /// Issue date.
    pub issued_on: NaiveDate,
    /// Payer.
    pub payer: Party,
    /// Payee.
    pub payee: Party,
    /// Return form.
    pub form: WhtForm,
    /// How the tax was borne.
    pub condition: PaymentCondition,
    /// Condition description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_note: Option<String>,
    /// Lines with computed tax.
    pub lines: Vec<WhtPayloadLine>,
    /// Totals snapshot.
    #[serde(flatten)]
    pub totals: CertificateTotals,
    /// Total tax in Thai words.
    pub total_tax_text: String,
    /// Workflow status.
    pub status: DocumentStatus,
}

/// One line of a certificate payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhtPayloadLine {
    /// Income category.
    pub income_type: IncomeType,
    /// Description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Payment date.
    pub paid_on: NaiveDate,
    /// Amount paid.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Rate applied.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// Tax withheld.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_amount: Decimal,
}
