//! Withholding tax.
//!
//! A payer deducts tax from certain payments and certifies the deduction
//! to the payee on a withholding-tax certificate. This module covers:
//! - The statutory income types and their default rates
//! - Per-line tax computation and certificate totals
//! - Certificate metadata, validation, and save payload
//! - Tax ID check digits and the amount-in-words line

pub mod amount_words;
pub mod certificate;
pub mod error;
pub mod income_type;
pub mod tax_id;

#[cfg(test)]
mod props;

pub use amount_words::baht_text;
pub use certificate::{
    CertificatePayload, CertificateTotals, PaymentCondition, WhtCertificate, WhtForm, WhtLine,
    WhtPayloadLine, compute_tax_line,
};
pub use error::CertificateError;
pub use income_type::IncomeType;
pub use tax_id::is_valid_tax_id;
