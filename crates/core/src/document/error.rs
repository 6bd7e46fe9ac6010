//! Document error types.

use thiserror::Error;

use super::kind::DocumentKind;

/// Reasons a document draft cannot be saved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// Counterparty is missing.
    #[error("{0} is required")]
    MissingParty(&'static str),

    /// Document has no line items.
    #[error("At least one line item is required")]
    NoLineItems,

    /// A withheld amount was entered on a kind that does not deduct one.
    #[error("{0} does not support withholding tax")]
    WithholdingNotSupported(DocumentKind),

    /// Certificates are saved through the withholding-tax form.
    #[error("{0} must be saved as a withholding-tax certificate")]
    UseCertificate(DocumentKind),
}
