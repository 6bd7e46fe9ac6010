//! Certificate error types.

use thiserror::Error;

/// Reasons a withholding-tax certificate cannot be saved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CertificateError {
    /// Payer name is empty.
    #[error("Payer name is required")]
    MissingPayer,

    /// Payee name is empty.
    #[error("Payee name is required")]
    MissingPayee,

    /// A tax ID is missing or fails the check digit.
    #[error("Invalid {party} tax ID: {tax_id}")]
    InvalidTaxId {
        /// Which party the ID belongs to.
        party: &'static str,
        /// The rejected value.
        tax_id: String,
    },

    /// Certificate has no income lines.
    #[error("Certificate must have at least one income line")]
    NoLines,

    /// Sum of paid amounts is zero.
    #[error("Total amount paid must be greater than zero")]
    ZeroTotal,
}
