//! What a renderer can print.

use crate::document::DocumentDraft;
use crate::settings::CompanySettings;
use crate::summary::DocumentSummary;
use crate::withholding::{CertificateTotals, WhtCertificate};

/// A document or certificate with its computed totals.
#[derive(Debug, Clone, Copy)]
pub enum Printable<'a> {
    /// Sales, purchase, or voucher document.
    Document {
        /// The document inputs.
        draft: &'a DocumentDraft,
        /// Totals computed from the draft.
        summary: &'a DocumentSummary,
        /// Letterhead.
        company: &'a CompanySettings,
    },
    /// Withholding-tax certificate.
    Certificate {
        /// The certificate inputs.
        certificate: &'a WhtCertificate,
        /// Totals computed from the certificate lines.
        totals: &'a CertificateTotals,
    },
}

impl Printable<'_> {
    /// Document number printed in the header.
    #[must_use]
    pub fn number(&self) -> &str {
        match self {
            Self::Document { draft, .. } => &draft.number,
            Self::Certificate { certificate, .. } => &certificate.number,
        }
    }
}
