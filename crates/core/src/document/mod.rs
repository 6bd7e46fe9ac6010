//! Business documents and their save payloads.
//!
//! Quotations, purchase orders, invoices, receipts, and payment/receive
//! vouchers share one draft shape. Withholding-tax certificates have their
//! own form in [`crate::withholding`] but are saved through the same
//! backend resources.

pub mod draft;
pub mod error;
pub mod kind;
pub mod payload;

pub use draft::{DocumentDraft, Party};
pub use error::DocumentError;
pub use kind::{DocumentKind, DocumentStatus, PartyRole};
pub use payload::{DocumentPayload, PayloadLine};
