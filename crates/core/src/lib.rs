//! Core business logic for bizdocs.
//!
//! This crate contains pure business logic with ZERO network or storage dependencies.
//! Document types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `summary` - Line items and the subtotal, discount, VAT, withholding chain
//! - `withholding` - Withholding-tax certificates and income types
//! - `document` - Document drafts and save payloads
//! - `settings` - Company settings model
//! - `render` - Printable output

pub mod document;
pub mod render;
pub mod settings;
pub mod summary;
pub mod withholding;
