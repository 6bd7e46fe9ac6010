//! Company settings as returned by the backend.

use bizdocs_shared::types::lenient;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Company profile and tax defaults.
///
/// The backend owns this record; the front end only reads it to print the
/// letterhead and to seed the VAT rate of new documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    /// Registered company name.
    #[serde(default)]
    pub company_name: String,
    /// 13-digit taxpayer ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Address printed on the letterhead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// VAT percentage applied to new documents.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub vat_rate: Option<Decimal>,
}

impl CompanySettings {
    /// VAT rate from settings, or `fallback` when none is set.
    #[must_use]
    pub fn vat_rate_or(&self, fallback: Decimal) -> Decimal {
        self.vat_rate.unwrap_or(fallback)
    }
}

/// Where a document's VAT rate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxDefaults {
    /// Rate applied when a draft has none of its own.
    pub vat_rate: Decimal,
}

impl TaxDefaults {
    /// Resolves the defaults from optional settings and the configured rate.
    #[must_use]
    pub fn resolve(settings: Option<&CompanySettings>, configured_vat: Decimal) -> Self {
        Self {
            vat_rate: settings.map_or(configured_vat, |s| s.vat_rate_or(configured_vat)),
        }
    }
}
