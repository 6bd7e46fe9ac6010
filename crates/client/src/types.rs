//! Records returned by the backend.

use bizdocs_core::document::Party;
use bizdocs_shared::types::{CustomerId, DocumentId};
use serde::{Deserialize, Serialize};

/// A customer or supplier record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Backend ID.
    pub id: CustomerId,
    /// Name.
    pub name: String,
    /// 13-digit taxpayer ID.
    #[serde(default)]
    pub tax_id: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
}

impl Customer {
    /// Counterparty block for a document, as filled when the record is picked.
    #[must_use]
    pub fn to_party(&self) -> Party {
        Party {
            id: Some(self.id),
            name: self.name.clone(),
            tax_id: self.tax_id.clone(),
            address: self.address.clone(),
        }
    }
}

/// What the backend returns after a document is created or updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDocument {
    /// Backend ID.
    pub id: DocumentId,
    /// Document number, when the backend assigns one.
    #[serde(default)]
    pub number: Option<String>,
}

/// List endpoints answer with a bare array or a `{ "data": [...] }` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListResponse<T> {
    Bare(Vec<T>),
    Envelope { data: Vec<T> },
}

impl<T> ListResponse<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Envelope { data: items } => items,
        }
    }
}
