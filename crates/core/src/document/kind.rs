//! Document kinds and statuses.

use serde::{Deserialize, Serialize};

/// Type of business document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Price offer to a customer.
    Quotation,
    /// Order placed with a supplier.
    PurchaseOrder,
    /// Bill issued to a customer.
    Invoice,
    /// Acknowledgement of payment received.
    Receipt,
    /// Money paid out to a supplier.
    PaymentVoucher,
    /// Money received from a customer.
    ReceiveVoucher,
    /// Withholding-tax certificate.
    WithholdingTax,
}

/// Who the counterparty of a document is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRole {
    /// The business sells to them.
    Customer,
    /// The business buys from them.
    Supplier,
    /// Recipient of a payment tax was withheld from.
    Payee,
}

impl PartyRole {
    /// Human-readable role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Supplier => "Supplier",
            Self::Payee => "Payee",
        }
    }
}

impl DocumentKind {
    /// Every document kind.
    pub const ALL: [Self; 7] = [
        Self::Quotation,
        Self::PurchaseOrder,
        Self::Invoice,
        Self::Receipt,
        Self::PaymentVoucher,
        Self::ReceiveVoucher,
        Self::WithholdingTax,
    ];

    /// Backend resource path segment, as in `/api/<resource>`.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Quotation => "quotations",
            Self::PurchaseOrder => "purchase-orders",
            Self::Invoice => "invoices",
            Self::Receipt => "receipts",
            Self::PaymentVoucher => "payment-vouchers",
            Self::ReceiveVoucher => "receive-vouchers",
            Self::WithholdingTax => "withholding-taxes",
        }
    }

    /// Title printed at the top of the document.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Quotation => "Quotation",
            Self::PurchaseOrder => "Purchase Order",
            Self::Invoice => "Invoice",
            Self::Receipt => "Receipt",
            Self::PaymentVoucher => "Payment Voucher",
            Self::ReceiveVoucher => "Receive Voucher",
            Self::WithholdingTax => "Withholding Tax Certificate",
        }
    }

    /// Counterparty role.
    #[must_use]
    pub const fn party_role(self) -> PartyRole {
        match self {
            Self::Quotation | Self::Invoice | Self::Receipt | Self::ReceiveVoucher => {
                PartyRole::Customer
            }
            Self::PurchaseOrder | Self::PaymentVoucher => PartyRole::Supplier,
            Self::WithholdingTax => PartyRole::Payee,
        }
    }

    /// Whether a withheld amount is deducted on this kind of document.
    #[must_use]
    pub const fn supports_withholding(self) -> bool {
        matches!(
            self,
            Self::PaymentVoucher | Self::ReceiveVoucher | Self::WithholdingTax
        )
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| {
                let resource = kind.resource();
                resource == wanted
                    || resource.strip_suffix('s') == Some(wanted.as_str())
                    || resource.strip_suffix("es") == Some(wanted.as_str())
            })
            .ok_or_else(|| format!("Unknown document kind: {s}"))
    }
}

/// Workflow status of a document.
///
/// Statuses are plain values set by the backend or by user actions. No
/// transition rules are enforced on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Being edited.
    #[default]
    Draft,
    /// Waiting for approval.
    Pending,
    /// Approved.
    Approved,
    /// Rejected by an approver.
    Rejected,
    /// Settled.
    Paid,
    /// Cancelled.
    Cancelled,
}
