//! Purchase invoice records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::InvoiceStatus;

/// A purchase invoice as stored by the purchasing module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInvoice {
    pub id: String,
    /// Lifecycle status as a raw legacy display string
    pub status: String,
    pub vendor: String,
    #[serde(default)]
    pub rows: Vec<PurchaseRow>,
}

/// One line of a purchase invoice.
///
/// A row may reference its item by `item_id`, by `barcode`, or both;
/// legacy data is inconsistent about which key is filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRow {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Received quantity, as entered on the invoice
    pub qty: Decimal,
    /// Expiry date string, as entered (any regional format)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl PurchaseInvoice {
    pub fn lifecycle(&self) -> InvoiceStatus {
        InvoiceStatus::parse(&self.status)
    }

    /// Deleted invoices contribute no batches.
    pub fn is_deleted(&self) -> bool {
        self.lifecycle() == InvoiceStatus::Deleted
    }
}

impl PurchaseRow {
    /// Expiry text with blank entries treated as absent.
    pub fn expiry_text(&self) -> Option<&str> {
        self.expiry
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
