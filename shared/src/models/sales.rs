//! Sales invoice records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::InvoiceStatus;

/// A sales invoice as stored by the point-of-sale module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInvoice {
    pub id: String,
    /// Lifecycle status as a raw legacy display string
    pub status: String,
    #[serde(default)]
    pub rows: Vec<SalesRow>,
}

/// One line of a sales invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub qty: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl SalesInvoice {
    pub fn lifecycle(&self) -> InvoiceStatus {
        InvoiceStatus::parse(&self.status)
    }

    /// Deleted invoices contribute nothing to consumption.
    pub fn is_deleted(&self) -> bool {
        self.lifecycle() == InvoiceStatus::Deleted
    }

    /// Returned invoices contribute negative consumption: a return puts
    /// quantity back on the shelf.
    pub fn is_returned(&self) -> bool {
        self.lifecycle() == InvoiceStatus::Returned
    }
}
