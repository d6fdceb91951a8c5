//! Common types used across the suite

use serde::{Deserialize, Serialize};

use crate::models::ExpiryStatus;

/// Legacy display string marking a deleted invoice.
pub const STATUS_DELETED: &str = "محذوف";

/// Legacy display string marking a returned sales invoice.
pub const STATUS_RETURNED: &str = "مرتجع";

/// Lifecycle status of an invoice record.
///
/// The legacy dataset stores these as Arabic display strings; anything
/// unrecognized is treated as a completed invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Completed,
    Deleted,
    Returned,
}

impl InvoiceStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            STATUS_DELETED => InvoiceStatus::Deleted,
            STATUS_RETURNED => InvoiceStatus::Returned,
            _ => InvoiceStatus::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Completed => "completed",
            InvoiceStatus::Deleted => "deleted",
            InvoiceStatus::Returned => "returned",
        }
    }
}

/// Report filter categories selectable by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    #[default]
    All,
    /// Expired or near-expiry
    Alerts,
    Expired,
    Near,
    Safe,
    Unknown,
}

impl FilterCategory {
    pub fn matches(&self, status: ExpiryStatus) -> bool {
        match self {
            FilterCategory::All => true,
            FilterCategory::Alerts => status.is_alert(),
            FilterCategory::Expired => status == ExpiryStatus::Expired,
            FilterCategory::Near => status == ExpiryStatus::Near,
            FilterCategory::Safe => status == ExpiryStatus::Safe,
            FilterCategory::Unknown => status == ExpiryStatus::Unknown,
        }
    }
}
