//! Expiry batch models
//!
//! A batch is one dated lot of stock, derived fresh on every report
//! computation from either the current stocktake balance or a purchase
//! invoice row. Batches are never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ordering key used for batches whose expiry could not be parsed.
/// Unknown dates sort after every real date and are never flagged as
/// expiring.
pub const UNKNOWN_DAYS_SORT_KEY: i64 = 9999;

/// Expiry classification of a batch relative to the report date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired,
    Near,
    Safe,
    Unknown,
}

impl ExpiryStatus {
    /// Classify a days-left figure against the alert threshold.
    ///
    /// Classification is a pure function of the current date and the
    /// threshold; there is no stateful transition beyond this.
    pub fn classify(days_left: Option<i64>, alert_threshold_days: i64) -> Self {
        match days_left {
            None => ExpiryStatus::Unknown,
            Some(d) if d < 0 => ExpiryStatus::Expired,
            Some(d) if d <= alert_threshold_days => ExpiryStatus::Near,
            Some(_) => ExpiryStatus::Safe,
        }
    }

    /// Expired and near batches are the ones worth alerting on.
    pub fn is_alert(&self) -> bool {
        matches!(self, ExpiryStatus::Expired | ExpiryStatus::Near)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Near => "near",
            ExpiryStatus::Safe => "safe",
            ExpiryStatus::Unknown => "unknown",
        }
    }
}

/// Provenance of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchSourceType {
    /// Synthesized from the item's current stocktake balance
    Stocktake,
    /// Derived from a purchase invoice row
    Invoice,
}

/// One dated lot of stock for a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// `ST-<itemId>` for stocktake batches, `INV-<invoiceId>-<rowId>`
    /// for invoice batches
    pub id: String,
    /// Human-readable provenance
    pub source: String,
    pub source_type: BatchSourceType,
    /// Expiry exactly as entered on the source document, kept for
    /// display even when unparseable
    pub expiry_text: String,
    pub expiry_date: Option<NaiveDate>,
    /// Remaining quantity after FIFO depletion, in the major unit
    pub quantity: Decimal,
    /// Quantity before depletion
    pub original_quantity: Decimal,
    /// Whole days from the report date to the expiry; `None` when the
    /// expiry could not be parsed
    pub days_left: Option<i64>,
    pub status: ExpiryStatus,
}

impl Batch {
    pub fn stocktake_id(item_id: &str) -> String {
        format!("ST-{item_id}")
    }

    pub fn invoice_id(invoice_id: &str, row_id: &str) -> String {
        format!("INV-{invoice_id}-{row_id}")
    }

    /// Sort key for urgency ordering; unknown dates sort last.
    pub fn sort_days(&self) -> i64 {
        self.days_left.unwrap_or(UNKNOWN_DAYS_SORT_KEY)
    }

    /// Batches at or below 0.001 of a major unit are treated as fully
    /// depleted and dropped from report output.
    pub fn is_depleted(&self) -> bool {
        self.quantity <= Decimal::new(1, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries() {
        assert_eq!(ExpiryStatus::classify(None, 90), ExpiryStatus::Unknown);
        assert_eq!(ExpiryStatus::classify(Some(-1), 90), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::classify(Some(0), 90), ExpiryStatus::Near);
        assert_eq!(ExpiryStatus::classify(Some(90), 90), ExpiryStatus::Near);
        assert_eq!(ExpiryStatus::classify(Some(91), 90), ExpiryStatus::Safe);
    }

    #[test]
    fn alert_statuses() {
        assert!(ExpiryStatus::Expired.is_alert());
        assert!(ExpiryStatus::Near.is_alert());
        assert!(!ExpiryStatus::Safe.is_alert());
        assert!(!ExpiryStatus::Unknown.is_alert());
    }

    #[test]
    fn depletion_epsilon() {
        let mut batch = Batch {
            id: Batch::stocktake_id("it-1"),
            source: "Current stocktake balance".to_string(),
            source_type: BatchSourceType::Stocktake,
            expiry_text: "06/2024".to_string(),
            expiry_date: None,
            quantity: Decimal::new(1, 3),
            original_quantity: Decimal::from(5),
            days_left: None,
            status: ExpiryStatus::Unknown,
        };
        assert!(batch.is_depleted());
        batch.quantity = Decimal::new(2, 3);
        assert!(!batch.is_depleted());
    }
}
