//! Expiry report assembly and status aggregation
//!
//! Combines batch resolution and FIFO depletion into a per-item report,
//! derives each item's overall status from its worst parseable batch,
//! and rolls the dataset up into summary figures.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{ExpiryStatus, FilterCategory, InventoryItem, PurchaseInvoice, SalesInvoice};

use crate::config::ReportConfig;
use crate::depletion::deplete;
use crate::error::EngineResult;
use crate::resolver::BatchResolver;

/// Expiry report for one inventory item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemExpiryReport {
    #[serde(flatten)]
    pub item: InventoryItem,
    /// Depletion-adjusted batches, sorted by urgency
    pub batches: Vec<shared::Batch>,
    /// Status of the worst (smallest days-left) batch with a parseable
    /// date; `unknown` when no batch has one
    pub overall_status: ExpiryStatus,
    pub nearest_date: Option<NaiveDate>,
    pub nearest_days: Option<i64>,
    /// Quantity at risk: sum over expired and near batches
    pub total_expiring: Decimal,
}

/// Dataset-wide rollup, one count per overall status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_items: usize,
    pub expired_items: usize,
    pub near_items: usize,
    pub safe_items: usize,
    pub unknown_items: usize,
    pub total_expiring: Decimal,
}

/// Full expiry report over the inventory catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryReport {
    pub report_date: NaiveDate,
    pub alert_threshold_days: i64,
    pub items: Vec<ItemExpiryReport>,
    pub summary: ReportSummary,
}

/// Build the full expiry report for a dataset.
///
/// Pure and synchronous: same inputs and config, same report. Invoked
/// once per dataset refresh; the result is disposable.
pub fn build_report(
    items: &[InventoryItem],
    purchases: &[PurchaseInvoice],
    sales: &[SalesInvoice],
    config: ReportConfig,
) -> ExpiryReport {
    let resolver = BatchResolver::new(purchases, sales, config);
    let items: Vec<ItemExpiryReport> = items
        .iter()
        .map(|item| build_item_report(&resolver, item))
        .collect();
    let summary = summarize(&items);
    ExpiryReport {
        report_date: config.today,
        alert_threshold_days: config.alert_threshold_days,
        items,
        summary,
    }
}

/// Resolve, deplete, and aggregate one item.
pub fn build_item_report(resolver: &BatchResolver<'_>, item: &InventoryItem) -> ItemExpiryReport {
    let batches = deplete(resolver.batches_for(item), resolver.total_sold(item));
    aggregate_item(item.clone(), batches)
}

impl ExpiryReport {
    /// Items whose overall status falls in the given category.
    pub fn filter(&self, category: FilterCategory) -> Vec<&ItemExpiryReport> {
        self.items
            .iter()
            .filter(|item| category.matches(item.overall_status))
            .collect()
    }

    /// Items ordered most-urgent first; items without any parseable
    /// date sort last.
    pub fn items_by_urgency(&self) -> Vec<&ItemExpiryReport> {
        let mut items: Vec<&ItemExpiryReport> = self.items.iter().collect();
        items.sort_by_key(|item| item.nearest_days.unwrap_or(shared::UNKNOWN_DAYS_SORT_KEY));
        items
    }

    /// Re-label the report for a different alert threshold.
    ///
    /// Cheap by construction: whether a batch is expired depends only
    /// on the date, so depletion results cannot change when the
    /// threshold moves. Only near/safe labels and the derived
    /// aggregates are recomputed; batches and sales totals are reused
    /// as-is.
    pub fn with_threshold(&self, alert_threshold_days: i64) -> EngineResult<ExpiryReport> {
        // Reuse the validation path without touching the report date
        ReportConfig::with_threshold(self.report_date, alert_threshold_days)?;

        let items: Vec<ItemExpiryReport> = self
            .items
            .iter()
            .map(|report| {
                let batches: Vec<shared::Batch> = report
                    .batches
                    .iter()
                    .cloned()
                    .map(|mut batch| {
                        batch.status =
                            ExpiryStatus::classify(batch.days_left, alert_threshold_days);
                        batch
                    })
                    .collect();
                aggregate_item(report.item.clone(), batches)
            })
            .collect();
        let summary = summarize(&items);
        Ok(ExpiryReport {
            report_date: self.report_date,
            alert_threshold_days,
            items,
            summary,
        })
    }
}

fn aggregate_item(item: InventoryItem, batches: Vec<shared::Batch>) -> ItemExpiryReport {
    let nearest = batches
        .iter()
        .filter(|batch| batch.days_left.is_some())
        .min_by_key(|batch| batch.sort_days());
    let (overall_status, nearest_date, nearest_days) = match nearest {
        Some(batch) => (batch.status, batch.expiry_date, batch.days_left),
        None => (ExpiryStatus::Unknown, None, None),
    };
    let total_expiring = batches
        .iter()
        .filter(|batch| batch.status.is_alert())
        .map(|batch| batch.quantity)
        .sum();
    ItemExpiryReport {
        item,
        batches,
        overall_status,
        nearest_date,
        nearest_days,
        total_expiring,
    }
}

fn summarize(items: &[ItemExpiryReport]) -> ReportSummary {
    let mut summary = ReportSummary {
        total_items: items.len(),
        expired_items: 0,
        near_items: 0,
        safe_items: 0,
        unknown_items: 0,
        total_expiring: Decimal::ZERO,
    };
    for item in items {
        match item.overall_status {
            ExpiryStatus::Expired => summary.expired_items += 1,
            ExpiryStatus::Near => summary.near_items += 1,
            ExpiryStatus::Safe => summary.safe_items += 1,
            ExpiryStatus::Unknown => summary.unknown_items += 1,
        }
        summary.total_expiring += item.total_expiring;
    }
    summary
}
