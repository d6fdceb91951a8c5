//! Batch resolution
//!
//! Assembles the candidate batch set for each inventory item from two
//! provenances: the current stocktake balance and purchase invoice
//! rows carrying an expiry date. Invoice rows are indexed under both
//! linkage keys (item id and barcode) because legacy data references
//! items inconsistently; the two lookups are unioned per item and
//! deduplicated by batch id.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use shared::{
    Batch, BatchSourceType, ExpiryStatus, InventoryItem, PurchaseInvoice, PurchaseRow, SalesInvoice,
};

use crate::config::ReportConfig;
use crate::date::{days_left, parse_expiry};

/// A purchase row eligible to become a batch, with its parent invoice.
#[derive(Clone, Copy)]
struct BatchSeed<'a> {
    invoice: &'a PurchaseInvoice,
    row: &'a PurchaseRow,
}

/// Purchase rows indexed by both linkage keys.
struct PurchaseIndex<'a> {
    by_item_id: HashMap<&'a str, Vec<BatchSeed<'a>>>,
    by_barcode: HashMap<&'a str, Vec<BatchSeed<'a>>>,
}

impl<'a> PurchaseIndex<'a> {
    fn build(invoices: &'a [PurchaseInvoice]) -> Self {
        let mut by_item_id: HashMap<&str, Vec<BatchSeed>> = HashMap::new();
        let mut by_barcode: HashMap<&str, Vec<BatchSeed>> = HashMap::new();
        for invoice in invoices {
            if invoice.is_deleted() {
                continue;
            }
            for row in &invoice.rows {
                // Rows without an expiry date carry no batch information
                if row.expiry_text().is_none() {
                    continue;
                }
                let seed = BatchSeed { invoice, row };
                if let Some(item_id) = row.item_id.as_deref() {
                    by_item_id.entry(item_id).or_default().push(seed);
                }
                if let Some(barcode) = row.barcode.as_deref() {
                    by_barcode.entry(barcode).or_default().push(seed);
                }
            }
        }
        Self {
            by_item_id,
            by_barcode,
        }
    }

    fn candidates(&self, key: &str) -> impl Iterator<Item = BatchSeed<'a>> + '_ {
        self.by_item_id
            .get(key)
            .into_iter()
            .flatten()
            .chain(self.by_barcode.get(key).into_iter().flatten())
            .copied()
    }
}

/// One sales row's contribution to consumption.
#[derive(Clone, Copy)]
struct SaleEntry<'a> {
    invoice_id: &'a str,
    row_index: usize,
    qty: Decimal,
    unit: Option<&'a str>,
    returned: bool,
}

/// Sales rows indexed by both linkage keys.
struct SalesIndex<'a> {
    by_item_id: HashMap<&'a str, Vec<SaleEntry<'a>>>,
    by_code: HashMap<&'a str, Vec<SaleEntry<'a>>>,
}

impl<'a> SalesIndex<'a> {
    fn build(invoices: &'a [SalesInvoice]) -> Self {
        let mut by_item_id: HashMap<&str, Vec<SaleEntry>> = HashMap::new();
        let mut by_code: HashMap<&str, Vec<SaleEntry>> = HashMap::new();
        for invoice in invoices {
            if invoice.is_deleted() {
                continue;
            }
            let returned = invoice.is_returned();
            for (row_index, row) in invoice.rows.iter().enumerate() {
                let entry = SaleEntry {
                    invoice_id: &invoice.id,
                    row_index,
                    qty: row.qty,
                    unit: row.unit.as_deref(),
                    returned,
                };
                if let Some(item_id) = row.item_id.as_deref() {
                    by_item_id.entry(item_id).or_default().push(entry);
                }
                if let Some(code) = row.code.as_deref() {
                    by_code.entry(code).or_default().push(entry);
                }
            }
        }
        Self {
            by_item_id,
            by_code,
        }
    }

    fn candidates(&self, key: &str) -> impl Iterator<Item = SaleEntry<'a>> + '_ {
        self.by_item_id
            .get(key)
            .into_iter()
            .flatten()
            .chain(self.by_code.get(key).into_iter().flatten())
            .copied()
    }
}

/// Resolves dated expiry batches and recorded consumption per item.
///
/// Both invoice datasets are indexed once; items are then resolved
/// independently of one another, so callers with very large catalogs
/// can parallelize the per-item pass.
pub struct BatchResolver<'a> {
    purchases: PurchaseIndex<'a>,
    sales: SalesIndex<'a>,
    config: ReportConfig,
}

impl<'a> BatchResolver<'a> {
    pub fn new(
        purchases: &'a [PurchaseInvoice],
        sales: &'a [SalesInvoice],
        config: ReportConfig,
    ) -> Self {
        Self {
            purchases: PurchaseIndex::build(purchases),
            sales: SalesIndex::build(sales),
            config,
        }
    }

    pub fn config(&self) -> ReportConfig {
        self.config
    }

    /// Assemble the candidate batch set for one item, before depletion.
    ///
    /// The stocktake batch (if the item carries a stocktake expiry)
    /// represents what is physically in the warehouse now, with the
    /// item's full `actual_stock` as its quantity. It participates in
    /// the same ordering as invoice batches; there is no special
    /// priority beyond date order.
    pub fn batches_for(&self, item: &InventoryItem) -> Vec<Batch> {
        let mut batches = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        if let Some(expiry_text) = item.stocktake_expiry_text() {
            let id = Batch::stocktake_id(&item.id);
            seen.insert(id.clone());
            batches.push(self.make_batch(
                item,
                id,
                "Current stocktake balance".to_string(),
                BatchSourceType::Stocktake,
                expiry_text,
                item.actual_stock,
            ));
        }

        for seed in self
            .purchases
            .candidates(&item.id)
            .chain(self.purchases.candidates(&item.code))
        {
            let id = Batch::invoice_id(&seed.invoice.id, &seed.row.id);
            // A row discoverable under both keys must only count once
            if !seen.insert(id.clone()) {
                continue;
            }
            let expiry_text = seed.row.expiry_text().unwrap_or_default();
            let source = format!(
                "Purchase invoice {} ({})",
                seed.invoice.id, seed.invoice.vendor
            );
            batches.push(self.make_batch(
                item,
                id,
                source,
                BatchSourceType::Invoice,
                expiry_text,
                seed.row.qty,
            ));
        }

        batches
    }

    /// Net quantity sold for one item, normalized to the major unit.
    ///
    /// Returned invoices subtract (a return puts stock back); deleted
    /// invoices are skipped at index time. Rows referencing items that
    /// do not exist simply never match anything.
    pub fn total_sold(&self, item: &InventoryItem) -> Decimal {
        let mut seen: HashSet<(&str, usize)> = HashSet::new();
        let mut total = Decimal::ZERO;
        for entry in self
            .sales
            .candidates(&item.id)
            .chain(self.sales.candidates(&item.code))
        {
            if !seen.insert((entry.invoice_id, entry.row_index)) {
                continue;
            }
            let qty = item.normalize_qty(entry.qty, entry.unit);
            if entry.returned {
                total -= qty;
            } else {
                total += qty;
            }
        }
        total
    }

    fn make_batch(
        &self,
        item: &InventoryItem,
        id: String,
        source: String,
        source_type: BatchSourceType,
        expiry_text: &str,
        quantity: Decimal,
    ) -> Batch {
        let expiry_date = parse_expiry(expiry_text);
        if expiry_date.is_none() {
            tracing::debug!(
                item = %item.id,
                batch = %id,
                raw = %expiry_text,
                "unparseable expiry date, batch degrades to unknown"
            );
        }
        let days = days_left(self.config.today, expiry_date);
        Batch {
            id,
            source,
            source_type,
            expiry_text: expiry_text.to_string(),
            expiry_date,
            quantity,
            original_quantity: quantity,
            days_left: days,
            status: ExpiryStatus::classify(days, self.config.alert_threshold_days),
        }
    }
}
