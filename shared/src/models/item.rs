//! Inventory catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An inventory item as recorded by the back-office catalog.
///
/// Items carry two lookup keys: the primary `id` and a legacy `code`.
/// Invoice rows may reference an item by either key, so both are used
/// when matching purchase and sales history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    /// Legacy lookup code; older invoice rows reference items by this
    pub code: String,
    pub name: String,
    /// Current total on-hand quantity, in the major unit
    pub actual_stock: Decimal,
    /// Expiry recorded for the on-hand stock at the last count, as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stocktake_expiry: Option<String>,
    pub has_sub_units: bool,
    /// Minor units per major unit; meaningful only when `has_sub_units`
    pub factor: Decimal,
    pub major_unit: String,
    pub minor_unit: String,
}

impl InventoryItem {
    /// Convert a quantity recorded on an invoice row to the major unit.
    ///
    /// Rows entered in the minor unit are divided by `factor`. Rows with
    /// no unit, an unrecognized unit, or a nonpositive factor are taken
    /// as already being in the major unit.
    pub fn normalize_qty(&self, qty: Decimal, unit: Option<&str>) -> Decimal {
        match unit {
            Some(u) if self.has_sub_units && u == self.minor_unit && self.factor > Decimal::ZERO => {
                qty / self.factor
            }
            _ => qty,
        }
    }

    /// Stocktake expiry with blank entries treated as absent.
    pub fn stocktake_expiry_text(&self) -> Option<&str> {
        self.stocktake_expiry
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
