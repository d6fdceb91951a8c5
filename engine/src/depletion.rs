//! FIFO depletion of dated batches against recorded sales
//!
//! The item's flat stock total says how much is on hand but not which
//! dated lot it belongs to. Walking batches oldest-expiring-first and
//! deducting the sold total recovers that: surviving quantity sits in
//! the newest batches, which is how physical stock rotates.

use rust_decimal::Decimal;
use shared::{Batch, ExpiryStatus};

/// Apply `total_sold` against `batches`, oldest-expiring first.
///
/// Expired batches are skipped entirely: the model assumes expired
/// stock was never sold, so consumption lands on near, safe, and
/// unknown batches only. Quantities are clamped at zero and batches
/// depleted to nothing (or to noise below 0.001) are dropped.
///
/// Pure transform: consumes the candidate list, returns the adjusted
/// list sorted by urgency.
pub fn deplete(mut batches: Vec<Batch>, total_sold: Decimal) -> Vec<Batch> {
    batches.sort_by_key(Batch::sort_days);

    // Net-negative consumption (returns exceeding sales) clamps to
    // zero; a batch is never inflated past its recorded quantity.
    let mut remaining = total_sold.max(Decimal::ZERO);

    batches
        .into_iter()
        .map(|mut batch| {
            if batch.status != ExpiryStatus::Expired && remaining > Decimal::ZERO {
                let take = batch.quantity.min(remaining).max(Decimal::ZERO);
                batch.quantity -= take;
                remaining -= take;
            }
            batch
        })
        .filter(|batch| !batch.is_depleted())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BatchSourceType;

    fn batch(id: &str, days_left: i64, qty: i64) -> Batch {
        let status = ExpiryStatus::classify(Some(days_left), 90);
        Batch {
            id: id.to_string(),
            source: format!("Purchase invoice {id}"),
            source_type: BatchSourceType::Invoice,
            expiry_text: String::new(),
            expiry_date: None,
            quantity: Decimal::from(qty),
            original_quantity: Decimal::from(qty),
            days_left: Some(days_left),
            status,
        }
    }

    fn qty(batches: &[Batch], id: &str) -> Decimal {
        batches.iter().find(|b| b.id == id).unwrap().quantity
    }

    #[test]
    fn oldest_valid_batch_is_exhausted_first() {
        let batches = vec![batch("B", 30, 5), batch("A", 10, 5)];
        let result = deplete(batches, Decimal::from(7));
        // A is fully consumed before B is touched
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "B");
        assert_eq!(result[0].quantity, Decimal::from(3));
    }

    #[test]
    fn expired_batches_are_never_depleted() {
        let batches = vec![batch("A", -5, 10), batch("B", 20, 10)];
        let result = deplete(batches, Decimal::from(5));
        assert_eq!(qty(&result, "A"), Decimal::from(10));
        assert_eq!(qty(&result, "B"), Decimal::from(5));
    }

    #[test]
    fn oversold_stops_at_zero() {
        let batches = vec![batch("A", 10, 5), batch("B", 30, 5)];
        let result = deplete(batches, Decimal::from(100));
        assert!(result.is_empty());
    }

    #[test]
    fn net_negative_consumption_changes_nothing() {
        let batches = vec![batch("A", 10, 5)];
        let result = deplete(batches, Decimal::from(-3));
        assert_eq!(qty(&result, "A"), Decimal::from(5));
    }

    #[test]
    fn unknown_dates_sort_last_and_still_deplete() {
        let mut unknown = batch("U", 0, 10);
        unknown.days_left = None;
        unknown.status = ExpiryStatus::Unknown;
        let batches = vec![unknown, batch("A", 10, 4)];
        let result = deplete(batches, Decimal::from(6));
        // A (known date) is consumed first, then the unknown batch
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "U");
        assert_eq!(result[0].quantity, Decimal::from(8));
    }

    #[test]
    fn noise_quantities_are_dropped() {
        let mut small = batch("S", 10, 1);
        small.quantity = Decimal::new(1, 3); // 0.001
        let result = deplete(vec![small], Decimal::ZERO);
        assert!(result.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(deplete(Vec::new(), Decimal::from(10)).is_empty());
    }
}
