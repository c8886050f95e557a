//! On-shelf availability scoring.
//!
//! OSA is the fraction of (location, product) entries with stock on the
//! shelf. The solver reports the change between the initial and the
//! rebalanced snapshot.

use crate::stock::StockMatrix;

/// Returns the OSA change between two snapshots, in percentage points.
///
/// Computed as the change in in-stock entry count relative to the total
/// entry count of the rebalanced snapshot. Returns `0.0` for an empty
/// snapshot.
///
/// # Examples
///
/// ```
/// use restock_core::{osa_increase, StockItem, StockMatrix};
///
/// let mut before = StockMatrix::new();
/// before.set("Oslo", "Corn", StockItem::of(0, 4));
/// before.set("Oslo", "Rice", StockItem::of(2, 2));
///
/// let mut after = before.clone();
/// after.set("Oslo", "Corn", StockItem::of(4, 4));
///
/// assert_eq!(osa_increase(&before, &after), 50.0);
/// ```
pub fn osa_increase(initial: &StockMatrix, rebalanced: &StockMatrix) -> f64 {
    let total = rebalanced.item_count();
    if total == 0 {
        return 0.0;
    }
    let gained = rebalanced.in_stock_count() as f64 - initial.in_stock_count() as f64;
    gained * 100.0 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock::StockItem;

    #[test]
    fn empty_snapshot_scores_zero() {
        assert_eq!(osa_increase(&StockMatrix::new(), &StockMatrix::new()), 0.0);
    }

    #[test]
    fn unchanged_snapshot_scores_zero() {
        let mut stock = StockMatrix::new();
        stock.set("Oslo", "Corn", StockItem::of(3, 4));
        assert_eq!(osa_increase(&stock, &stock.clone()), 0.0);
    }

    #[test]
    fn restocked_entries_raise_osa() {
        let mut before = StockMatrix::new();
        before.set("Oslo", "Corn", StockItem::of(0, 4));
        before.set("Oslo", "Rice", StockItem::of(0, 2));
        before.set("Bergen", "Corn", StockItem::of(9, 4));
        before.set("Bergen", "Rice", StockItem::of(5, 2));

        let mut after = before.clone();
        after.set("Oslo", "Corn", StockItem::of(4, 4));

        // One of four entries came back in stock.
        assert_eq!(osa_increase(&before, &after), 25.0);
    }

    #[test]
    fn lost_availability_scores_negative() {
        let mut before = StockMatrix::new();
        before.set("Oslo", "Corn", StockItem::of(1, 0));
        before.set("Oslo", "Rice", StockItem::of(1, 0));

        let mut after = before.clone();
        after.set("Oslo", "Corn", StockItem::of(0, 0));

        assert_eq!(osa_increase(&before, &after), -50.0);
    }
}
