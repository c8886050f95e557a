//! Stock snapshot parsing.
//!
//! Reads `Location, Product, OnHand, Target` rows into a
//! [`StockMatrix`]. An optional header row whose first two fields are
//! literally `Store` and `Product` is skipped, as are blank lines. Any
//! malformed row aborts the whole parse; a partial snapshot is never
//! returned.

use std::path::Path;

use restock_core::{StockItem, StockMatrix};
use tracing::debug;

use crate::StockIoError;

/// Parses a delimited stock snapshot.
///
/// # Examples
///
/// ```
/// use restock_io::parse_stock;
///
/// let stock = parse_stock(
///     "Store, Product, Stock, Max\n\
///      Oslo, Corn, 6, 2\n\
///      Bergen, Corn, 0, 4\n",
/// )
/// .unwrap();
///
/// assert_eq!(stock.location_count(), 2);
/// assert_eq!(stock.item("Oslo", "Corn").on_hand, 6);
/// ```
///
/// # Errors
///
/// Returns [`StockIoError::MissingField`] for rows with fewer than four
/// fields and [`StockIoError::InvalidQuantity`] when OnHand or Target is
/// not a non-negative integer.
pub fn parse_stock(input: &str) -> Result<StockMatrix, StockIoError> {
    let mut stock = StockMatrix::new();
    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let (Some(location), Some(product), Some(on_hand), Some(target)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(StockIoError::MissingField { line: line_number });
        };

        if location == "Store" && product == "Product" {
            continue;
        }

        let on_hand = parse_quantity(on_hand, "OnHand", line_number)?;
        let target = parse_quantity(target, "Target", line_number)?;
        stock.set(location, product, StockItem::of(on_hand, target));
    }

    debug!(
        locations = stock.location_count(),
        items = stock.item_count(),
        "parsed stock snapshot"
    );
    Ok(stock)
}

/// Reads and parses a stock snapshot file.
pub fn read_stock_file(path: impl AsRef<Path>) -> Result<StockMatrix, StockIoError> {
    let contents = std::fs::read_to_string(path)?;
    parse_stock(&contents)
}

fn parse_quantity(
    field: &str,
    name: &'static str,
    line: usize,
) -> Result<u32, StockIoError> {
    field.parse().map_err(|source| StockIoError::InvalidQuantity {
        line,
        field: name,
        source,
    })
}
