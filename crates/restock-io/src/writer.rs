//! Transfer plan export.
//!
//! Renders committed transfers as `From, To, Product, Quantity` rows.
//! Rendering happens fully in memory before anything touches the
//! filesystem, so a failed write never leaves a file holding part of a
//! plan.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use restock_core::Transfer;

use crate::StockIoError;

/// CSV exporter for transfer plans.
///
/// One data row per (transfer, product) pair, in the order transfers
/// were committed and products were recorded within each transfer.
///
/// # Example
///
/// ```
/// use restock_core::{Transfer, TransferredProduct};
/// use restock_io::CsvExporter;
///
/// let mut transfer = Transfer::between("Oslo", "Bergen");
/// transfer.products.push(TransferredProduct {
///     product: "Corn".into(),
///     quantity: 4,
/// });
///
/// let csv = CsvExporter::to_string(&[transfer]);
/// assert_eq!(csv, "From, To, Product, Quantity\nOslo,Bergen,Corn,4\n");
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Renders a transfer plan to a CSV string.
    pub fn to_string(transfers: &[Transfer]) -> String {
        let mut output = String::new();

        // Header
        writeln!(output, "From, To, Product, Quantity").unwrap();

        // Data rows
        for transfer in transfers {
            for product in &transfer.products {
                writeln!(
                    output,
                    "{},{},{},{}",
                    transfer.from, transfer.to, product.product, product.quantity
                )
                .unwrap();
            }
        }

        output
    }

    /// Writes a transfer plan to a CSV file with a single truncating
    /// write.
    pub fn to_file(transfers: &[Transfer], path: impl AsRef<Path>) -> Result<(), StockIoError> {
        let csv = Self::to_string(transfers);
        fs::write(path, csv)?;
        Ok(())
    }

    /// Writes a transfer plan as CSV to a writer.
    pub fn write<W: Write>(transfers: &[Transfer], mut writer: W) -> io::Result<()> {
        let csv = Self::to_string(transfers);
        writer.write_all(csv.as_bytes())
    }
}

/// Appends `.csv` when the path does not already end in it.
pub fn ensure_csv_extension(path: &str) -> PathBuf {
    if path.ends_with(".csv") {
        PathBuf::from(path)
    } else {
        PathBuf::from(format!("{path}.csv"))
    }
}
