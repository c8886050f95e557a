//! Delimited-text interfaces for restock: reading stock snapshots and
//! writing transfer plans.

pub mod parser;
pub mod writer;

use thiserror::Error;

pub use parser::{parse_stock, read_stock_file};
pub use writer::{ensure_csv_extension, CsvExporter};

/// Errors from reading stock snapshots or writing transfer plans.
#[derive(Debug, Error)]
pub enum StockIoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `Location, Product, OnHand, Target`")]
    MissingField { line: usize },

    #[error("line {line}: {field} is not a non-negative whole number")]
    InvalidQuantity {
        line: usize,
        field: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },
}
