//! Core domain types for stock rebalancing:
//! - Stock quantities and the location/product inventory matrix
//! - Transfer records produced by the solver
//! - On-shelf availability (OSA) scoring

pub mod osa;
pub mod stock;
pub mod transfer;

pub use osa::osa_increase;
pub use stock::{StockItem, StockMatrix};
pub use transfer::{Transfer, TransferredProduct};
