//! Transfer records: which products move between which locations.

use serde::{Deserialize, Serialize};

/// A quantity of one product moved by a transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferredProduct {
    pub product: String,
    pub quantity: u32,
}

/// A stock movement between two locations.
///
/// While a candidate is being evaluated only the aggregate fields are
/// filled in; the per-product list is recorded when the transfer is
/// committed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Sending location.
    pub from: String,
    /// Receiving location.
    pub to: String,
    /// Products moved, in the order they were committed.
    pub products: Vec<TransferredProduct>,
    /// Total units moved across all products.
    pub total_item_count: u32,
    /// Number of products this transfer brings back in stock at the
    /// receiving location.
    pub osa_gain: u32,
}

impl Transfer {
    /// Creates an empty transfer between two locations.
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Transfer {
            from: from.into(),
            to: to.into(),
            ..Transfer::default()
        }
    }

    /// `from-to` key used to order transfers deterministically when
    /// scores tie.
    pub fn pair_key(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }

    /// True when the transfer moves nothing.
    pub fn is_empty(&self) -> bool {
        self.total_item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_starts_empty() {
        let transfer = Transfer::between("Oslo", "Bergen");
        assert_eq!(transfer.from, "Oslo");
        assert_eq!(transfer.to, "Bergen");
        assert!(transfer.products.is_empty());
        assert!(transfer.is_empty());
    }

    #[test]
    fn pair_key_joins_endpoints() {
        assert_eq!(Transfer::between("Oslo", "Bergen").pair_key(), "Oslo-Bergen");
    }
}
