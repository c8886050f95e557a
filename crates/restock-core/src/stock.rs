//! Stock quantities and the location/product inventory matrix.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// On-hand and target quantities for one product at one location.
///
/// # Examples
///
/// ```
/// use restock_core::StockItem;
///
/// let item = StockItem::of(7, 4);
/// assert_eq!(item.surplus(), 3);
///
/// let short = StockItem::of(1, 5);
/// assert_eq!(short.deficit(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockItem {
    /// Units currently on the shelf.
    pub on_hand: u32,
    /// Units the location wants on the shelf.
    pub target: u32,
}

impl StockItem {
    /// An absent entry: nothing on hand, nothing wanted.
    pub const EMPTY: StockItem = StockItem {
        on_hand: 0,
        target: 0,
    };

    /// Creates a stock item with the given quantities.
    #[inline]
    pub const fn of(on_hand: u32, target: u32) -> Self {
        StockItem { on_hand, target }
    }

    /// Units above target. Negative means the location is short.
    #[inline]
    pub const fn surplus(&self) -> i64 {
        self.on_hand as i64 - self.target as i64
    }

    /// Units still needed to reach target. Negative means excess.
    #[inline]
    pub const fn deficit(&self) -> i64 {
        self.target as i64 - self.on_hand as i64
    }

    /// True when at least one unit is on the shelf.
    #[inline]
    pub const fn is_in_stock(&self) -> bool {
        self.on_hand > 0
    }
}

/// Inventory snapshot: location name -> product name -> quantities.
///
/// Backed by ordered maps, so every iteration over locations or products
/// is deterministic. A (location, product) entry that was never set reads
/// as [`StockItem::EMPTY`]; absence is not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMatrix {
    locations: BTreeMap<String, BTreeMap<String, StockItem>>,
}

impl StockMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantities for a (location, product) entry.
    pub fn set(&mut self, location: impl Into<String>, product: impl Into<String>, item: StockItem) {
        self.locations
            .entry(location.into())
            .or_default()
            .insert(product.into(), item);
    }

    /// Returns the entry for (location, product), or [`StockItem::EMPTY`]
    /// when the location or product is unknown.
    pub fn item(&self, location: &str, product: &str) -> StockItem {
        self.locations
            .get(location)
            .and_then(|products| products.get(product))
            .copied()
            .unwrap_or(StockItem::EMPTY)
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// True when no location has been recorded.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Location names, in sorted order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    /// Products stocked at a location, in sorted order. Empty for an
    /// unknown location.
    pub fn products_at(&self, location: &str) -> impl Iterator<Item = (&str, StockItem)> {
        self.locations
            .get(location)
            .into_iter()
            .flat_map(|products| products.iter().map(|(name, item)| (name.as_str(), *item)))
    }

    /// Total number of (location, product) entries.
    pub fn item_count(&self) -> usize {
        self.locations.values().map(BTreeMap::len).sum()
    }

    /// Number of (location, product) entries with stock on the shelf.
    pub fn in_stock_count(&self) -> usize {
        self.locations
            .values()
            .flat_map(BTreeMap::values)
            .filter(|item| item.is_in_stock())
            .count()
    }

    /// Units of a product on hand summed over all locations.
    pub fn total_on_hand(&self, product: &str) -> u64 {
        self.locations
            .keys()
            .map(|location| self.item(location, product).on_hand as u64)
            .sum()
    }

    /// Product names appearing at any location, deduplicated and sorted.
    pub fn product_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .locations
            .values()
            .flat_map(|products| products.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Moves `quantity` units of `product` from one location to another.
    ///
    /// Callers must not move more than the source has on hand.
    pub fn move_stock(&mut self, from: &str, to: &str, product: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        debug_assert!(
            self.item(from, product).on_hand >= quantity,
            "moving {quantity} x {product} out of {from} exceeds on-hand stock"
        );
        let source = self.entry_mut(from, product);
        source.on_hand = source.on_hand.saturating_sub(quantity);
        self.entry_mut(to, product).on_hand += quantity;
    }

    fn entry_mut(&mut self, location: &str, product: &str) -> &mut StockItem {
        self.locations
            .entry(location.to_owned())
            .or_default()
            .entry(product.to_owned())
            .or_default()
    }
}
