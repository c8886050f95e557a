//! Pairwise exchange evaluation.
//!
//! Given two locations, the maximal feasible transfer moves every product
//! the source holds above target and the destination sits below target
//! on, at quantity `min(surplus, deficit)`. Evaluation is split into a
//! read-only path, safe to fan out over many location pairs at once, and
//! a committing path that applies the winning transfer to the working
//! snapshot.

use restock_core::{StockItem, StockMatrix, Transfer, TransferredProduct};
use tracing::trace;

/// Computes the transfer `from -> to` without touching the snapshot.
///
/// Only the aggregate fields of the returned [`Transfer`] are filled in;
/// the per-product list is produced by [`commit_exchange`] once a
/// candidate has won its round.
pub fn evaluate_exchange(stock: &StockMatrix, from: &str, to: &str) -> Transfer {
    let mut transfer = Transfer::between(from, to);
    for (product, source) in stock.products_at(from) {
        let destination = stock.item(to, product);
        let quantity = feasible_quantity(source, destination);
        if quantity == 0 {
            continue;
        }
        if !destination.is_in_stock() {
            transfer.osa_gain += 1;
        }
        transfer.total_item_count += quantity;
    }
    trace!(
        from,
        to,
        items = transfer.total_item_count,
        osa_gain = transfer.osa_gain,
        "evaluated pair"
    );
    transfer
}

/// Computes and applies the transfer `from -> to`, recording the moved
/// products in snapshot order.
///
/// On-hand quantities stay non-negative under repeated application
/// because each move is capped at the source surplus.
pub fn commit_exchange(stock: &mut StockMatrix, from: &str, to: &str) -> Transfer {
    let moves: Vec<(String, u32, bool)> = stock
        .products_at(from)
        .map(|(product, source)| {
            let destination = stock.item(to, product);
            let quantity = feasible_quantity(source, destination);
            (product.to_owned(), quantity, !destination.is_in_stock())
        })
        .filter(|&(_, quantity, _)| quantity > 0)
        .collect();

    let mut transfer = Transfer::between(from, to);
    for (product, quantity, was_out_of_stock) in moves {
        stock.move_stock(from, to, &product, quantity);
        if was_out_of_stock {
            transfer.osa_gain += 1;
        }
        transfer.total_item_count += quantity;
        transfer.products.push(TransferredProduct { product, quantity });
    }
    transfer
}

/// Units that can move for one product: `min(surplus, deficit)` when the
/// source has excess and the destination is short, zero otherwise.
fn feasible_quantity(source: StockItem, destination: StockItem) -> u32 {
    let surplus = source.surplus();
    let deficit = destination.deficit();
    if surplus > 0 && deficit > 0 {
        surplus.min(deficit) as u32
    } else {
        0
    }
}
