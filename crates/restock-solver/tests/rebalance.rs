//! End-to-end rebalancing scenarios.

use restock_config::RebalanceSettings;
use restock_core::{StockItem, StockMatrix};
use restock_solver::RebalanceSolver;
use tokio::sync::mpsc;

fn paris_bucharest() -> StockMatrix {
    let mut stock = StockMatrix::new();
    stock.set("Paris", "Apples", StockItem::of(7, 9));
    stock.set("Paris", "Corn", StockItem::of(0, 4));
    stock.set("Paris", "Sugar", StockItem::of(4, 4));
    stock.set("Paris", "Gems", StockItem::of(2, 0));
    stock.set("Paris", "Roses", StockItem::of(6, 4));
    stock.set("Bucharest", "Apples", StockItem::of(17, 3));
    stock.set("Bucharest", "Corn", StockItem::of(6, 2));
    stock.set("Bucharest", "Sugar", StockItem::of(4, 4));
    stock.set("Bucharest", "Gems", StockItem::of(3, 0));
    stock.set("Bucharest", "Roses", StockItem::of(5, 2));
    stock
}

#[test]
fn two_city_run_commits_the_expected_transfer() {
    let stock = paris_bucharest();
    let settings = RebalanceSettings::default()
        .with_max_outgoing_transfers(1)
        .with_min_products_per_transfer(1);

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let outcome = RebalanceSolver::new(settings).solve_with_progress(&stock, sender);

    assert_eq!(outcome.osa_increase, 10.0);
    assert_eq!(outcome.transfers.len(), 1);

    let transfer = &outcome.transfers[0];
    assert_eq!(transfer.from, "Bucharest");
    assert_eq!(transfer.to, "Paris");
    assert_eq!(transfer.total_item_count, 6);
    assert_eq!(transfer.osa_gain, 1);

    let moved: Vec<(&str, u32)> = transfer
        .products
        .iter()
        .map(|p| (p.product.as_str(), p.quantity))
        .collect();
    assert_eq!(moved, vec![("Apples", 2), ("Corn", 4)]);

    // Stock moved, not created: per-product totals are unchanged.
    for product in stock.product_names() {
        assert_eq!(
            outcome.rebalanced.total_on_hand(product),
            stock.total_on_hand(product),
            "{product} total changed"
        );
    }

    let mut progress = Vec::new();
    while let Ok(percent) = receiver.try_recv() {
        progress.push(percent);
    }
    assert!(!progress.is_empty());
    assert!(progress.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(progress.iter().all(|&percent| percent <= 100));
}

#[test]
fn destock_locations_are_served_before_better_normal_candidates() {
    // Stavanger -> Bergen would win the first round on score (it brings
    // Rice back in stock), but Oslo is flagged for destocking, so its
    // transfer must come first.
    let mut stock = StockMatrix::new();
    stock.set("Oslo", "Corn", StockItem::of(5, 1));
    stock.set("Bergen", "Corn", StockItem::of(2, 4));
    stock.set("Bergen", "Rice", StockItem::of(0, 3));
    stock.set("Stavanger", "Rice", StockItem::of(9, 2));

    let settings = RebalanceSettings::default().with_destock_location("Oslo");
    let outcome = RebalanceSolver::new(settings).solve(&stock);

    assert_eq!(outcome.transfers.len(), 2);
    assert_eq!(outcome.transfers[0].from, "Oslo");
    assert_eq!(outcome.transfers[0].to, "Bergen");
    assert_eq!(outcome.transfers[1].from, "Stavanger");
    assert_eq!(outcome.transfers[1].to, "Bergen");

    assert_eq!(outcome.rebalanced.item("Bergen", "Corn").on_hand, 4);
    assert_eq!(outcome.rebalanced.item("Bergen", "Rice").on_hand, 3);
}

#[test]
fn without_priority_locations_the_best_score_goes_first() {
    // Same snapshot as above, no destock flag: the Rice transfer wins
    // the opening round outright.
    let mut stock = StockMatrix::new();
    stock.set("Oslo", "Corn", StockItem::of(5, 1));
    stock.set("Bergen", "Corn", StockItem::of(2, 4));
    stock.set("Bergen", "Rice", StockItem::of(0, 3));
    stock.set("Stavanger", "Rice", StockItem::of(9, 2));

    let outcome = RebalanceSolver::new(RebalanceSettings::default()).solve(&stock);

    assert_eq!(outcome.transfers[0].from, "Stavanger");
}

#[test]
fn secure_locations_are_restocked_first() {
    // Two needy cities, one donor with budget for one transfer; the
    // secure city is served in the priority phase, spending the budget.
    let mut stock = StockMatrix::new();
    stock.set("Oslo", "Corn", StockItem::of(9, 1));
    stock.set("Bergen", "Corn", StockItem::of(0, 2));
    stock.set("Lyon", "Corn", StockItem::of(0, 2));

    let settings = RebalanceSettings::default()
        .with_max_outgoing_transfers(1)
        .with_secure_location("Lyon");
    let outcome = RebalanceSolver::new(settings).solve(&stock);

    assert_eq!(outcome.transfers.len(), 1);
    assert_eq!(outcome.transfers[0].to, "Lyon");
    assert_eq!(outcome.rebalanced.item("Lyon", "Corn").on_hand, 2);
    assert_eq!(outcome.rebalanced.item("Bergen", "Corn").on_hand, 0);
}
