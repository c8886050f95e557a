//! The rebalancing solver loop.
//!
//! Each round evaluates every eligible location pair in parallel over the
//! read-only working snapshot, reduces the candidates to a single winner,
//! and commits it; the commit is the only point where the snapshot is
//! mutated. The reduction is a barrier: every evaluation result is
//! consumed before the winner is read.
//!
//! Logging levels:
//! - **INFO**: run start/end, phase switches
//! - **DEBUG**: individual committed transfers
//! - **TRACE**: per-pair evaluation detail

use rayon::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, info};

use restock_config::RebalanceSettings;
use restock_core::{osa_increase, StockMatrix, Transfer};

use crate::exchange::{commit_exchange, evaluate_exchange};
use crate::phase::SolvePhase;
use crate::scope::SolveScope;
use crate::selector::better;

/// Result of a rebalancing run.
#[derive(Clone, Debug)]
pub struct RebalanceOutcome {
    /// The caller's snapshot, untouched.
    pub initial: StockMatrix,
    /// The snapshot after all committed transfers.
    pub rebalanced: StockMatrix,
    /// Committed transfers, in commit order.
    pub transfers: Vec<Transfer>,
    /// Settings the run used.
    pub settings: RebalanceSettings,
    /// OSA change in percentage points.
    pub osa_increase: f64,
}

/// Greedy transfer solver.
///
/// Repeatedly commits the single best inter-location transfer until no
/// beneficial transfer remains or every sender has spent its outgoing
/// budget. Greedy: each round picks the locally best candidate under the
/// selector score; the plan as a whole is not guaranteed optimal.
///
/// # Examples
///
/// ```
/// use restock_config::RebalanceSettings;
/// use restock_core::{StockItem, StockMatrix};
/// use restock_solver::RebalanceSolver;
///
/// let mut stock = StockMatrix::new();
/// stock.set("Oslo", "Corn", StockItem::of(6, 2));
/// stock.set("Bergen", "Corn", StockItem::of(0, 4));
///
/// let outcome = RebalanceSolver::new(RebalanceSettings::default()).solve(&stock);
///
/// assert_eq!(outcome.transfers.len(), 1);
/// assert_eq!(outcome.rebalanced.item("Bergen", "Corn").on_hand, 4);
/// ```
#[derive(Clone, Debug)]
pub struct RebalanceSolver {
    settings: RebalanceSettings,
}

impl RebalanceSolver {
    /// Creates a solver with the given settings.
    pub fn new(settings: RebalanceSettings) -> Self {
        RebalanceSolver { settings }
    }

    /// Returns the settings this solver runs with.
    pub fn settings(&self) -> &RebalanceSettings {
        &self.settings
    }

    /// Runs the solver without progress streaming.
    pub fn solve(&self, stock: &StockMatrix) -> RebalanceOutcome {
        // Create a channel but ignore the receiver - no streaming needed.
        let (sender, _receiver) = mpsc::unbounded_channel();
        self.solve_with_progress(stock, sender)
    }

    /// Runs the solver, streaming progress percentages (0-100) as rounds
    /// commit.
    ///
    /// Progress values are monotonic non-decreasing. Sending is
    /// best-effort: a dropped receiver does not fail the run.
    pub fn solve_with_progress(
        &self,
        stock: &StockMatrix,
        progress: mpsc::UnboundedSender<u8>,
    ) -> RebalanceOutcome {
        info!(
            locations = stock.location_count(),
            items = stock.item_count(),
            "starting rebalance run"
        );

        let mut phase = SolvePhase::initial(&self.settings);
        if phase == SolvePhase::Priority {
            info!("starting in priority mode");
        }

        let mut scope = SolveScope::new(stock);
        let bound = scope.iteration_bound(&self.settings);

        while scope.iteration() < bound {
            let Some(winner) = self.best_candidate(&scope, phase) else {
                phase = phase.after_empty_round();
                if phase == SolvePhase::Done {
                    break;
                }
                info!("priority rounds exhausted, resuming normal flow");
                continue;
            };

            scope.exhaust_pair(&winner.from, &winner.to);

            // Re-run in committing mode for the authoritative per-product
            // list against the current working state.
            let committed = commit_exchange(scope.working_mut(), &winner.from, &winner.to);
            debug!(
                from = %committed.from,
                to = %committed.to,
                items = committed.total_item_count,
                osa_gain = committed.osa_gain,
                "committed transfer"
            );
            scope.record(committed);

            let _ = progress.send(scope.progress_percent(&self.settings));
        }

        let (rebalanced, transfers) = scope.finish();
        let osa = osa_increase(stock, &rebalanced);
        info!(
            transfers = transfers.len(),
            osa_increase = osa,
            "rebalance run finished"
        );

        RebalanceOutcome {
            initial: stock.clone(),
            rebalanced,
            transfers,
            settings: self.settings.clone(),
            osa_increase: osa,
        }
    }

    /// Evaluates every eligible pair in parallel and reduces to the round
    /// winner, or `None` when no candidate clears the minimum item count.
    fn best_candidate(&self, scope: &SolveScope, phase: SolvePhase) -> Option<Transfer> {
        let working = scope.working();
        let min_items = self.settings.min_products_per_transfer;
        scope
            .eligible_pairs(&self.settings, phase)
            .par_iter()
            .map(|&(from, to)| evaluate_exchange(working, from, to))
            .filter(|candidate| candidate.total_item_count >= min_items)
            .reduce_with(better)
    }
}
