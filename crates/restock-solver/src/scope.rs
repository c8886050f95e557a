//! Working state for a rebalancing run.

use std::collections::{BTreeSet, HashMap};

use restock_config::RebalanceSettings;
use restock_core::{StockMatrix, Transfer};

use crate::phase::SolvePhase;

/// Mutable bookkeeping for one run: the working snapshot plus the
/// pair-availability and outgoing-count state that bounds the loop.
///
/// The scope owns a private copy of the caller's snapshot; the solver is
/// its sole mutator, and only at transfer-commit time.
pub(crate) struct SolveScope {
    working: StockMatrix,
    spent_pairs: BTreeSet<(String, String)>,
    outgoing: HashMap<String, u32>,
    transfers: Vec<Transfer>,
    iteration: u64,
}

impl SolveScope {
    pub fn new(stock: &StockMatrix) -> Self {
        SolveScope {
            working: stock.clone(),
            spent_pairs: BTreeSet::new(),
            outgoing: HashMap::new(),
            transfers: Vec::new(),
            iteration: 0,
        }
    }

    pub fn working(&self) -> &StockMatrix {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut StockMatrix {
        &mut self.working
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Committed rounds never exceed `locations * outgoing cap`: each
    /// commit spends a pair and part of a location's budget, and there
    /// are finitely many of both.
    pub fn iteration_bound(&self, settings: &RebalanceSettings) -> u64 {
        self.working.location_count() as u64 * settings.max_outgoing_transfers as u64
    }

    /// Ordered pairs the current phase may evaluate this round.
    pub fn eligible_pairs<'a>(
        &'a self,
        settings: &RebalanceSettings,
        phase: SolvePhase,
    ) -> Vec<(&'a str, &'a str)> {
        let mut pairs = Vec::new();
        for from in self.working.locations() {
            if self.outgoing_count(from) >= settings.max_outgoing_transfers {
                continue;
            }
            for to in self.working.locations() {
                if from == to || !self.pair_open(from, to) || !phase.admits(settings, from, to) {
                    continue;
                }
                pairs.push((from, to));
            }
        }
        pairs
    }

    /// Marks a pair used and spends one unit of the sender's budget.
    pub fn exhaust_pair(&mut self, from: &str, to: &str) {
        self.spent_pairs.insert((from.to_owned(), to.to_owned()));
        *self.outgoing.entry(from.to_owned()).or_insert(0) += 1;
    }

    /// Records a committed transfer and advances the round counter.
    pub fn record(&mut self, transfer: Transfer) {
        self.transfers.push(transfer);
        self.iteration += 1;
    }

    /// Percentage of the worst-case round budget used so far.
    pub fn progress_percent(&self, settings: &RebalanceSettings) -> u8 {
        (self.iteration * 100 / self.iteration_bound(settings)) as u8
    }

    pub fn finish(self) -> (StockMatrix, Vec<Transfer>) {
        (self.working, self.transfers)
    }

    fn outgoing_count(&self, location: &str) -> u32 {
        self.outgoing.get(location).copied().unwrap_or(0)
    }

    fn pair_open(&self, from: &str, to: &str) -> bool {
        !self
            .spent_pairs
            .contains(&(from.to_owned(), to.to_owned()))
    }
}
