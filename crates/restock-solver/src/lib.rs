//! Greedy stock-rebalancing engine.
//!
//! This crate provides the transfer-selection core:
//! - Pairwise exchange evaluation (what could move between two locations)
//! - Round-winner selection with a deterministic tie-break
//! - The two-phase eligibility state machine
//! - The solver loop with parallel candidate evaluation and progress
//!   streaming

pub mod exchange;
pub mod phase;
mod scope;
pub mod selector;
pub mod solver;

pub use exchange::{commit_exchange, evaluate_exchange};
pub use phase::SolvePhase;
pub use selector::{better, score};
pub use solver::{RebalanceOutcome, RebalanceSolver};
