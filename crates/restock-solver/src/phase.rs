//! Two-phase eligibility state machine.
//!
//! A run that names secure or destock locations first restricts rounds to
//! pairs involving them. Once such a round comes up empty the run falls
//! back to unrestricted pairing, and an empty unrestricted round ends the
//! run. Transitions are pure functions, so phase exhaustion is testable
//! without driving the solver loop.

use restock_config::RebalanceSettings;

/// Eligibility state for candidate rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolvePhase {
    /// Only pairs leaving a destock location or entering a secure one.
    Priority,
    /// Any pair of distinct locations.
    Normal,
    /// No further rounds.
    Done,
}

impl SolvePhase {
    /// Phase a run starts in under the given settings.
    pub fn initial(settings: &RebalanceSettings) -> Self {
        if settings.has_priority_locations() {
            SolvePhase::Priority
        } else {
            SolvePhase::Normal
        }
    }

    /// Whether this phase admits the pair `from -> to`.
    pub fn admits(&self, settings: &RebalanceSettings, from: &str, to: &str) -> bool {
        match self {
            SolvePhase::Priority => {
                settings.destock_locations.contains(from)
                    || settings.secure_locations.contains(to)
            }
            SolvePhase::Normal => true,
            SolvePhase::Done => false,
        }
    }

    /// Phase to continue in after a round produced no winner.
    ///
    /// Leaving `Priority` is a phase switch, not termination: the round
    /// is retried immediately under `Normal` eligibility. Leaving
    /// `Normal` ends the run.
    pub fn after_empty_round(self) -> Self {
        match self {
            SolvePhase::Priority => SolvePhase::Normal,
            SolvePhase::Normal | SolvePhase::Done => SolvePhase::Done,
        }
    }
}
