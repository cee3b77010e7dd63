//! Errors raised before a simulation run starts

use thiserror::Error;

/// A simulation request that cannot be run
///
/// These are detected before any combatant is touched, so a failed request
/// leaves every participant exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("Protagonist '{0}' not found")]
    ProtagonistNotFound(String),
    #[error("Cannot start combat without opponents")]
    EmptyRoster,
    #[error("Combatant name '{0}' appears more than once")]
    DuplicateName(String),
    #[error("max_rounds must be at least 1")]
    ZeroRounds,
}
