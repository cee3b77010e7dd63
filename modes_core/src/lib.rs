//! modes_core - Game modes built on repeated combat runs
//!
//! - Quick battle: one run against a random encounter
//! - Tournament: escalating encounters until the first loss
//!
//! Both modes read their encounter rules from [`ModesConfig`] and run every
//! combat through [`roster_core::Roster::simulate`], so the protagonist is
//! always a roster member.

mod config;
mod encounter;
mod quick_battle;
mod runner;
mod tournament;

pub use config::{ModesConfig, QuickBattleConfig, TournamentConfig};
pub use encounter::{quick_battle_opponents, rename_clashes, tournament_opponents};
pub use quick_battle::{quick_battle, QuickBattleReport};
pub use runner::seeded_rng;
pub use tournament::{run_tournament, TournamentReport, TournamentRound, TournamentStanding};

use combat_core::SimulationError;
use roster_core::RosterError;
use thiserror::Error;

/// Error running a game mode
#[derive(Debug, Error)]
pub enum ModeError {
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error("Invalid mode configuration: {0}")]
    InvalidConfig(String),
    #[error("Tournament rounds must be between 1 and {max}, got {requested}")]
    InvalidRounds { requested: u32, max: u32 },
}
