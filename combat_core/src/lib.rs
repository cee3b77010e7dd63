//! combat_core - Turn-based combat engine for stat-driven characters
//!
//! This library provides:
//! - Combatant: base stats, derived HP/mana and clamped live counters
//! - Attack resolution: hit chance from dexterity, damage from strength
//! - Turn ordering by agility with per-round random tiebreaks
//! - CombatLog: the narrated transcript of a run
//! - simulate: the round loop deciding victory, defeat or timeout
//!
//! # Quick Start
//!
//! ```rust
//! use combat_core::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut hero = Combatant::new("Aria", BaseStats::uniform(14)).with_title("Rogue");
//! let mut goblins = vec![
//!     Combatant::new("Goblin_1", BaseStats::uniform(8)),
//!     Combatant::new("Goblin_2", BaseStats::uniform(8)),
//! ];
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let result = simulate(&mut hero, &mut goblins, &SimulationOptions::default(), &mut rng).unwrap();
//! println!("{} after {} rounds", result.outcome, result.rounds);
//! ```

pub mod combat;
pub mod combatant;
pub mod config;
pub mod error;
pub mod prelude;

// Core API - what most users need
pub use combat::{
    simulate, AttackResult, CombatLog, CombatOutcome, CombatRunResult, SimulationOptions,
};
pub use combatant::{BaseStats, Combatant, CombatantRecord, Stat};
pub use error::SimulationError;

// Building blocks of a run
pub use combat::{attack, hit_chance, roll_damage, turn_order, Participant};

// Configuration
pub use config::{init_constants, init_constants_default, CombatConstants, ConfigError};
