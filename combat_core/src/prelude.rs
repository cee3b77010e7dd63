//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Combatants
pub use crate::combatant::{BaseStats, Combatant, Stat};

// Running combat
pub use crate::combat::{
    simulate, AttackResult, CombatLog, CombatOutcome, CombatRunResult, SimulationOptions,
};
pub use crate::error::SimulationError;

// Config
pub use crate::config::{init_constants, init_constants_default, CombatConstants};
