//! Combat - attack resolution, turn ordering, the combat log and the round loop

mod log;
mod resolution;
mod result;
mod scheduler;
mod simulation;

pub use log::CombatLog;
pub use resolution::{attack, hit_chance, hit_chance_with, roll_damage, roll_damage_with};
pub use result::AttackResult;
pub use scheduler::{turn_order, Participant};
pub use simulation::{simulate, CombatOutcome, CombatRunResult, SimulationOptions};
