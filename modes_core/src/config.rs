//! Encounter rules for the game modes

use crate::ModeError;
use combat_core::SimulationOptions;
use roster_core::StatRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// All mode settings, loadable from one TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModesConfig {
    #[serde(default)]
    pub quick_battle: QuickBattleConfig,
    #[serde(default)]
    pub tournament: TournamentConfig,
    /// Options for every run a mode starts
    #[serde(default = "SimulationOptions::quiet")]
    pub simulation: SimulationOptions,
}

impl Default for ModesConfig {
    fn default() -> Self {
        ModesConfig {
            quick_battle: QuickBattleConfig::default(),
            tournament: TournamentConfig::default(),
            simulation: SimulationOptions::quiet(),
        }
    }
}

impl ModesConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, ModeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ModeError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ModeError> {
        let config: ModesConfig =
            toml::from_str(content).map_err(|e| ModeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ModeError> {
        let qb = &self.quick_battle;
        for range in [qb.enemy_count, qb.levels, qb.physical, qb.mental] {
            range.validate()?;
        }
        if qb.kinds.is_empty() {
            return Err(ModeError::InvalidConfig(
                "quick_battle.kinds must not be empty".to_string(),
            ));
        }

        let t = &self.tournament;
        for range in [t.enemy_count, t.levels, t.physical, t.mental] {
            range.validate()?;
        }
        if t.max_rounds == 0 {
            return Err(ModeError::InvalidConfig(
                "tournament.max_rounds must be at least 1".to_string(),
            ));
        }
        if t.heal_divisor == 0 {
            return Err(ModeError::InvalidConfig(
                "tournament.heal_divisor must be at least 1".to_string(),
            ));
        }

        if self.simulation.max_rounds == 0 {
            return Err(ModeError::InvalidConfig(
                "simulation.max_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Random encounter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickBattleConfig {
    #[serde(default = "default_qb_enemy_count")]
    pub enemy_count: StatRange,
    /// Enemy kinds; each enemy is named and titled after one
    #[serde(default = "default_kinds")]
    pub kinds: Vec<String>,
    #[serde(default = "default_qb_levels")]
    pub levels: StatRange,
    /// Strength, dexterity, agility and constitution
    #[serde(default = "default_qb_physical")]
    pub physical: StatRange,
    /// Intelligence and wisdom
    #[serde(default = "default_qb_mental")]
    pub mental: StatRange,
}

impl Default for QuickBattleConfig {
    fn default() -> Self {
        QuickBattleConfig {
            enemy_count: default_qb_enemy_count(),
            kinds: default_kinds(),
            levels: default_qb_levels(),
            physical: default_qb_physical(),
            mental: default_qb_mental(),
        }
    }
}

fn default_qb_enemy_count() -> StatRange {
    StatRange { min: 1, max: 4 }
}
fn default_kinds() -> Vec<String> {
    ["Goblin", "Orc", "Skeleton", "Wolf", "Bandit"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_qb_levels() -> StatRange {
    StatRange { min: 1, max: 5 }
}
fn default_qb_physical() -> StatRange {
    StatRange { min: 6, max: 15 }
}
fn default_qb_mental() -> StatRange {
    StatRange { min: 4, max: 12 }
}

/// Tournament settings
///
/// Stat ranges are the round-0 baseline; each round shifts them up by its
/// difficulty, `min(round, difficulty_cap)`. Only the top of the level range
/// moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Most rounds a tournament may be asked to run
    #[serde(default = "default_t_max_rounds")]
    pub max_rounds: u32,
    #[serde(default = "default_t_enemy_count")]
    pub enemy_count: StatRange,
    #[serde(default = "default_difficulty_cap")]
    pub difficulty_cap: u32,
    #[serde(default = "default_t_levels")]
    pub levels: StatRange,
    #[serde(default = "default_t_physical")]
    pub physical: StatRange,
    #[serde(default = "default_t_mental")]
    pub mental: StatRange,
    /// Between rounds the protagonist heals `max_hp / heal_divisor`
    #[serde(default = "default_heal_divisor")]
    pub heal_divisor: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            max_rounds: default_t_max_rounds(),
            enemy_count: default_t_enemy_count(),
            difficulty_cap: default_difficulty_cap(),
            levels: default_t_levels(),
            physical: default_t_physical(),
            mental: default_t_mental(),
            heal_divisor: default_heal_divisor(),
        }
    }
}

impl TournamentConfig {
    pub fn difficulty(&self, round: u32) -> u32 {
        round.min(self.difficulty_cap)
    }
}

fn default_t_max_rounds() -> u32 {
    10
}
fn default_t_enemy_count() -> StatRange {
    StatRange { min: 1, max: 3 }
}
fn default_difficulty_cap() -> u32 {
    5
}
fn default_t_levels() -> StatRange {
    StatRange { min: 1, max: 2 }
}
fn default_t_physical() -> StatRange {
    StatRange { min: 6, max: 12 }
}
fn default_t_mental() -> StatRange {
    StatRange { min: 4, max: 10 }
}
fn default_heal_divisor() -> u32 {
    4
}
