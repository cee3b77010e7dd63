//! Random character generation

use crate::templates::Template;
use crate::RosterError;
use combat_core::{BaseStats, Combatant};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive range of values to roll from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    /// Create a range; `min` must be at least 1 and not above `max`
    pub fn new(min: u32, max: u32) -> Result<Self, RosterError> {
        let range = StatRange { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        if self.min == 0 || self.min > self.max {
            return Err(RosterError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Same width, shifted up by `amount`
    pub fn shifted(&self, amount: u32) -> Self {
        StatRange {
            min: self.min + amount,
            max: self.max + amount,
        }
    }

    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Preset stat and level ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerLevel {
    Weak,
    Average,
    Strong,
}

impl PowerLevel {
    /// (stat range, level range)
    pub fn ranges(&self) -> (StatRange, StatRange) {
        let (stats, levels) = match self {
            PowerLevel::Weak => ((6, 12), (1, 3)),
            PowerLevel::Average => ((8, 15), (2, 5)),
            PowerLevel::Strong => ((12, 18), (4, 8)),
        };
        (
            StatRange {
                min: stats.0,
                max: stats.1,
            },
            StatRange {
                min: levels.0,
                max: levels.1,
            },
        )
    }
}

/// Ranges used when the caller doesn't pick any
pub fn default_ranges() -> (StatRange, StatRange) {
    (StatRange { min: 8, max: 15 }, StatRange { min: 1, max: 5 })
}

/// Roll a character with every stat drawn from `stats` and a level from `levels`
pub fn random_combatant<R: Rng + ?Sized>(
    name: impl Into<String>,
    stats: StatRange,
    levels: StatRange,
    rng: &mut R,
) -> Result<Combatant, RosterError> {
    stats.validate()?;
    levels.validate()?;

    let base = BaseStats {
        strength: stats.roll(rng),
        dexterity: stats.roll(rng),
        intelligence: stats.roll(rng),
        wisdom: stats.roll(rng),
        agility: stats.roll(rng),
        constitution: stats.roll(rng),
    };
    Ok(Combatant::new(name, base).with_level(levels.roll(rng)))
}

/// How members of an enemy group are built
#[derive(Debug, Clone)]
pub enum GroupMethod {
    /// Every member is a copy of the template
    Identical(Template),
    /// Every member is rolled independently
    Random { stats: StatRange, levels: StatRange },
}

/// Build `count` enemies named `{base_name}_1` .. `{base_name}_{count}`
pub fn enemy_group<R: Rng + ?Sized>(
    base_name: &str,
    count: usize,
    method: &GroupMethod,
    rng: &mut R,
) -> Result<Vec<Combatant>, RosterError> {
    (1..=count)
        .map(|i| {
            let name = format!("{}_{}", base_name, i);
            match method {
                GroupMethod::Identical(template) => Ok(template.instantiate(name)),
                GroupMethod::Random { stats, levels } => {
                    random_combatant(name, *stats, *levels, rng)
                }
            }
        })
        .collect()
}
