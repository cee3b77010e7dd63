//! Simulation loop - runs rounds until one side falls or the round cap is hit

use super::log::CombatLog;
use super::resolution::attack;
use super::scheduler::{turn_order, Participant};
use crate::combatant::Combatant;
use crate::config::ConfigError;
use crate::error::SimulationError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatOutcome {
    Victory,
    Defeat,
    /// Round cap reached with both sides standing
    Ongoing,
}

impl fmt::Display for CombatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatOutcome::Victory => write!(f, "VICTORY"),
            CombatOutcome::Defeat => write!(f, "DEFEAT"),
            CombatOutcome::Ongoing => write!(f, "ONGOING"),
        }
    }
}

/// Per-run settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOptions {
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
    /// Record per-action narration, not just the summary block
    #[serde(default = "default_detailed")]
    pub detailed: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        SimulationOptions {
            max_rounds: default_max_rounds(),
            detailed: default_detailed(),
        }
    }
}

fn default_max_rounds() -> u32 {
    100
}
fn default_detailed() -> bool {
    true
}

impl SimulationOptions {
    /// Summary-only logging
    pub fn quiet() -> Self {
        SimulationOptions {
            detailed: false,
            ..Default::default()
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let options: SimulationOptions = crate::config::parse_toml(content)?;
        if options.max_rounds == 0 {
            return Err(ConfigError::ValidationError(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        Ok(options)
    }
}

/// Everything a caller needs to report on a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatRunResult {
    pub outcome: CombatOutcome,
    pub rounds: u32,
    pub protagonist_hp: u32,
    pub protagonist_max_hp: u32,
    pub opponents_defeated: usize,
    pub total_opponents: usize,
    pub log: CombatLog,
}

impl CombatRunResult {
    pub fn opponents_remaining(&self) -> usize {
        self.total_opponents - self.opponents_defeated
    }

    pub fn is_victory(&self) -> bool {
        self.outcome == CombatOutcome::Victory
    }
}

/// Run a full combat between a protagonist and a group of opponents
///
/// Both sides are reset to full before the first round. The protagonist
/// attacks a random living opponent; opponents only ever attack the
/// protagonist. Victory and defeat are checked at the start of every round
/// and after every action; the round cap is checked before a round's turns.
///
/// Invalid requests are refused before any combatant is touched.
pub fn simulate<R: Rng + ?Sized>(
    protagonist: &mut Combatant,
    opponents: &mut [Combatant],
    options: &SimulationOptions,
    rng: &mut R,
) -> Result<CombatRunResult, SimulationError> {
    validate(protagonist, opponents, options).map_err(|err| {
        tracing::warn!("Refusing to simulate: {}", err);
        err
    })?;

    protagonist.reset_to_full();
    for opponent in opponents.iter_mut() {
        opponent.reset_to_full();
    }

    tracing::debug!(
        "Combat start: {} vs {} opponents (max_rounds={}, detailed={})",
        protagonist.name(),
        opponents.len(),
        options.max_rounds,
        options.detailed
    );

    let mut log = CombatLog::new();
    log.log("=== COMBAT START ===");
    log.log(format!("Protagonist: {}", protagonist));
    log.log(format!("Opponents: {}", opponents.len()));
    for (i, opponent) in opponents.iter().enumerate() {
        log.log(format!("  {}. {}", i + 1, opponent));
    }
    log.log("");

    let mut rounds = 0;
    let outcome = loop {
        if let Some(outcome) = decided(protagonist, opponents) {
            break outcome;
        }

        rounds += 1;
        if rounds > options.max_rounds {
            rounds = options.max_rounds;
            log.log(format!(
                "Combat ended after {} rounds (timeout)",
                options.max_rounds
            ));
            break CombatOutcome::Ongoing;
        }

        tracing::trace!("Round {}", rounds);
        if options.detailed {
            log.log(format!("--- Round {} ---", rounds));
        }

        for participant in turn_order(protagonist, opponents, rng) {
            let actor_alive = match participant {
                Participant::Protagonist => protagonist.is_alive(),
                Participant::Opponent(i) => opponents[i].is_alive(),
            };
            if !actor_alive {
                continue;
            }

            let result = match participant {
                Participant::Protagonist => {
                    match living_opponents(opponents).choose(rng).copied() {
                        Some(target) => Some(attack(protagonist, &mut opponents[target], rng)),
                        None => None,
                    }
                }
                Participant::Opponent(i) => Some(attack(&opponents[i], protagonist, rng)),
            };
            if let (Some(result), true) = (result, options.detailed) {
                log.log(result.to_string());
            }

            let actor = match participant {
                Participant::Protagonist => &mut *protagonist,
                Participant::Opponent(i) => &mut opponents[i],
            };
            let regenerated = actor.regenerate_mana();
            if regenerated > 0 && options.detailed {
                log.log(format!("{} regenerates {} mana.", actor.name(), regenerated));
            }

            if decided(protagonist, opponents).is_some() {
                break;
            }
        }
    };

    let remaining = living_opponents(opponents).len();
    log.log("");
    log.log("=== COMBAT END ===");
    log.log(format!("Result: {}", outcome));
    log.log(format!("Rounds: {}", rounds));
    log.log(format!(
        "Protagonist HP: {}/{}",
        protagonist.current_hp(),
        protagonist.max_hp()
    ));
    log.log(format!(
        "Opponents remaining: {}/{}",
        remaining,
        opponents.len()
    ));

    tracing::debug!("Combat end: {} after {} rounds", outcome, rounds);

    Ok(CombatRunResult {
        outcome,
        rounds,
        protagonist_hp: protagonist.current_hp(),
        protagonist_max_hp: protagonist.max_hp(),
        opponents_defeated: opponents.len() - remaining,
        total_opponents: opponents.len(),
        log,
    })
}

fn validate(
    protagonist: &Combatant,
    opponents: &[Combatant],
    options: &SimulationOptions,
) -> Result<(), SimulationError> {
    if opponents.is_empty() {
        return Err(SimulationError::EmptyRoster);
    }
    if options.max_rounds == 0 {
        return Err(SimulationError::ZeroRounds);
    }
    let mut seen = HashSet::new();
    for name in std::iter::once(protagonist.name()).chain(opponents.iter().map(|c| c.name())) {
        if !seen.insert(name) {
            return Err(SimulationError::DuplicateName(name.to_string()));
        }
    }
    Ok(())
}

fn living_opponents(opponents: &[Combatant]) -> Vec<usize> {
    opponents
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_alive())
        .map(|(i, _)| i)
        .collect()
}

fn decided(protagonist: &Combatant, opponents: &[Combatant]) -> Option<CombatOutcome> {
    if !protagonist.is_alive() {
        Some(CombatOutcome::Defeat)
    } else if opponents.iter().all(|c| !c.is_alive()) {
        Some(CombatOutcome::Victory)
    } else {
        None
    }
}
