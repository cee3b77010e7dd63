//! Quick battle - one run against a random encounter

use crate::config::ModesConfig;
use crate::encounter::{quick_battle_opponents, rename_clashes};
use crate::ModeError;
use combat_core::{CombatRunResult, SimulationError};
use rand::Rng;
use roster_core::Roster;
use serde::{Deserialize, Serialize};

/// Encounter and outcome of a quick battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickBattleReport {
    /// Display names of the generated opponents
    pub opponents: Vec<String>,
    pub result: CombatRunResult,
}

/// Pit a roster member against a random encounter
pub fn quick_battle<R: Rng + ?Sized>(
    roster: &mut Roster,
    protagonist: &str,
    config: &ModesConfig,
    rng: &mut R,
) -> Result<QuickBattleReport, ModeError> {
    config.validate()?;
    if !roster.contains(protagonist) {
        return Err(SimulationError::ProtagonistNotFound(protagonist.to_string()).into());
    }

    let mut opponents = quick_battle_opponents(&config.quick_battle, rng);
    rename_clashes(&mut opponents, protagonist);
    tracing::debug!(
        "Quick battle: {} vs {} opponents",
        protagonist,
        opponents.len()
    );

    let result = roster.simulate(protagonist, &mut opponents, &config.simulation, rng)?;
    Ok(QuickBattleReport {
        opponents: opponents.iter().map(|o| o.display_name()).collect(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::seeded_rng;
    use combat_core::{BaseStats, Combatant};
    use roster_core::{RosterError, StatRange};

    #[test]
    fn test_unknown_protagonist() {
        let mut roster = Roster::new();
        let err = quick_battle(&mut roster, "ghost", &ModesConfig::default(), &mut seeded_rng(Some(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            ModeError::Simulation(SimulationError::ProtagonistNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let mut roster = Roster::new();
        roster
            .create(Combatant::new("Aria", BaseStats::default()))
            .unwrap();
        let mut config = ModesConfig::default();
        config.quick_battle.levels = StatRange { min: 5, max: 1 };
        let err = quick_battle(&mut roster, "Aria", &config, &mut seeded_rng(Some(1))).unwrap_err();
        assert!(matches!(
            err,
            ModeError::Roster(RosterError::InvalidRange { min: 5, max: 1 })
        ));
        assert_eq!(roster.get("Aria").unwrap().current_hp(), 20);
    }

    #[test]
    fn test_opponent_named_like_protagonist_is_renamed() {
        let mut roster = Roster::new();
        roster
            .create(Combatant::new("Goblin_1", BaseStats::uniform(12)))
            .unwrap();
        let mut config = ModesConfig::default();
        config.quick_battle.kinds = vec!["Goblin".to_string()];
        config.quick_battle.enemy_count = StatRange { min: 1, max: 1 };
        let report =
            quick_battle(&mut roster, "Goblin_1", &config, &mut seeded_rng(Some(2))).unwrap();
        assert_eq!(report.opponents.len(), 1);
        assert!(report.opponents[0].starts_with("Goblin Goblin_1_2 "));
    }

    #[test]
    fn test_quick_battle_summary_only() {
        let mut roster = Roster::new();
        roster
            .create(Combatant::new("Aria", BaseStats::uniform(14)))
            .unwrap();
        let report = quick_battle(&mut roster, "Aria", &ModesConfig::default(), &mut seeded_rng(Some(5)))
            .unwrap();
        assert_eq!(report.opponents.len(), report.result.total_opponents);
        assert!((1..=4).contains(&report.opponents.len()));
        assert!(!report
            .result
            .log
            .lines()
            .iter()
            .any(|l| l.starts_with("--- Round")));
    }

    #[test]
    fn test_quick_battle_is_reproducible() {
        let run = || {
            let mut roster = Roster::new();
            roster
                .create(Combatant::new("Aria", BaseStats::uniform(12)))
                .unwrap();
            quick_battle(&mut roster, "Aria", &ModesConfig::default(), &mut seeded_rng(Some(77)))
                .unwrap()
        };
        assert_eq!(run(), run());
    }
}
