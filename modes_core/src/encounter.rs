//! Opponent generation for quick battles and tournament rounds

use crate::config::{QuickBattleConfig, TournamentConfig};
use combat_core::{BaseStats, Combatant};
use rand::seq::SliceRandom;
use rand::Rng;
use roster_core::StatRange;

fn roll_stats<R: Rng + ?Sized>(physical: StatRange, mental: StatRange, rng: &mut R) -> BaseStats {
    BaseStats {
        strength: physical.roll(rng),
        dexterity: physical.roll(rng),
        intelligence: mental.roll(rng),
        wisdom: mental.roll(rng),
        agility: physical.roll(rng),
        constitution: physical.roll(rng),
    }
}

/// Rename opponents whose name matches the protagonist's
///
/// A clashing name gets the first free `_{n}` suffix, n starting at 2.
pub fn rename_clashes(opponents: &mut [Combatant], protagonist: &str) {
    for i in 0..opponents.len() {
        if opponents[i].name() != protagonist {
            continue;
        }
        let taken = |candidate: &str, opponents: &[Combatant]| {
            candidate == protagonist || opponents.iter().any(|o| o.name() == candidate)
        };
        let mut n = 2;
        let mut candidate = format!("{}_{}", protagonist, n);
        while taken(&candidate, opponents) {
            n += 1;
            candidate = format!("{}_{}", protagonist, n);
        }
        tracing::debug!("Renaming opponent '{}' to '{}'", protagonist, candidate);
        opponents[i].set_name(candidate);
    }
}

/// Random encounter: `{Kind}_{i}` enemies titled after their kind
pub fn quick_battle_opponents<R: Rng + ?Sized>(
    config: &QuickBattleConfig,
    rng: &mut R,
) -> Vec<Combatant> {
    let count = config.enemy_count.roll(rng);
    (1..=count)
        .filter_map(|i| {
            let kind = config.kinds.choose(rng)?.clone();
            let level = config.levels.roll(rng);
            let stats = roll_stats(config.physical, config.mental, rng);
            Some(
                Combatant::new(format!("{}_{}", kind, i), stats)
                    .with_title(kind)
                    .with_level(level),
            )
        })
        .collect()
}

/// Opponents for tournament round `round` (1-based)
pub fn tournament_opponents<R: Rng + ?Sized>(
    config: &TournamentConfig,
    round: u32,
    rng: &mut R,
) -> Vec<Combatant> {
    let difficulty = config.difficulty(round);
    let levels = StatRange {
        min: config.levels.min,
        max: config.levels.max + difficulty,
    };
    let physical = config.physical.shifted(difficulty);
    let mental = config.mental.shifted(difficulty);

    let count = config.enemy_count.roll(rng);
    (1..=count)
        .map(|i| {
            let level = levels.roll(rng);
            let stats = roll_stats(physical, mental, rng);
            Combatant::new(format!("Round{}_Enemy{}", round, i), stats).with_level(level)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::seeded_rng;
    use combat_core::Stat;

    #[test]
    fn test_quick_battle_opponents_follow_rules() {
        let config = QuickBattleConfig::default();
        let mut rng = seeded_rng(Some(12));
        for _ in 0..30 {
            let opponents = quick_battle_opponents(&config, &mut rng);
            assert!((1..=4).contains(&opponents.len()));
            for (i, o) in opponents.iter().enumerate() {
                assert!(config.kinds.iter().any(|k| k == o.title()));
                assert_eq!(o.name(), format!("{}_{}", o.title(), i + 1));
                assert!(config.levels.contains(o.level()));
                for stat in [Stat::Strength, Stat::Dexterity, Stat::Agility, Stat::Constitution] {
                    assert!(config.physical.contains(o.stat(stat)));
                }
                assert!(config.mental.contains(o.intelligence()));
                assert!(config.mental.contains(o.wisdom()));
            }
        }
    }

    #[test]
    fn test_rename_clashes() {
        let mut opponents = vec![
            Combatant::new("Orc_1", BaseStats::default()),
            Combatant::new("Orc_1_2", BaseStats::default()),
            Combatant::new("Orc_2", BaseStats::default()),
        ];
        rename_clashes(&mut opponents, "Orc_1");
        let names: Vec<_> = opponents.iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["Orc_1_3", "Orc_1_2", "Orc_2"]);
    }

    #[test]
    fn test_tournament_opponents_scale_with_round() {
        let config = TournamentConfig::default();
        let mut rng = seeded_rng(Some(4));
        for round in 1..=8 {
            let d = round.min(5);
            for (i, o) in tournament_opponents(&config, round, &mut rng).iter().enumerate() {
                assert_eq!(o.name(), format!("Round{}_Enemy{}", round, i + 1));
                assert!(o.title().is_empty());
                assert!((1..=2 + d).contains(&o.level()));
                assert!((6 + d..=12 + d).contains(&o.strength()));
                assert!((4 + d..=10 + d).contains(&o.intelligence()));
            }
        }
    }
}
