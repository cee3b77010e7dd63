//! Tournament - escalating rounds until the first loss

use crate::config::ModesConfig;
use crate::encounter::{rename_clashes, tournament_opponents};
use crate::ModeError;
use combat_core::{CombatOutcome, SimulationError};
use rand::Rng;
use roster_core::Roster;
use serde::{Deserialize, Serialize};

/// One fought tournament round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentRound {
    pub round: u32,
    pub opponents: usize,
    pub outcome: CombatOutcome,
    pub combat_rounds: u32,
    pub protagonist_hp: u32,
    pub protagonist_max_hp: u32,
    /// HP restored before the next round
    pub healed: u32,
}

/// How the tournament went overall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStanding {
    Champion,
    Good,
    BetterLuckNextTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub rounds_requested: u32,
    pub wins: u32,
    pub losses: u32,
    pub rounds: Vec<TournamentRound>,
}

impl TournamentReport {
    /// Percentage of fought rounds won; `None` if nothing was fought
    pub fn win_rate(&self) -> Option<f64> {
        let fought = self.wins + self.losses;
        (fought > 0).then(|| self.wins as f64 / fought as f64 * 100.0)
    }

    pub fn standing(&self) -> TournamentStanding {
        if self.wins == self.rounds_requested {
            TournamentStanding::Champion
        } else if self.wins >= self.rounds_requested / 2 {
            TournamentStanding::Good
        } else {
            TournamentStanding::BetterLuckNextTime
        }
    }
}

/// Run a tournament of `rounds` rounds for a roster member
///
/// Anything but a victory (including a timeout) counts as a loss and ends the
/// tournament. Between rounds the protagonist heals a share of its max HP.
pub fn run_tournament<R: Rng + ?Sized>(
    roster: &mut Roster,
    protagonist: &str,
    rounds: u32,
    config: &ModesConfig,
    rng: &mut R,
) -> Result<TournamentReport, ModeError> {
    config.validate()?;
    let max = config.tournament.max_rounds;
    if rounds == 0 || rounds > max {
        return Err(ModeError::InvalidRounds {
            requested: rounds,
            max,
        });
    }
    if !roster.contains(protagonist) {
        return Err(SimulationError::ProtagonistNotFound(protagonist.to_string()).into());
    }

    let mut report = TournamentReport {
        rounds_requested: rounds,
        wins: 0,
        losses: 0,
        rounds: Vec::new(),
    };

    for round in 1..=rounds {
        let mut opponents = tournament_opponents(&config.tournament, round, rng);
        rename_clashes(&mut opponents, protagonist);
        let result = roster.simulate(protagonist, &mut opponents, &config.simulation, rng)?;
        tracing::debug!(
            "Tournament round {}/{}: {} in {} combat rounds",
            round,
            rounds,
            result.outcome,
            result.rounds
        );

        let mut entry = TournamentRound {
            round,
            opponents: opponents.len(),
            outcome: result.outcome,
            combat_rounds: result.rounds,
            protagonist_hp: result.protagonist_hp,
            protagonist_max_hp: result.protagonist_max_hp,
            healed: 0,
        };

        if result.outcome != CombatOutcome::Victory {
            report.losses += 1;
            report.rounds.push(entry);
            break;
        }
        report.wins += 1;

        if round < rounds {
            if let Some(character) = roster.get_mut(protagonist) {
                let amount = character.max_hp() / config.tournament.heal_divisor;
                entry.healed = character.heal(amount);
            }
        }
        report.rounds.push(entry);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::seeded_rng;
    use combat_core::{BaseStats, Combatant};
    use roster_core::{RosterError, StatRange};

    fn roster_with(name: &str, stats: BaseStats) -> Roster {
        let mut roster = Roster::new();
        roster.create(Combatant::new(name, stats)).unwrap();
        roster
    }

    fn report(requested: u32, wins: u32, losses: u32) -> TournamentReport {
        TournamentReport {
            rounds_requested: requested,
            wins,
            losses,
            rounds: Vec::new(),
        }
    }

    #[test]
    fn test_rounds_out_of_range() {
        let mut roster = roster_with("Aria", BaseStats::default());
        let config = ModesConfig::default();
        for rounds in [0, 11] {
            let err = run_tournament(&mut roster, "Aria", rounds, &config, &mut seeded_rng(Some(1)))
                .unwrap_err();
            assert!(matches!(err, ModeError::InvalidRounds { max: 10, .. }));
        }
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let mut roster = roster_with("Aria", BaseStats::default());
        let mut config = ModesConfig::default();
        config.tournament.heal_divisor = 0;
        let err = run_tournament(&mut roster, "Aria", 3, &config, &mut seeded_rng(Some(1)))
            .unwrap_err();
        assert!(matches!(err, ModeError::InvalidConfig(_)));

        let mut config = ModesConfig::default();
        config.tournament.physical = StatRange { min: 12, max: 6 };
        let err = run_tournament(&mut roster, "Aria", 3, &config, &mut seeded_rng(Some(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            ModeError::Roster(RosterError::InvalidRange { min: 12, max: 6 })
        ));
    }

    #[test]
    fn test_unknown_protagonist() {
        let mut roster = Roster::new();
        let err = run_tournament(&mut roster, "ghost", 3, &ModesConfig::default(), &mut seeded_rng(Some(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            ModeError::Simulation(SimulationError::ProtagonistNotFound(_))
        ));
    }

    #[test]
    fn test_champion_sweeps_every_round() {
        let titan = BaseStats {
            strength: 200,
            dexterity: 60,
            constitution: 500,
            ..BaseStats::default()
        };
        let mut roster = roster_with("Titan", titan);
        let report = run_tournament(&mut roster, "Titan", 4, &ModesConfig::default(), &mut seeded_rng(Some(3)))
            .unwrap();
        assert_eq!(report.wins, 4);
        assert_eq!(report.losses, 0);
        assert_eq!(report.rounds.len(), 4);
        assert_eq!(report.standing(), TournamentStanding::Champion);
        assert_eq!(report.win_rate(), Some(100.0));
        assert_eq!(report.rounds.last().map(|r| r.healed), Some(0));
    }

    #[test]
    fn test_first_loss_ends_tournament() {
        let mut roster = roster_with("Nib", BaseStats::uniform(1));
        let report = run_tournament(&mut roster, "Nib", 5, &ModesConfig::default(), &mut seeded_rng(Some(3)))
            .unwrap();
        assert_eq!(report.wins, 0);
        assert_eq!(report.losses, 1);
        assert_eq!(report.rounds.len(), 1);
        assert_ne!(report.rounds[0].outcome, CombatOutcome::Victory);
        assert_eq!(report.standing(), TournamentStanding::BetterLuckNextTime);
    }

    #[test]
    fn test_standing_thresholds() {
        assert_eq!(report(4, 2, 1).standing(), TournamentStanding::Good);
        assert_eq!(report(4, 1, 1).standing(), TournamentStanding::BetterLuckNextTime);
        assert_eq!(report(3, 3, 0).standing(), TournamentStanding::Champion);
        assert_eq!(report(3, 0, 0).win_rate(), None);
        assert_eq!(report(4, 1, 1).win_rate(), Some(50.0));
    }
}
