//! Outcome of a single attack

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened when one combatant attacked another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackResult {
    pub attacker: String,
    pub defender: String,
    pub hit: bool,
    /// HP actually removed from the defender
    pub damage_dealt: u32,
    pub defender_defeated: bool,
    /// Hit chance used for the roll; `None` when the attacker could not act
    pub hit_chance: Option<f64>,
}

impl AttackResult {
    /// Attack attempted by a combatant that is already down
    pub(crate) fn downed(attacker: &str, defender: &str) -> Self {
        AttackResult {
            attacker: attacker.to_string(),
            defender: defender.to_string(),
            hit: false,
            damage_dealt: 0,
            defender_defeated: false,
            hit_chance: None,
        }
    }

    pub(crate) fn miss(attacker: &str, defender: &str, hit_chance: f64) -> Self {
        AttackResult {
            hit_chance: Some(hit_chance),
            ..AttackResult::downed(attacker, defender)
        }
    }

    /// Whether the attacker was unable to act at all
    pub fn attacker_was_down(&self) -> bool {
        self.hit_chance.is_none()
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attacker_was_down() {
            return write!(f, "{} is defeated and cannot attack!", self.attacker);
        }
        if !self.hit {
            return write!(f, "{} misses {}!", self.attacker, self.defender);
        }
        write!(
            f,
            "{} hits {} for {} damage!",
            self.attacker, self.defender, self.damage_dealt
        )?;
        if self.defender_defeated {
            write!(f, " {} is defeated!", self.defender)?;
        }
        Ok(())
    }
}
