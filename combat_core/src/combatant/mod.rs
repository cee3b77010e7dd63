//! Combatant - Base stats, derived resources and live combat counters

mod record;

pub use record::CombatantRecord;

use serde::{Deserialize, Serialize};
use std::fmt;

/// HP granted per point of constitution
pub const HP_PER_CONSTITUTION: u32 = 2;

/// Wisdom points needed per point of mana regeneration
pub const WISDOM_PER_MANA_REGEN: u32 = 3;

/// The six base stats every combatant carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Strength,
    Dexterity,
    Intelligence,
    Wisdom,
    Agility,
    Constitution,
}

impl Stat {
    /// All stats in display order
    pub fn all() -> &'static [Stat] {
        &[
            Stat::Strength,
            Stat::Dexterity,
            Stat::Intelligence,
            Stat::Wisdom,
            Stat::Agility,
            Stat::Constitution,
        ]
    }

    /// Short label used in stat lines
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Stat::Strength => "STR",
            Stat::Dexterity => "DEX",
            Stat::Intelligence => "INT",
            Stat::Wisdom => "WIS",
            Stat::Agility => "AGI",
            Stat::Constitution => "CON",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Strength => write!(f, "Strength"),
            Stat::Dexterity => write!(f, "Dexterity"),
            Stat::Intelligence => write!(f, "Intelligence"),
            Stat::Wisdom => write!(f, "Wisdom"),
            Stat::Agility => write!(f, "Agility"),
            Stat::Constitution => write!(f, "Constitution"),
        }
    }
}

/// Base stat values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub agility: u32,
    pub constitution: u32,
}

impl Default for BaseStats {
    fn default() -> Self {
        BaseStats::uniform(10)
    }
}

impl BaseStats {
    /// Every stat set to the same value
    pub fn uniform(value: u32) -> Self {
        BaseStats {
            strength: value,
            dexterity: value,
            intelligence: value,
            wisdom: value,
            agility: value,
            constitution: value,
        }
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Wisdom => self.wisdom,
            Stat::Agility => self.agility,
            Stat::Constitution => self.constitution,
        }
    }

    fn slot(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Strength => &mut self.strength,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Wisdom => &mut self.wisdom,
            Stat::Agility => &mut self.agility,
            Stat::Constitution => &mut self.constitution,
        }
    }
}

/// A participant in combat
///
/// Derived values (`max_hp`, `max_mana`, `mana_regen`) are computed from the
/// base stats on every read. Live counters are private so that every mutation
/// goes through a method that re-clamps them into `[0, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CombatantRecord", into = "CombatantRecord")]
pub struct Combatant {
    name: String,
    title: String,
    level: u32,
    stats: BaseStats,
    current_hp: u32,
    current_mana: u32,
}

impl Combatant {
    /// Create a level 1 combatant at full HP and mana
    pub fn new(name: impl Into<String>, stats: BaseStats) -> Self {
        let mut combatant = Combatant {
            name: name.into(),
            title: String::new(),
            level: 1,
            stats,
            current_hp: 0,
            current_mana: 0,
        };
        combatant.reset_to_full();
        combatant
    }

    /// Builder: set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: set the level (floored at 1)
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    /// Builder: set live counters, clamped into range
    pub fn with_current(mut self, hp: u32, mana: u32) -> Self {
        self.current_hp = hp;
        self.current_mana = mana;
        self.clamp_counters();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    pub fn stat(&self, stat: Stat) -> u32 {
        self.stats.get(stat)
    }

    pub fn strength(&self) -> u32 {
        self.stats.strength
    }

    pub fn dexterity(&self) -> u32 {
        self.stats.dexterity
    }

    pub fn intelligence(&self) -> u32 {
        self.stats.intelligence
    }

    pub fn wisdom(&self) -> u32 {
        self.stats.wisdom
    }

    pub fn agility(&self) -> u32 {
        self.stats.agility
    }

    pub fn constitution(&self) -> u32 {
        self.stats.constitution
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn current_mana(&self) -> u32 {
        self.current_mana
    }

    pub fn max_hp(&self) -> u32 {
        self.stats.constitution.saturating_mul(HP_PER_CONSTITUTION)
    }

    pub fn max_mana(&self) -> u32 {
        self.stats.intelligence
    }

    /// Mana regenerated per turn, never less than 1
    pub fn mana_regen(&self) -> u32 {
        (self.stats.wisdom / WISDOM_PER_MANA_REGEN).max(1)
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Heal and return the HP actually restored
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp().saturating_sub(self.current_hp));
        self.current_hp += healed;
        healed
    }

    /// Apply damage and return the HP actually lost
    ///
    /// Overkill is not reported: a 20 damage hit on a 5 HP target returns 5.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current_hp);
        self.current_hp -= actual;
        actual
    }

    /// Regenerate mana for one turn and return the amount gained
    pub fn regenerate_mana(&mut self) -> u32 {
        let gained = self
            .mana_regen()
            .min(self.max_mana().saturating_sub(self.current_mana));
        self.current_mana += gained;
        gained
    }

    /// Spend mana if enough is available. Leaves mana untouched on failure.
    pub fn spend_mana(&mut self, amount: u32) -> bool {
        if self.current_mana >= amount {
            self.current_mana -= amount;
            true
        } else {
            false
        }
    }

    pub fn reset_to_full(&mut self) {
        self.current_hp = self.max_hp();
        self.current_mana = self.max_mana();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level.max(1);
    }

    /// Change a base stat; live counters shrink with their maximum
    pub fn set_stat(&mut self, stat: Stat, value: u32) {
        *self.stats.slot(stat) = value;
        self.clamp_counters();
    }

    pub fn set_current_hp(&mut self, hp: u32) {
        self.current_hp = hp.min(self.max_hp());
    }

    pub fn set_current_mana(&mut self, mana: u32) {
        self.current_mana = mana.min(self.max_mana());
    }

    /// `"{title} {name} (Lv.{level})"`, title omitted when empty
    pub fn display_name(&self) -> String {
        if self.title.is_empty() {
            format!("{} (Lv.{})", self.name, self.level)
        } else {
            format!("{} {} (Lv.{})", self.title, self.name, self.level)
        }
    }

    fn clamp_counters(&mut self) {
        self.current_hp = self.current_hp.min(self.max_hp());
        self.current_mana = self.current_mana.min(self.max_mana());
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.display_name())?;
        let stat_line = Stat::all()
            .iter()
            .map(|s| format!("{}:{}", s.abbreviation(), self.stat(*s)))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "{}", stat_line)?;
        write!(
            f,
            "HP:{}/{} MP:{}/{}",
            self.current_hp,
            self.max_hp(),
            self.current_mana,
            self.max_mana()
        )
    }
}
