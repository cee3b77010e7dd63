//! Serialized form of a combatant

use super::{BaseStats, Combatant};
use serde::{Deserialize, Serialize};

/// Flat record used for persistence
///
/// Live counters are optional: a missing or `null` value means "full".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantRecord {
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_stat")]
    pub strength: u32,
    #[serde(default = "default_stat")]
    pub dexterity: u32,
    #[serde(default = "default_stat")]
    pub intelligence: u32,
    #[serde(default = "default_stat")]
    pub wisdom: u32,
    #[serde(default = "default_stat")]
    pub agility: u32,
    #[serde(default = "default_stat")]
    pub constitution: u32,
    #[serde(default)]
    pub current_hp: Option<u32>,
    #[serde(default)]
    pub current_mana: Option<u32>,
}

fn default_level() -> u32 {
    1
}

fn default_stat() -> u32 {
    10
}

impl From<CombatantRecord> for Combatant {
    fn from(record: CombatantRecord) -> Self {
        let stats = BaseStats {
            strength: record.strength,
            dexterity: record.dexterity,
            intelligence: record.intelligence,
            wisdom: record.wisdom,
            agility: record.agility,
            constitution: record.constitution,
        };
        let combatant = Combatant::new(record.name, stats)
            .with_title(record.title)
            .with_level(record.level);
        let hp = record.current_hp.unwrap_or_else(|| combatant.max_hp());
        let mana = record.current_mana.unwrap_or_else(|| combatant.max_mana());
        combatant.with_current(hp, mana)
    }
}

impl From<Combatant> for CombatantRecord {
    fn from(combatant: Combatant) -> Self {
        let stats = *combatant.stats();
        CombatantRecord {
            level: combatant.level(),
            current_hp: Some(combatant.current_hp()),
            current_mana: Some(combatant.current_mana()),
            title: combatant.title,
            name: combatant.name,
            strength: stats.strength,
            dexterity: stats.dexterity,
            intelligence: stats.intelligence,
            wisdom: stats.wisdom,
            agility: stats.agility,
            constitution: stats.constitution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_counters_default_to_max() {
        let json = r#"{
            "name": "Grom", "level": 3, "title": "Warrior",
            "strength": 16, "dexterity": 12, "intelligence": 8,
            "wisdom": 10, "agility": 11, "constitution": 15,
            "current_hp": null, "current_mana": null
        }"#;
        let c: Combatant = serde_json::from_str(json).unwrap();
        assert_eq!(c.current_hp(), 30);
        assert_eq!(c.current_mana(), 8);
        assert_eq!(c.title(), "Warrior");
    }

    #[test]
    fn test_missing_counters_default_to_max() {
        let json = r#"{"name": "Nib", "constitution": 6, "intelligence": 4}"#;
        let c: Combatant = serde_json::from_str(json).unwrap();
        assert_eq!(c.level(), 1);
        assert_eq!(c.strength(), 10);
        assert_eq!(c.current_hp(), 12);
        assert_eq!(c.current_mana(), 4);
    }

    #[test]
    fn test_out_of_range_counters_are_clamped() {
        let json = r#"{"name": "Nib", "constitution": 6, "current_hp": 99, "current_mana": 3}"#;
        let c: Combatant = serde_json::from_str(json).unwrap();
        assert_eq!(c.current_hp(), 12);
        assert_eq!(c.current_mana(), 3);
    }

    #[test]
    fn test_serialized_field_names() {
        let mut c = Combatant::new("Grom", BaseStats::uniform(10));
        c.take_damage(4);
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["name"], "Grom");
        assert_eq!(value["title"], "");
        assert_eq!(value["constitution"], 10);
        assert_eq!(value["current_hp"], 16);
        assert_eq!(value["current_mana"], 10);
    }
}
