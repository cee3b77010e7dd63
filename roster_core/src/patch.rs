//! Typed partial updates to a character

use crate::RosterError;
use combat_core::{Combatant, Stat};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A field that a patch can change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchField {
    Title,
    Level,
    Stat(Stat),
    CurrentHp,
    CurrentMana,
}

impl FromStr for PatchField {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.trim().to_ascii_lowercase().as_str() {
            "title" => PatchField::Title,
            "level" => PatchField::Level,
            "strength" => PatchField::Stat(Stat::Strength),
            "dexterity" => PatchField::Stat(Stat::Dexterity),
            "intelligence" => PatchField::Stat(Stat::Intelligence),
            "wisdom" => PatchField::Stat(Stat::Wisdom),
            "agility" => PatchField::Stat(Stat::Agility),
            "constitution" => PatchField::Stat(Stat::Constitution),
            "current_hp" => PatchField::CurrentHp,
            "current_mana" => PatchField::CurrentMana,
            _ => return Err(RosterError::UnknownField(s.to_string())),
        };
        Ok(field)
    }
}

/// Partial update naming only recognised character fields
///
/// Unknown keys are rejected on deserialization. Stats and level must be
/// positive; live counters are clamped to the (possibly new) maximum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dexterity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wisdom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agility: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constitution: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_hp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_mana: Option<u32>,
}

impl CharacterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_stat(mut self, stat: Stat, value: u32) -> Self {
        *self.stat_slot(stat) = Some(value);
        self
    }

    /// Set a field from its name and a textual value
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), RosterError> {
        let field: PatchField = field.parse()?;
        match field {
            PatchField::Title => self.title = Some(value.trim().to_string()),
            PatchField::Level => self.level = Some(parse_positive(field, value)?),
            PatchField::Stat(stat) => *self.stat_slot(stat) = Some(parse_positive(field, value)?),
            PatchField::CurrentHp => self.current_hp = Some(parse_number(field, value)?),
            PatchField::CurrentMana => self.current_mana = Some(parse_number(field, value)?),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == CharacterPatch::default()
    }

    /// Check that level and stats are positive
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.level == Some(0) {
            return Err(invalid(PatchField::Level, "0"));
        }
        for stat in Stat::all() {
            if self.stat_value(*stat) == Some(0) {
                return Err(invalid(PatchField::Stat(*stat), "0"));
            }
        }
        Ok(())
    }

    /// Apply to a character. Nothing is changed if validation fails.
    pub fn apply(&self, character: &mut Combatant) -> Result<(), RosterError> {
        self.validate()?;

        if let Some(title) = &self.title {
            character.set_title(title.clone());
        }
        if let Some(level) = self.level {
            character.set_level(level);
        }
        for stat in Stat::all() {
            if let Some(value) = self.stat_value(*stat) {
                character.set_stat(*stat, value);
            }
        }
        if let Some(hp) = self.current_hp {
            character.set_current_hp(hp);
        }
        if let Some(mana) = self.current_mana {
            character.set_current_mana(mana);
        }
        Ok(())
    }

    fn stat_value(&self, stat: Stat) -> Option<u32> {
        match stat {
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Wisdom => self.wisdom,
            Stat::Agility => self.agility,
            Stat::Constitution => self.constitution,
        }
    }

    fn stat_slot(&mut self, stat: Stat) -> &mut Option<u32> {
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

fn parse_number(field: PatchField, value: &str) -> Result<u32, RosterError> {
    value.trim().parse().map_err(|_| invalid(field, value))
}

fn parse_positive(field: PatchField, value: &str) -> Result<u32, RosterError> {
    match parse_number(field, value)? {
        0 => Err(invalid(field, value)),
        n => Ok(n),
    }
}

fn invalid(field: PatchField, value: &str) -> RosterError {
    let field = match field {
        PatchField::Title => "title".to_string(),
        PatchField::Level => "level".to_string(),
        PatchField::Stat(stat) => stat.to_string().to_ascii_lowercase(),
        PatchField::CurrentHp => "current_hp".to_string(),
        PatchField::CurrentMana => "current_mana".to_string(),
    };
    RosterError::InvalidValue {
        field,
        value: value.to_string(),
    }
}
