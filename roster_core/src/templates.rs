//! Character templates - preset stat lines for quick creation

use crate::RosterError;
use combat_core::{BaseStats, Combatant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A preset stat line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub agility: u32,
    pub constitution: u32,
}

fn default_level() -> u32 {
    1
}

impl Template {
    pub fn stats(&self) -> BaseStats {
        BaseStats {
            strength: self.strength,
            dexterity: self.dexterity,
            intelligence: self.intelligence,
            wisdom: self.wisdom,
            agility: self.agility,
            constitution: self.constitution,
        }
    }

    /// Build a character from this template; its title is the template name
    pub fn instantiate(&self, name: impl Into<String>) -> Combatant {
        Combatant::new(name, self.stats())
            .with_title(self.name.clone())
            .with_level(self.level)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} - STR:{} DEX:{} INT:{} WIS:{} AGI:{} CON:{} Level:{}",
            self.id,
            self.name,
            self.strength,
            self.dexterity,
            self.intelligence,
            self.wisdom,
            self.agility,
            self.constitution,
            self.level
        )
    }
}

/// TOML layout of a template file
#[derive(Debug, Deserialize)]
struct TemplateFileConfig {
    #[serde(default)]
    templates: Vec<Template>,
}

/// Ordered set of templates
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The nine stock templates
    pub fn builtin() -> Self {
        // (name, STR, DEX, INT, WIS, AGI, CON, level)
        const STOCK: [(&str, u32, u32, u32, u32, u32, u32, u32); 9] = [
            ("Warrior", 16, 12, 8, 10, 11, 15, 3),
            ("Rogue", 10, 18, 12, 13, 16, 11, 3),
            ("Mage", 8, 10, 18, 16, 12, 10, 3),
            ("Cleric", 12, 10, 14, 18, 11, 13, 3),
            ("Goblin", 8, 14, 6, 8, 15, 10, 1),
            ("Orc", 16, 10, 6, 8, 9, 14, 2),
            ("Dragon", 20, 12, 16, 15, 14, 20, 10),
            ("Skeleton", 12, 13, 4, 6, 12, 8, 2),
            ("Troll", 18, 8, 4, 7, 6, 18, 4),
        ];

        let templates = STOCK
            .iter()
            .enumerate()
            .map(|(i, &(name, str_, dex, int, wis, agi, con, level))| Template {
                id: (i + 1).to_string(),
                name: name.to_string(),
                level,
                strength: str_,
                dexterity: dex,
                intelligence: int,
                wisdom: wis,
                agility: agi,
                constitution: con,
            })
            .collect();
        TemplateRegistry { templates }
    }

    /// Parse templates from a TOML string with `[[templates]]` entries
    pub fn from_toml_str(content: &str) -> Result<Self, RosterError> {
        let config: TemplateFileConfig = toml::from_str(content)?;
        let mut registry = Self::new();
        for template in config.templates {
            registry.register(template)?;
        }
        Ok(registry)
    }

    /// Load templates from a TOML file
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let content = std::fs::read_to_string(path).map_err(|e| RosterError::Io {
            error: e,
            path: path.to_path_buf(),
        })?;
        let registry = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded {} templates from {:?}", registry.len(), path);
        Ok(registry)
    }

    /// Add a template; ids must be unique and stats positive
    pub fn register(&mut self, template: Template) -> Result<(), RosterError> {
        if self.templates.iter().any(|t| t.id == template.id) {
            return Err(RosterError::DuplicateName(template.id));
        }
        let stats = template.stats();
        let zero = combat_core::Stat::all()
            .iter()
            .find(|s| stats.get(**s) == 0)
            .map(|s| s.to_string().to_ascii_lowercase())
            .or_else(|| (template.level == 0).then(|| "level".to_string()));
        if let Some(field) = zero {
            return Err(RosterError::InvalidValue {
                field,
                value: "0".to_string(),
            });
        }
        self.templates.push(template);
        Ok(())
    }

    /// Look up by id or by case-insensitive name
    pub fn get(&self, key: &str) -> Option<&Template> {
        let key = key.trim();
        self.templates
            .iter()
            .find(|t| t.id == key)
            .or_else(|| self.templates.iter().find(|t| t.name.eq_ignore_ascii_case(key)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// One line per template, in listing order
    pub fn listing(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.to_string()).collect()
    }
}
