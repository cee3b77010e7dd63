//! Combat tuning constants

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use super::ConfigError;

/// Global combat constants instance
static COMBAT_CONSTANTS: OnceLock<CombatConstants> = OnceLock::new();

/// Initialize the global combat constants from a TOML file
///
/// Returns error if already initialized, if loading fails or if the values
/// are inconsistent.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = CombatConstants::load_from_path(path)?;
    COMBAT_CONSTANTS.set(constants).map_err(|_| {
        ConfigError::ValidationError("CombatConstants already initialized".to_string())
    })
}

/// Initialize the global combat constants with default values
pub fn init_constants_default() -> Result<(), ConfigError> {
    COMBAT_CONSTANTS.set(CombatConstants::default()).map_err(|_| {
        ConfigError::ValidationError("CombatConstants already initialized".to_string())
    })
}

/// Get a reference to the global combat constants
///
/// Falls back to the defaults when nothing was installed.
pub fn constants() -> &'static CombatConstants {
    COMBAT_CONSTANTS.get_or_init(CombatConstants::default)
}

/// Check if constants have been initialized
pub fn constants_initialized() -> bool {
    COMBAT_CONSTANTS.get().is_some()
}

/// Tunable combat constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    #[serde(default)]
    pub hit: HitConstants,
    #[serde(default)]
    pub damage: DamageConstants,
}

impl CombatConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: CombatConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let constants: CombatConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let hit = &self.hit;
        if !(0.0..=1.0).contains(&hit.min_chance)
            || !(0.0..=1.0).contains(&hit.max_chance)
            || hit.min_chance > hit.max_chance
        {
            return Err(ConfigError::ValidationError(format!(
                "hit chance bounds must satisfy 0 <= min <= max <= 1, got [{}, {}]",
                hit.min_chance, hit.max_chance
            )));
        }
        let damage = &self.damage;
        if damage.variance_min < 0.0 || damage.variance_min > damage.variance_max {
            return Err(ConfigError::ValidationError(format!(
                "damage variance must satisfy 0 <= min <= max, got [{}, {}]",
                damage.variance_min, damage.variance_max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitConstants {
    /// Hit chance between equally dexterous combatants
    #[serde(default = "default_base_chance")]
    pub base_chance: f64,
    /// Hit chance gained per point of dexterity advantage
    #[serde(default = "default_per_dexterity")]
    pub per_dexterity: f64,
    #[serde(default = "default_min_chance")]
    pub min_chance: f64,
    #[serde(default = "default_max_chance")]
    pub max_chance: f64,
}

impl Default for HitConstants {
    fn default() -> Self {
        HitConstants {
            base_chance: default_base_chance(),
            per_dexterity: default_per_dexterity(),
            min_chance: default_min_chance(),
            max_chance: default_max_chance(),
        }
    }
}

fn default_base_chance() -> f64 {
    0.5
}
fn default_per_dexterity() -> f64 {
    0.03
}
fn default_min_chance() -> f64 {
    0.05
}
fn default_max_chance() -> f64 {
    0.95
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Lower bound of the strength multiplier
    #[serde(default = "default_variance_min")]
    pub variance_min: f64,
    /// Upper bound of the strength multiplier
    #[serde(default = "default_variance_max")]
    pub variance_max: f64,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            variance_min: default_variance_min(),
            variance_max: default_variance_max(),
        }
    }
}

fn default_variance_min() -> f64 {
    0.8
}
fn default_variance_max() -> f64 {
    1.2
}
