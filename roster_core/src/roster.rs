use crate::generation::{random_combatant, StatRange};
use crate::patch::CharacterPatch;
use crate::RosterError;
use combat_core::{simulate, CombatRunResult, Combatant, SimulationError, SimulationOptions};
use rand::Rng;
use std::collections::BTreeMap;
use std::path::Path;

/// Named collection of characters, persisted as one JSON object
#[derive(Debug, Clone, Default)]
pub struct Roster {
    characters: BTreeMap<String, Combatant>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character; names must be unique
    pub fn create(&mut self, character: Combatant) -> Result<&Combatant, RosterError> {
        let name = character.name().to_string();
        if self.characters.contains_key(&name) {
            return Err(RosterError::DuplicateName(name));
        }
        Ok(self.characters.entry(name).or_insert(character))
    }

    /// Roll and add a random character
    pub fn create_random<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        stats: StatRange,
        levels: StatRange,
        rng: &mut R,
    ) -> Result<&Combatant, RosterError> {
        if self.contains(name) {
            return Err(RosterError::DuplicateName(name.to_string()));
        }
        let character = random_combatant(name, stats, levels, rng)?;
        self.create(character)
    }

    /// Apply a partial update to an existing character
    pub fn edit(&mut self, name: &str, patch: &CharacterPatch) -> Result<(), RosterError> {
        let character = self
            .characters
            .get_mut(name)
            .ok_or_else(|| RosterError::UnknownCharacter(name.to_string()))?;
        patch.apply(character)
    }

    /// Remove a character, returning whether it existed
    pub fn delete(&mut self, name: &str) -> bool {
        self.characters.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Combatant> {
        self.characters.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Combatant> {
        self.characters.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.characters.contains_key(name)
    }

    /// All names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.characters.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.characters.values()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Run a combat with a roster member as the protagonist
    ///
    /// The protagonist keeps its end-of-combat HP and mana.
    pub fn simulate<R: Rng + ?Sized>(
        &mut self,
        protagonist: &str,
        opponents: &mut [Combatant],
        options: &SimulationOptions,
        rng: &mut R,
    ) -> Result<CombatRunResult, SimulationError> {
        let character = self.characters.get_mut(protagonist).ok_or_else(|| {
            tracing::warn!("Protagonist '{}' not in roster", protagonist);
            SimulationError::ProtagonistNotFound(protagonist.to_string())
        })?;
        simulate(character, opponents, options, rng)
    }

    /// Write all characters to a JSON file keyed by name
    pub fn save(&self, path: &Path) -> Result<(), RosterError> {
        let json = serde_json::to_string_pretty(&self.characters).map_err(|e| {
            RosterError::Parse {
                error: e,
                path: path.to_path_buf(),
            }
        })?;
        std::fs::write(path, json).map_err(|e| RosterError::Io {
            error: e,
            path: path.to_path_buf(),
        })?;
        tracing::debug!("Saved {} characters to {:?}", self.len(), path);
        Ok(())
    }

    /// Load a roster from a JSON file
    ///
    /// A missing file yields an empty roster; a corrupt one is an error.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("{:?} not found, starting with an empty roster", path);
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(RosterError::Io {
                    error: e,
                    path: path.to_path_buf(),
                })
            }
        };

        let mut characters: BTreeMap<String, Combatant> =
            serde_json::from_str(&content).map_err(|e| RosterError::Parse {
                error: e,
                path: path.to_path_buf(),
            })?;

        // The map key is authoritative for the name.
        for (name, character) in characters.iter_mut() {
            if character.name() != name {
                character.set_name(name.clone());
            }
        }

        tracing::debug!("Loaded {} characters from {:?}", characters.len(), path);
        Ok(Roster { characters })
    }
}
