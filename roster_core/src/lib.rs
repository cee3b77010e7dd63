mod generation;
mod patch;
mod roster;
mod templates;

pub use generation::{
    default_ranges, enemy_group, random_combatant, GroupMethod, PowerLevel, StatRange,
};
pub use patch::{CharacterPatch, PatchField};
pub use roster::Roster;
pub use templates::{Template, TemplateRegistry};

use std::path::PathBuf;
use thiserror::Error;

/// Error managing or persisting a character roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("IO error on '{}': {error}", .path.display())]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: serde_json::Error,
        path: PathBuf,
    },
    #[error("Template parse error: {0}")]
    TemplateParse(#[from] toml::de::Error),
    #[error("Unknown character: {0}")]
    UnknownCharacter(String),
    #[error("A character named '{0}' already exists")]
    DuplicateName(String),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },
    #[error("Invalid range {min}..={max}")]
    InvalidRange { min: u32, max: u32 },
}
