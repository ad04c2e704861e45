//! Entity identity and generation provenance tags.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How an entity came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenerationMethod {
    /// Every attribute was rolled
    Procedural,

    /// At least the defining attributes were supplied by the caller
    Custom,
}

/// Kinds of generated entity, used for naming and catalog prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    System,
    Star,
    World,
    Disk,
    Planet,
    Moon,
    BrownDwarf,
}

impl EntityKind {
    /// Word used in sequential default names ("Star 0007")
    pub fn label(&self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Star => "Star",
            Self::World => "World",
            Self::Disk => "Disk",
            Self::Planet => "Planet",
            Self::Moon => "Moon",
            Self::BrownDwarf => "Brown Dwarf",
        }
    }

    /// Single-letter catalog prefix
    pub fn prefix(&self) -> char {
        match self {
            Self::System => 'S',
            Self::Star => 'K',
            Self::World => 'W',
            Self::Disk => 'D',
            Self::Planet => 'P',
            Self::Moon => 'L',
            Self::BrownDwarf => 'B',
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Who an entity is: stable id, display name and how it was generated.
///
/// Ids are UUIDs so they stay JSON-safe when handed to the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub generation_method: GenerationMethod,
}

impl Identity {
    /// A fresh random id with the given name
    pub fn new(name: impl Into<String>, generation_method: GenerationMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            generation_method,
        }
    }

    /// An id derived from a seed string; the same seed always yields the same id
    pub fn from_seed_name(
        seed_name: &str,
        name: impl Into<String>,
        generation_method: GenerationMethod,
    ) -> Self {
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, seed_name.as_bytes()),
            name: name.into(),
            generation_method,
        }
    }

    /// A u64 seed taken from the first half of the id
    pub fn seed(&self) -> u64 {
        self.id.as_u64_pair().0
    }

    /// Copy with a new name (builder pattern)
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Short catalog designation for an id, e.g. `"W-KV4729"`.
///
/// Deterministic: the same kind and id always give the same designation.
pub fn catalog_designation(kind: EntityKind, id: &Uuid) -> String {
    let bytes = id.as_bytes();
    let first = (bytes[0] % 26 + b'A') as char;
    let second = (bytes[1] % 26 + b'A') as char;
    let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
    format!("{}-{first}{second}{number:04}", kind.prefix())
}
