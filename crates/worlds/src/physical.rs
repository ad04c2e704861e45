//! World type and physical attributes.
//!
//! The three world types carry different physical data, so the body is a
//! tagged variant rather than one struct with optional fields: only dwarfs
//! have a composition, and habitats always spin to exactly 1 G.

use std::fmt;

use serde::{Deserialize, Serialize};

use dice::{Advantage, DiceSource, Provenance, roll_2d6};

use crate::error::Result;
use crate::tables;

/// Spin gravity of every habitat, in G
pub const ARTIFICIAL_GRAVITY: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorldType {
    Dwarf,
    Terrestrial,
    Habitat,
}

impl WorldType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dwarf => "Dwarf",
            Self::Terrestrial => "Terrestrial",
            Self::Habitat => "Habitat",
        }
    }
}

impl fmt::Display for WorldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Size band for natural worlds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeClass {
    Tiny,
    Small,
    Medium,
    Standard,
    Large,
    VeryLarge,
    Huge,
}

impl SizeClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tiny => "Tiny",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Standard => "Standard",
            Self::Large => "Large",
            Self::VeryLarge => "Very Large",
            Self::Huge => "Huge",
        }
    }
}

/// Inclusive head-count range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRange {
    pub min: u64,
    pub max: u64,
}

impl PopulationRange {
    pub fn midpoint(&self) -> u64 {
        self.min + (self.max - self.min) / 2
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

/// Habitat scale, from a frontier outpost to a megastructure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HabitatScale {
    Outpost,
    Station,
    LargeStation,
    OrbitalCity,
    Megastructure,
}

impl HabitatScale {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Outpost => "Outpost",
            Self::Station => "Station",
            Self::LargeStation => "Large Station",
            Self::OrbitalCity => "Orbital City",
            Self::Megastructure => "Megastructure",
        }
    }

    pub fn population_range(&self) -> PopulationRange {
        let (min, max) = match self {
            Self::Outpost => (100, 1_000),
            Self::Station => (1_000, 10_000),
            Self::LargeStation => (10_000, 100_000),
            Self::OrbitalCity => (100_000, 1_000_000),
            Self::Megastructure => (1_000_000, 10_000_000),
        };
        PopulationRange { min, max }
    }

    /// Structural mass in Earth masses
    pub fn mass(&self) -> f64 {
        match self {
            Self::Outpost => 1.0e-15,
            Self::Station => 1.0e-14,
            Self::LargeStation => 1.0e-13,
            Self::OrbitalCity => 1.0e-12,
            Self::Megastructure => 1.0e-11,
        }
    }
}

/// Bulk composition of a dwarf world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Composition {
    Metallic,
    Silicaceous,
    Carbonaceous,
    Other,
}

impl Composition {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Metallic => "Metallic",
            Self::Silicaceous => "Silicaceous",
            Self::Carbonaceous => "Carbonaceous",
            Self::Other => "Other",
        }
    }
}

/// Physical attributes, tagged by world type.
///
/// Masses are in Earth masses (M⊕) and gravity in G.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "worldType", rename_all = "camelCase")]
pub enum WorldBody {
    Dwarf {
        size: SizeClass,
        mass: f64,
        gravity: f64,
        composition: Composition,
    },
    Terrestrial {
        size: SizeClass,
        mass: f64,
        gravity: f64,
    },
    Habitat {
        scale: HabitatScale,
        mass: f64,
    },
}

impl WorldBody {
    pub fn world_type(&self) -> WorldType {
        match self {
            Self::Dwarf { .. } => WorldType::Dwarf,
            Self::Terrestrial { .. } => WorldType::Terrestrial,
            Self::Habitat { .. } => WorldType::Habitat,
        }
    }

    pub fn mass(&self) -> f64 {
        match self {
            Self::Dwarf { mass, .. } | Self::Terrestrial { mass, .. } | Self::Habitat { mass, .. } => {
                *mass
            }
        }
    }

    pub fn gravity(&self) -> f64 {
        match self {
            Self::Dwarf { gravity, .. } | Self::Terrestrial { gravity, .. } => *gravity,
            Self::Habitat { .. } => ARTIFICIAL_GRAVITY,
        }
    }

    /// Present only for dwarf worlds
    pub fn composition(&self) -> Option<Composition> {
        match self {
            Self::Dwarf { composition, .. } => Some(*composition),
            _ => None,
        }
    }

    pub fn size_name(&self) -> &'static str {
        match self {
            Self::Dwarf { size, .. } | Self::Terrestrial { size, .. } => size.name(),
            Self::Habitat { scale, .. } => scale.name(),
        }
    }
}

/// Roll size, gravity and composition for a world of the given type.
///
/// Habitats roll size only. Terrestrial worlds add gravity, and dwarfs add
/// gravity and then composition.
pub(crate) fn roll_body<D: DiceSource>(
    dice: &mut D,
    world_type: WorldType,
    edge: Advantage,
    provenance: &mut Provenance,
) -> Result<WorldBody> {
    let size_roll = roll_2d6(dice, edge);
    provenance.record_pool("size", &size_roll);

    let body = match world_type {
        WorldType::Habitat => {
            let scale = tables::habitat_scale(size_roll.total)?;
            WorldBody::Habitat {
                scale,
                mass: scale.mass(),
            }
        }
        WorldType::Terrestrial => {
            let (size, mass) = tables::terrestrial_size(size_roll.total)?;
            let gravity_roll = roll_2d6(dice, edge);
            provenance.record_pool("gravity", &gravity_roll);
            WorldBody::Terrestrial {
                size,
                mass,
                gravity: tables::terrestrial_gravity(gravity_roll.total)?,
            }
        }
        WorldType::Dwarf => {
            let (size, mass) = tables::dwarf_size(size_roll.total)?;
            let gravity_roll = roll_2d6(dice, edge);
            provenance.record_pool("gravity", &gravity_roll);
            let composition_roll = roll_2d6(dice, edge);
            provenance.record_pool("composition", &composition_roll);
            WorldBody::Dwarf {
                size,
                mass,
                gravity: tables::dwarf_gravity(gravity_roll.total)?,
                composition: tables::composition(composition_roll.total)?,
            }
        }
    };

    Ok(body)
}
