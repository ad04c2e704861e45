//! Moons of generated planets.
//!
//! Four 2D6 rolls describe a moon: size, composition, orbit band and tidal
//! heating. Hosts in the cold reaches push composition towards ice, and a
//! close orbit pushes tidal heating up; both modified totals cap at 12.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use catalog::{EntityKind, GenerationMethod, Identity, NameSequence};
use dice::{Advantage, DiceSource, Provenance, roll_2d6};
use stellar::OrbitalZone;

use crate::error::{Result, SystemError};
use crate::placement::log_uniform;

const TABLE_MAXIMUM: u32 = 12;

/// Composition shift for hosts at or past the outer zone
const COLD_HOST_SHIFT: u32 = 2;

/// Tidal heating shift for close orbits
const CLOSE_ORBIT_SHIFT: u32 = 2;

fn out_of_range<T>(table: &'static str, roll: u32) -> Result<T> {
    Err(SystemError::RollOutOfRange { table, roll })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoonSize {
    Moonlet,
    Small,
    Medium,
    Large,
    Planetary,
}

impl MoonSize {
    /// | Roll  | Size      |
    /// |-------|-----------|
    /// | 2-5   | Moonlet   |
    /// | 6-8   | Small     |
    /// | 9-10  | Medium    |
    /// | 11    | Large     |
    /// | 12    | Planetary |
    pub fn from_roll(roll: u32) -> Result<Self> {
        match roll {
            2..=5 => Ok(Self::Moonlet),
            6..=8 => Ok(Self::Small),
            9..=10 => Ok(Self::Medium),
            11 => Ok(Self::Large),
            12 => Ok(Self::Planetary),
            _ => out_of_range("moon size", roll),
        }
    }

    /// Representative mass in Earth masses
    pub fn mass(&self) -> f64 {
        match self {
            Self::Moonlet => 1.0e-6,
            Self::Small => 1.0e-4,
            Self::Medium => 0.005,
            Self::Large => 0.02,
            Self::Planetary => 0.1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Moonlet => "Moonlet",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Planetary => "Planetary",
        }
    }
}

impl fmt::Display for MoonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoonComposition {
    Rocky,
    Mixed,
    Icy,
}

impl MoonComposition {
    pub fn from_roll(roll: u32) -> Result<Self> {
        match roll {
            2..=5 => Ok(Self::Rocky),
            6..=8 => Ok(Self::Mixed),
            9..=12 => Ok(Self::Icy),
            _ => out_of_range("moon composition", roll),
        }
    }
}

/// Orbit band, in host planetary radii
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoonOrbit {
    Close,
    Medium,
    Wide,
    Distant,
}

impl MoonOrbit {
    pub fn from_roll(roll: u32) -> Result<Self> {
        match roll {
            2..=5 => Ok(Self::Close),
            6..=8 => Ok(Self::Medium),
            9..=11 => Ok(Self::Wide),
            12 => Ok(Self::Distant),
            _ => out_of_range("moon orbit", roll),
        }
    }

    /// Span in planetary radii
    pub fn span(&self) -> (f64, f64) {
        match self {
            Self::Close => (3.0, 10.0),
            Self::Medium => (10.0, 30.0),
            Self::Wide => (30.0, 80.0),
            Self::Distant => (80.0, 200.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TidalHeating {
    None,
    Low,
    Moderate,
    Extreme,
}

impl TidalHeating {
    pub fn from_roll(roll: u32) -> Result<Self> {
        match roll {
            2..=7 => Ok(Self::None),
            8..=9 => Ok(Self::Low),
            10..=11 => Ok(Self::Moderate),
            12 => Ok(Self::Extreme),
            _ => out_of_range("tidal heating", roll),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonRecord {
    #[serde(flatten)]
    pub identity: Identity,
    pub size: MoonSize,
    /// Earth masses
    pub mass: f64,
    pub composition: MoonComposition,
    pub orbit: MoonOrbit,
    /// Distance from the host in planetary radii
    pub orbital_radius: f64,
    pub tidal_heating: TidalHeating,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MoonOptions {
    #[serde(flatten)]
    pub edge: Advantage,
    pub size: Option<MoonSize>,
    pub composition: Option<MoonComposition>,
}

fn is_cold_host(zone: OrbitalZone) -> bool {
    matches!(zone, OrbitalZone::Outer | OrbitalZone::Beyond)
}

/// Generate one moon for a host planet in `host_zone`.
pub fn generate_moon<D: DiceSource>(
    dice: &mut D,
    names: &dyn NameSequence,
    host_zone: OrbitalZone,
    options: &MoonOptions,
) -> Result<MoonRecord> {
    let edge = options.edge;
    let mut provenance = Provenance::new();

    let size = match options.size {
        Some(size) => size,
        None => {
            let roll = roll_2d6(dice, edge);
            provenance.record_pool("size", &roll);
            MoonSize::from_roll(roll.total)?
        }
    };

    let composition = match options.composition {
        Some(composition) => composition,
        None => {
            let roll = roll_2d6(dice, edge);
            provenance.record_pool("composition", &roll);
            let shift = if is_cold_host(host_zone) { COLD_HOST_SHIFT } else { 0 };
            MoonComposition::from_roll((roll.total + shift).min(TABLE_MAXIMUM))?
        }
    };

    let roll = roll_2d6(dice, edge);
    provenance.record_pool("orbit", &roll);
    let orbit = MoonOrbit::from_roll(roll.total)?;
    let (min, max) = orbit.span();
    let u = dice.unit();
    provenance.record_uniform("orbitPosition", u);
    let orbital_radius = log_uniform(min, max, u);

    let roll = roll_2d6(dice, edge);
    provenance.record_pool("tidalHeating", &roll);
    let shift = if orbit == MoonOrbit::Close { CLOSE_ORBIT_SHIFT } else { 0 };
    let tidal_heating = TidalHeating::from_roll((roll.total + shift).min(TABLE_MAXIMUM))?;

    trace!(size = %size, orbital_radius, "Generated moon");

    Ok(MoonRecord {
        identity: Identity::new(names.next_name(EntityKind::Moon), GenerationMethod::Procedural),
        size,
        mass: size.mass(),
        composition,
        orbit,
        orbital_radius,
        tidal_heating,
        provenance,
    })
}
