//! Planets and their moons.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog::{EntityKind, GenerationMethod, Identity, NameSequence};
use dice::{Advantage, DiceSource, Provenance, roll_2d6};
use stellar::{OrbitalZone, StellarZones};

use crate::error::{Result, SystemError};
use crate::moon::{MoonOptions, MoonRecord, generate_moon};
use crate::placement::{log_uniform, pick_zone, place_in_zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetType {
    Rocky,
    SuperEarth,
    IceGiant,
    GasGiant,
    SuperJovian,
}

impl PlanetType {
    /// | Roll  | Type        |
    /// |-------|-------------|
    /// | 2-5   | Rocky       |
    /// | 6-7   | SuperEarth  |
    /// | 8-9   | IceGiant    |
    /// | 10-11 | GasGiant    |
    /// | 12    | SuperJovian |
    pub fn from_roll(roll: u32) -> Result<Self> {
        match roll {
            2..=5 => Ok(Self::Rocky),
            6..=7 => Ok(Self::SuperEarth),
            8..=9 => Ok(Self::IceGiant),
            10..=11 => Ok(Self::GasGiant),
            12 => Ok(Self::SuperJovian),
            _ => Err(SystemError::RollOutOfRange {
                table: "planet type",
                roll,
            }),
        }
    }

    /// Mass span in Earth masses
    pub fn mass_range(&self) -> (f64, f64) {
        match self {
            Self::Rocky => (0.05, 2.0),
            Self::SuperEarth => (2.0, 10.0),
            Self::IceGiant => (10.0, 50.0),
            Self::GasGiant => (50.0, 1000.0),
            Self::SuperJovian => (1000.0, 4000.0),
        }
    }

    /// Added to the 1D6 moon count
    pub fn moon_modifier(&self) -> i32 {
        match self {
            Self::Rocky => -4,
            Self::SuperEarth => -3,
            Self::IceGiant => -1,
            Self::GasGiant => 0,
            Self::SuperJovian => 1,
        }
    }

    pub fn is_giant(&self) -> bool {
        matches!(self, Self::IceGiant | Self::GasGiant | Self::SuperJovian)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rocky => "Rocky",
            Self::SuperEarth => "Super-Earth",
            Self::IceGiant => "Ice Giant",
            Self::GasGiant => "Gas Giant",
            Self::SuperJovian => "Super-Jovian",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRecord {
    #[serde(flatten)]
    pub identity: Identity,
    pub planet_type: PlanetType,
    /// Earth masses
    pub mass: f64,
    pub zone: OrbitalZone,
    /// AU from the primary
    pub orbital_distance: f64,
    pub moons: Vec<MoonRecord>,
    pub provenance: Provenance,
}

/// Options for [`generate_planet`]. Omitted fields are rolled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanetOptions {
    #[serde(flatten)]
    pub edge: Advantage,
    pub planet_type: Option<PlanetType>,
    pub zone: Option<OrbitalZone>,
    /// Leave the moon list empty and skip the moon count roll
    pub skip_moons: bool,
}

/// `1D6 + type modifier`, never below zero
pub fn moon_count(face: u32, planet_type: PlanetType) -> usize {
    (face as i32 + planet_type.moon_modifier()).max(0) as usize
}

/// Generate a planet around a star with the given zones.
///
/// Type and zone come from 2D6, mass and orbit are log-uniform inside the
/// type's mass span and the zone's band, and each moon is generated in turn
/// with the same advantage.
pub fn generate_planet<D: DiceSource>(
    dice: &mut D,
    names: &dyn NameSequence,
    zones: &StellarZones,
    options: &PlanetOptions,
) -> Result<PlanetRecord> {
    let edge = options.edge;
    let mut provenance = Provenance::new();

    let planet_type = match options.planet_type {
        Some(planet_type) => planet_type,
        None => {
            let roll = roll_2d6(dice, edge);
            provenance.record_pool("type", &roll);
            PlanetType::from_roll(roll.total)?
        }
    };

    let (min, max) = planet_type.mass_range();
    let u = dice.unit();
    provenance.record_uniform("mass", u);
    let mass = log_uniform(min, max, u);

    let zone = pick_zone(dice, options.zone, edge, "zone", &mut provenance)?;
    let orbital_distance = place_in_zone(dice, zones, zone, "position", &mut provenance);

    // Named before its moons so sequential names read planet-first
    let name = names.next_name(EntityKind::Planet);

    let moons = if options.skip_moons {
        Vec::new()
    } else {
        let face = dice.roll_die(6);
        provenance.record_die("moonCount", 6, face);
        let moon_options = MoonOptions {
            edge,
            ..MoonOptions::default()
        };
        (0..moon_count(face, planet_type))
            .map(|_| generate_moon(dice, names, zone, &moon_options))
            .collect::<Result<Vec<_>>>()?
    };

    debug!(
        planet_type = %planet_type,
        zone = %zone,
        distance_au = orbital_distance,
        moons = moons.len(),
        "Generated planet"
    );

    Ok(PlanetRecord {
        identity: Identity::new(name, GenerationMethod::Procedural),
        planet_type,
        mass,
        zone,
        orbital_distance,
        moons,
        provenance,
    })
}
