//! Brown dwarfs: substellar companions of spectral class L, T or Y.
//!
//! A single uniform sample places a brown dwarf inside its class band, so
//! heavier objects in a class are also hotter. Orbits use the same 3D6
//! separation buckets as companion stars.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog::{EntityKind, GenerationMethod, Identity, NameSequence};
use dice::{Advantage, DiceSource, Provenance, roll_2d6};
use stellar::{
    CompanionOrbitAssessment, StarRecord, assess_companion_orbit, sample_companion_distance,
};

use crate::error::{Result, SystemError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BrownDwarfClass {
    L,
    T,
    Y,
}

impl BrownDwarfClass {
    /// 2D6: 2-5 L, 6-10 T, 11-12 Y
    pub fn from_roll(roll: u32) -> Result<Self> {
        match roll {
            2..=5 => Ok(Self::L),
            6..=10 => Ok(Self::T),
            11..=12 => Ok(Self::Y),
            _ => Err(SystemError::RollOutOfRange {
                table: "brown dwarf class",
                roll,
            }),
        }
    }

    /// Mass span in Jupiter masses
    pub fn mass_range(&self) -> (f64, f64) {
        match self {
            Self::L => (60.0, 80.0),
            Self::T => (30.0, 60.0),
            Self::Y => (10.0, 30.0),
        }
    }

    /// Effective temperature span in Kelvin
    pub fn temperature_range(&self) -> (f64, f64) {
        match self {
            Self::L => (1300.0, 2200.0),
            Self::T => (700.0, 1300.0),
            Self::Y => (250.0, 700.0),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::L => "Dusty red-brown dwarf with metal-hydride bands",
            Self::T => "Methane dwarf, magenta in visible light",
            Self::Y => "Cold ammonia dwarf barely warmer than a gas giant",
        }
    }
}

impl fmt::Display for BrownDwarfClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::L => "L",
            Self::T => "T",
            Self::Y => "Y",
        };
        write!(f, "{letter}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrownDwarfRecord {
    #[serde(flatten)]
    pub identity: Identity,
    pub spectral_class: BrownDwarfClass,
    /// Jupiter masses
    pub mass: f64,
    /// Kelvin
    pub temperature: f64,
    /// AU from the primary
    pub orbital_distance: f64,
    pub orbit: CompanionOrbitAssessment,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrownDwarfOptions {
    #[serde(flatten)]
    pub edge: Advantage,
    pub spectral_class: Option<BrownDwarfClass>,
}

fn lerp((min, max): (f64, f64), u: f64) -> f64 {
    min + u * (max - min)
}

/// Generate a brown dwarf orbiting `primary`.
///
/// # Errors
/// [`SystemError::Stellar`] if the primary's luminosity cannot produce
/// zones.
pub fn generate_brown_dwarf<D: DiceSource>(
    dice: &mut D,
    names: &dyn NameSequence,
    primary: &StarRecord,
    options: &BrownDwarfOptions,
) -> Result<BrownDwarfRecord> {
    let zones = primary.zones()?;
    let mut provenance = Provenance::new();

    let spectral_class = match options.spectral_class {
        Some(class) => class,
        None => {
            let roll = roll_2d6(dice, options.edge);
            provenance.record_pool("class", &roll);
            BrownDwarfClass::from_roll(roll.total)?
        }
    };

    let u = dice.unit();
    provenance.record_uniform("band", u);
    let mass = lerp(spectral_class.mass_range(), u);
    let temperature = lerp(spectral_class.temperature_range(), u);

    let orbital_distance =
        sample_companion_distance(dice, primary.stellar_class, options.edge, &mut provenance)?;
    let orbit = assess_companion_orbit(orbital_distance, &zones);

    debug!(
        class = %spectral_class,
        mass_mj = mass,
        temperature,
        distance_au = orbital_distance,
        "Generated brown dwarf"
    );

    Ok(BrownDwarfRecord {
        identity: Identity::new(
            names.next_name(EntityKind::BrownDwarf),
            GenerationMethod::Procedural,
        ),
        spectral_class,
        mass,
        temperature,
        orbital_distance,
        orbit,
        provenance,
    })
}
