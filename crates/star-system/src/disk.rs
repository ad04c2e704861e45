//! Circumstellar disks: debris, asteroid belts, protoplanetary and
//! accretion disks.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog::{EntityKind, GenerationMethod, Identity, NameSequence};
use dice::{Advantage, DiceSource, Provenance, roll_2d6};
use stellar::{OrbitalZone, StellarZones};

use crate::config::GeneratorConfig;
use crate::error::{Result, SystemError};
use crate::placement::{pick_zone, place_in_zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiskType {
    Debris,
    AsteroidBelt,
    Protoplanetary,
    Accretion,
}

impl DiskType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Debris => "Debris Disk",
            Self::AsteroidBelt => "Asteroid Belt",
            Self::Protoplanetary => "Protoplanetary Disk",
            Self::Accretion => "Accretion Disk",
        }
    }

    /// Mass multiplier over the rolled mass class
    fn mass_scale(&self) -> f64 {
        match self {
            Self::Debris | Self::AsteroidBelt => 1.0,
            Self::Accretion => 100.0,
            Self::Protoplanetary => 1000.0,
        }
    }
}

impl fmt::Display for DiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiskWidth {
    Narrow,
    Moderate,
    Wide,
    VeryWide,
}

impl DiskWidth {
    /// 2D6: 2-4 narrow, 5-8 moderate, 9-11 wide, 12 very wide
    pub fn from_roll(roll: u32) -> Result<Self> {
        match roll {
            2..=4 => Ok(Self::Narrow),
            5..=8 => Ok(Self::Moderate),
            9..=11 => Ok(Self::Wide),
            12 => Ok(Self::VeryWide),
            _ => Err(SystemError::RollOutOfRange {
                table: "disk width",
                roll,
            }),
        }
    }

    /// Radial width as a fraction of the disk's centre distance
    pub fn fraction(&self) -> f64 {
        match self {
            Self::Narrow => 0.1,
            Self::Moderate => 0.25,
            Self::Wide => 0.5,
            Self::VeryWide => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiskMass {
    Sparse,
    Moderate,
    Dense,
    Massive,
}

impl DiskMass {
    /// 2D6: 2-4 sparse, 5-8 moderate, 9-11 dense, 12 massive
    pub fn from_roll(roll: u32) -> Result<Self> {
        match roll {
            2..=4 => Ok(Self::Sparse),
            5..=8 => Ok(Self::Moderate),
            9..=11 => Ok(Self::Dense),
            12 => Ok(Self::Massive),
            _ => Err(SystemError::RollOutOfRange {
                table: "disk mass",
                roll,
            }),
        }
    }

    /// Representative mass in Earth masses before the disk-type scale
    pub fn base_mass(&self) -> f64 {
        match self {
            Self::Sparse => 1.0e-4,
            Self::Moderate => 1.0e-3,
            Self::Dense => 1.0e-2,
            Self::Massive => 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskRecord {
    #[serde(flatten)]
    pub identity: Identity,
    pub disk_type: DiskType,
    pub zone: OrbitalZone,
    /// AU
    pub inner_radius: f64,
    /// AU
    pub outer_radius: f64,
    pub width: DiskWidth,
    pub mass_class: DiskMass,
    /// Earth masses
    pub mass: f64,
    pub provenance: Provenance,
}

impl DiskRecord {
    pub fn center(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    pub fn width_au(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}

/// Options for [`generate_disk`]. Omitted fields are rolled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiskOptions {
    #[serde(flatten)]
    pub edge: Advantage,
    pub disk_type: Option<DiskType>,
    pub zone: Option<OrbitalZone>,
}

/// Generate one disk around a star with the given zones.
///
/// The type is drawn from the configured weights; zone, width and mass
/// class each take a 2D6 roll, and the centre is placed log-uniformly inside
/// the zone.
pub fn generate_disk<D: DiceSource>(
    dice: &mut D,
    names: &dyn NameSequence,
    config: &GeneratorConfig,
    zones: &StellarZones,
    options: &DiskOptions,
) -> Result<DiskRecord> {
    let mut provenance = Provenance::new();

    let disk_type = match options.disk_type {
        Some(disk_type) => disk_type,
        None => {
            let u = dice.unit();
            provenance.record_uniform("diskType", u);
            config.disk_weights.choose(u)
        }
    };

    let zone = pick_zone(dice, options.zone, options.edge, "zone", &mut provenance)?;
    let center = place_in_zone(dice, zones, zone, "position", &mut provenance);

    let roll = roll_2d6(dice, options.edge);
    provenance.record_pool("width", &roll);
    let width = DiskWidth::from_roll(roll.total)?;

    let roll = roll_2d6(dice, options.edge);
    provenance.record_pool("mass", &roll);
    let mass_class = DiskMass::from_roll(roll.total)?;

    let half = center * width.fraction() / 2.0;

    debug!(
        disk_type = %disk_type,
        zone = %zone,
        center_au = center,
        "Generated disk"
    );

    Ok(DiskRecord {
        identity: Identity::new(names.next_name(EntityKind::Disk), GenerationMethod::Procedural),
        disk_type,
        zone,
        inner_radius: center - half,
        outer_radius: center + half,
        width,
        mass_class,
        mass: mass_class.base_mass() * disk_type.mass_scale(),
        provenance,
    })
}
