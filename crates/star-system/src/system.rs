//! The star system aggregate and its top-level generator.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use catalog::{EntityKind, NameSequence};
use dice::{DiceSource, Provenance, roll_2d6};
use stellar::{
    CompanionOptions, HabitableZone, StarOptions, StarRecord, StellarPropertySource,
    StellarZones, generate_companion_stars, generate_primary_star,
};

use crate::brown_dwarf::{BrownDwarfOptions, BrownDwarfRecord, generate_brown_dwarf};
use crate::config::GeneratorConfig;
use crate::disk::{DiskOptions, DiskRecord, generate_disk};
use crate::error::{Result, SystemError};
use crate::metadata::SystemMetadata;
use crate::planet::{PlanetOptions, PlanetRecord, generate_planet};

/// A complete star system.
///
/// Zones are those of the primary; every disk, planet and brown dwarf is
/// placed relative to it. Planets are ordered by orbital distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub metadata: SystemMetadata,
    pub primary: StarRecord,
    pub companions: Vec<StarRecord>,
    pub zones: StellarZones,
    pub disks: Vec<DiskRecord>,
    pub planets: Vec<PlanetRecord>,
    pub brown_dwarfs: Vec<BrownDwarfRecord>,
    pub provenance: Provenance,
}

impl StarSystem {
    pub fn habitable_zone(&self) -> HabitableZone {
        self.zones.habitable_zone()
    }

    /// Combined luminosity of the primary and companions (L☉)
    pub fn total_luminosity(&self) -> f64 {
        self.stars().map(|s| s.properties.luminosity).sum()
    }

    /// Primary first, then companions
    pub fn stars(&self) -> impl Iterator<Item = &StarRecord> {
        std::iter::once(&self.primary).chain(&self.companions)
    }

    pub fn moon_count(&self) -> usize {
        self.planets.iter().map(|p| p.moons.len()).sum()
    }

    /// Planets whose orbit lies in the primary's conservative habitable zone
    pub fn habitable_zone_planets(&self) -> impl Iterator<Item = &PlanetRecord> {
        let hz = self.habitable_zone();
        self.planets
            .iter()
            .filter(move |p| hz.contains(p.orbital_distance))
    }
}

/// Options for [`generate_star_system`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemOptions {
    pub star: StarOptions,
    pub companions: CompanionOptions,
    pub name: Option<String>,
}

/// Disks from 1D6: 1-3 none, 4-5 one, 6 two
pub fn disk_count(face: u32) -> Result<usize> {
    match face {
        1..=3 => Ok(0),
        4..=5 => Ok(1),
        6 => Ok(2),
        _ => Err(SystemError::RollOutOfRange {
            table: "disk count",
            roll: face,
        }),
    }
}

/// Planets from 2D6 before the configured cap
///
/// | Roll  | Planets |
/// |-------|---------|
/// | 2     | 0       |
/// | 3-4   | 1       |
/// | 5-6   | 2       |
/// | 7     | 3       |
/// | 8-9   | 4       |
/// | 10-11 | 5       |
/// | 12    | 6       |
pub fn planet_count(roll: u32) -> Result<usize> {
    match roll {
        2 => Ok(0),
        3..=4 => Ok(1),
        5..=6 => Ok(2),
        7 => Ok(3),
        8..=9 => Ok(4),
        10..=11 => Ok(5),
        12 => Ok(6),
        _ => Err(SystemError::RollOutOfRange {
            table: "planet count",
            roll,
        }),
    }
}

/// Generate a whole system: primary, companions, disks, planets with their
/// moons, and possibly a brown dwarf.
///
/// The configuration is validated before any dice are rolled. The primary's
/// advantage settings carry over to every body roll.
///
/// # Errors
/// - [`SystemError::InvalidConfig`] for a configuration that fails validation
/// - [`SystemError::Stellar`] from the star generators
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use star_system::{GeneratorConfig, SystemOptions, generate_star_system};
/// use stellar::StellarTable;
///
/// let config = GeneratorConfig::default();
/// let mut rng = ChaChaRng::seed_from_u64(11);
/// let system = generate_star_system(
///     &mut rng,
///     &config.name_sequence(),
///     StellarTable::standard(),
///     &config,
///     &SystemOptions::default(),
/// )
/// .unwrap();
/// assert!(system.planets.len() <= config.max_planets);
/// ```
pub fn generate_star_system<D, S>(
    dice: &mut D,
    names: &dyn NameSequence,
    source: &S,
    config: &GeneratorConfig,
    options: &SystemOptions,
) -> Result<StarSystem>
where
    D: DiceSource,
    S: StellarPropertySource + ?Sized,
{
    config.validate()?;
    let edge = options.star.edge;
    let mut provenance = Provenance::new();

    let name = options
        .name
        .clone()
        .unwrap_or_else(|| names.next_name(EntityKind::System));

    let primary = generate_primary_star(dice, names, source, &options.star)?;
    let companions = generate_companion_stars(
        dice,
        names,
        source,
        primary.stellar_type(),
        &options.companions,
    )?
    .companions;
    let zones = primary.zones()?;
    trace!(companions = companions.len(), "Stars generated");

    let face = dice.roll_die(6);
    provenance.record_die("diskCount", 6, face);
    let disk_options = DiskOptions {
        edge,
        ..DiskOptions::default()
    };
    let disks = (0..disk_count(face)?)
        .map(|_| generate_disk(dice, names, config, &zones, &disk_options))
        .collect::<Result<Vec<_>>>()?;

    let roll = roll_2d6(dice, edge);
    provenance.record_pool("planetCount", &roll);
    let count = planet_count(roll.total)?.min(config.max_planets);
    let planet_options = PlanetOptions {
        edge,
        ..PlanetOptions::default()
    };
    let mut planets = (0..count)
        .map(|_| generate_planet(dice, names, &zones, &planet_options))
        .collect::<Result<Vec<_>>>()?;
    planets.sort_by(|a, b| a.orbital_distance.total_cmp(&b.orbital_distance));

    let u = dice.unit();
    provenance.record_uniform("brownDwarf", u);
    let brown_dwarfs = if u < config.brown_dwarf_chance {
        let options = BrownDwarfOptions {
            edge,
            ..BrownDwarfOptions::default()
        };
        vec![generate_brown_dwarf(dice, names, &primary, &options)?]
    } else {
        Vec::new()
    };

    let metadata = SystemMetadata::new(name, primary.identity.generation_method);

    debug!(
        system = %metadata.display_name(),
        primary = %primary.stellar_type(),
        companions = companions.len(),
        disks = disks.len(),
        planets = planets.len(),
        brown_dwarfs = brown_dwarfs.len(),
        "Generated star system"
    );

    Ok(StarSystem {
        metadata,
        primary,
        companions,
        zones,
        disks,
        planets,
        brown_dwarfs,
        provenance,
    })
}
