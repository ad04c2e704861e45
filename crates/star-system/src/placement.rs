//! Orbital placement shared by disks and planets.

use dice::{Advantage, DiceSource, Provenance, roll_2d6};
use stellar::{OrbitalZone, StellarZones};

use crate::error::{Result, SystemError};

/// Beyond the frostline, bodies are placed out to this multiple of it
pub const BEYOND_SPAN: f64 = 10.0;

/// Inner edge of the infernal zone as a fraction of its outer edge
pub const INFERNAL_FLOOR: f64 = 0.1;

/// Placement zone from 2D6.
///
/// | Roll  | Zone                  |
/// |-------|-----------------------|
/// | 2-3   | Infernal              |
/// | 4-5   | Hot                   |
/// | 6-7   | ConservativeHabitable |
/// | 8-9   | Cold                  |
/// | 10-11 | Outer                 |
/// | 12    | Beyond                |
pub fn zone_from_roll(roll: u32) -> Result<OrbitalZone> {
    match roll {
        2..=3 => Ok(OrbitalZone::Infernal),
        4..=5 => Ok(OrbitalZone::Hot),
        6..=7 => Ok(OrbitalZone::ConservativeHabitable),
        8..=9 => Ok(OrbitalZone::Cold),
        10..=11 => Ok(OrbitalZone::Outer),
        12 => Ok(OrbitalZone::Beyond),
        _ => Err(SystemError::RollOutOfRange {
            table: "placement zone",
            roll,
        }),
    }
}

/// Finite, strictly positive AU span to place a body in a zone.
///
/// The infernal band starts at zero and the beyond zone has no outer edge,
/// so both are given finite stand-ins.
pub fn zone_span(zones: &StellarZones, zone: OrbitalZone) -> (f64, f64) {
    match zones.band(zone) {
        Some(band) if zone == OrbitalZone::Infernal => (band.outer * INFERNAL_FLOOR, band.outer),
        Some(band) => (band.inner, band.outer),
        None => (zones.frostline, zones.frostline * BEYOND_SPAN),
    }
}

/// Log-uniform interpolation between `min` and `max` for `u` in `[0, 1)`
pub fn log_uniform(min: f64, max: f64, u: f64) -> f64 {
    let log_min = min.ln();
    let log_max = max.ln();
    (log_min + u * (log_max - log_min)).exp()
}

/// Roll or take a zone and record the roll under `stage`
pub(crate) fn pick_zone<D: DiceSource>(
    dice: &mut D,
    fixed: Option<OrbitalZone>,
    edge: Advantage,
    stage: &str,
    provenance: &mut Provenance,
) -> Result<OrbitalZone> {
    match fixed {
        Some(zone) => Ok(zone),
        None => {
            let roll = roll_2d6(dice, edge);
            provenance.record_pool(stage, &roll);
            zone_from_roll(roll.total)
        }
    }
}

/// Sample a distance inside a zone, log-uniform, recording the sample
pub(crate) fn place_in_zone<D: DiceSource>(
    dice: &mut D,
    zones: &StellarZones,
    zone: OrbitalZone,
    stage: &str,
    provenance: &mut Provenance,
) -> f64 {
    let (min, max) = zone_span(zones, zone);
    let u = dice.unit();
    provenance.record_uniform(stage, u);
    log_uniform(min, max, u)
}
