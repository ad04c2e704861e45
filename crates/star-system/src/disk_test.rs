use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use catalog::AtomicNameSequence;
use dice::{Advantage, ScriptedDice};
use stellar::{OrbitalZone, StellarZones};

use crate::config::{DiskWeights, GeneratorConfig};
use crate::disk::{DiskMass, DiskOptions, DiskType, DiskWidth, generate_disk};
use crate::placement::zone_span;

fn sun() -> StellarZones {
    StellarZones::from_luminosity(1.0).unwrap()
}

#[test]
fn width_and_mass_tables() {
    assert_eq!(DiskWidth::from_roll(2).unwrap(), DiskWidth::Narrow);
    assert_eq!(DiskWidth::from_roll(4).unwrap(), DiskWidth::Narrow);
    assert_eq!(DiskWidth::from_roll(5).unwrap(), DiskWidth::Moderate);
    assert_eq!(DiskWidth::from_roll(11).unwrap(), DiskWidth::Wide);
    assert_eq!(DiskWidth::from_roll(12).unwrap(), DiskWidth::VeryWide);
    assert!(DiskWidth::from_roll(1).is_err());

    assert_eq!(DiskMass::from_roll(4).unwrap(), DiskMass::Sparse);
    assert_eq!(DiskMass::from_roll(8).unwrap(), DiskMass::Moderate);
    assert_eq!(DiskMass::from_roll(9).unwrap(), DiskMass::Dense);
    assert_eq!(DiskMass::from_roll(12).unwrap(), DiskMass::Massive);
    assert!(DiskMass::from_roll(13).is_err());
}

#[test]
fn scripted_debris_disk_in_habitable_zone() {
    let mut dice = ScriptedDice::new([
        3, 4, // zone 7: conservative habitable
        3, 3, // width 6: moderate
        6, 6, // mass 12: massive
    ])
    .with_units([0.1, 0.5]);
    let names = AtomicNameSequence::new();

    let disk = generate_disk(
        &mut dice,
        &names,
        &GeneratorConfig::default(),
        &sun(),
        &DiskOptions::default(),
    )
    .unwrap();

    assert_eq!(disk.identity.name, "Disk 0001");
    assert_eq!(disk.disk_type, DiskType::Debris);
    assert_eq!(disk.zone, OrbitalZone::ConservativeHabitable);
    assert_eq!(disk.width, DiskWidth::Moderate);
    assert_eq!(disk.mass_class, DiskMass::Massive);
    assert_relative_eq!(disk.mass, 0.1);

    let center = (0.95_f64 * 1.37).sqrt();
    assert_relative_eq!(disk.inner_radius, center * 0.875, epsilon = 1e-12);
    assert_relative_eq!(disk.outer_radius, center * 1.125, epsilon = 1e-12);
    assert_relative_eq!(disk.center(), center, epsilon = 1e-12);
    assert_relative_eq!(disk.width_au(), center * 0.25, epsilon = 1e-12);

    let stages: Vec<&str> = disk
        .provenance
        .records()
        .iter()
        .map(|r| r.stage.as_str())
        .collect();
    assert_eq!(stages, ["diskType", "zone", "position", "width", "mass"]);
    assert_eq!(dice.remaining(), 0);
}

#[test]
fn fixed_type_and_zone_skip_their_rolls() {
    let mut dice = ScriptedDice::new([1, 1, 2, 2]).with_units([0.0]);
    let options = DiskOptions {
        disk_type: Some(DiskType::Protoplanetary),
        zone: Some(OrbitalZone::Hot),
        ..DiskOptions::default()
    };

    let disk = generate_disk(
        &mut dice,
        &AtomicNameSequence::new(),
        &GeneratorConfig::default(),
        &sun(),
        &options,
    )
    .unwrap();

    assert_eq!(disk.disk_type, DiskType::Protoplanetary);
    assert_eq!(disk.zone, OrbitalZone::Hot);
    assert_eq!(disk.width, DiskWidth::Narrow);
    assert_eq!(disk.mass_class, DiskMass::Sparse);
    // Sparse class scaled up for a protoplanetary disk
    assert_relative_eq!(disk.mass, 0.1, epsilon = 1e-12);
    assert_relative_eq!(disk.center(), 0.475, epsilon = 1e-12);
    assert!(disk.provenance.find("diskType").is_none());
    assert!(disk.provenance.find("zone").is_none());
}

#[test]
fn configured_weights_drive_the_type() {
    let config = GeneratorConfig {
        disk_weights: DiskWeights {
            debris: 0.0,
            asteroid_belt: 0.0,
            protoplanetary: 0.0,
            accretion: 1.0,
        },
        ..GeneratorConfig::default()
    };
    let mut rng = ChaChaRng::seed_from_u64(5);
    let names = AtomicNameSequence::new();
    for _ in 0..50 {
        let disk = generate_disk(&mut rng, &names, &config, &sun(), &DiskOptions::default())
            .unwrap();
        assert_eq!(disk.disk_type, DiskType::Accretion);
    }
}

#[test]
fn seeded_disks_sit_inside_their_zone() {
    let mut rng = ChaChaRng::seed_from_u64(21);
    let names = AtomicNameSequence::new();
    let zones = StellarZones::from_luminosity(0.3).unwrap();
    let options = DiskOptions {
        edge: Advantage::new(1, 0),
        ..DiskOptions::default()
    };

    for _ in 0..200 {
        let disk =
            generate_disk(&mut rng, &names, &GeneratorConfig::default(), &zones, &options).unwrap();
        let (min, max) = zone_span(&zones, disk.zone);
        assert!(disk.inner_radius < disk.outer_radius);
        assert!(disk.inner_radius > 0.0);
        let center = disk.center();
        assert!(center >= min * (1.0 - 1e-9) && center <= max * (1.0 + 1e-9), "{disk:?}");
    }
}

#[test]
fn disk_type_display() {
    assert_eq!(DiskType::AsteroidBelt.to_string(), "Asteroid Belt");
    assert_eq!(DiskType::Accretion.to_string(), "Accretion Disk");
}
