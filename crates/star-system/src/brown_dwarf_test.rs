use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use catalog::AtomicNameSequence;
use dice::ScriptedDice;
use stellar::{OrbitalZone, StarOptions, StarRecord, StellarClass, StellarTable, generate_primary_star};

use crate::brown_dwarf::{BrownDwarfClass, BrownDwarfOptions, generate_brown_dwarf};

fn primary(class: StellarClass, grade: u8) -> StarRecord {
    let options = StarOptions {
        stellar_class: Some(class),
        stellar_grade: Some(grade),
        name: Some("Primary".to_string()),
        ..StarOptions::default()
    };
    generate_primary_star(
        &mut ScriptedDice::default(),
        &AtomicNameSequence::new(),
        StellarTable::standard(),
        &options,
    )
    .unwrap()
}

#[test]
fn class_table() {
    assert_eq!(BrownDwarfClass::from_roll(2).unwrap(), BrownDwarfClass::L);
    assert_eq!(BrownDwarfClass::from_roll(5).unwrap(), BrownDwarfClass::L);
    assert_eq!(BrownDwarfClass::from_roll(6).unwrap(), BrownDwarfClass::T);
    assert_eq!(BrownDwarfClass::from_roll(10).unwrap(), BrownDwarfClass::T);
    assert_eq!(BrownDwarfClass::from_roll(11).unwrap(), BrownDwarfClass::Y);
    assert_eq!(BrownDwarfClass::from_roll(12).unwrap(), BrownDwarfClass::Y);
    assert!(BrownDwarfClass::from_roll(0).is_err());
}

#[test]
fn class_bands_are_ordered() {
    let classes = [BrownDwarfClass::L, BrownDwarfClass::T, BrownDwarfClass::Y];
    for pair in classes.windows(2) {
        assert_eq!(pair[0].mass_range().0, pair[1].mass_range().1);
        assert_eq!(pair[0].temperature_range().0, pair[1].temperature_range().1);
    }
    assert_eq!(BrownDwarfClass::T.to_string(), "T");
}

#[test]
fn scripted_t_dwarf_around_the_sun() {
    let sun = primary(StellarClass::G, 5);
    let mut dice = ScriptedDice::new([
        3, 4, // class 7: T
        3, 3, 4, // separation 10: 1-10 AU for a G primary
    ])
    .with_units([0.5, 0.5]);

    let dwarf = generate_brown_dwarf(
        &mut dice,
        &AtomicNameSequence::new(),
        &sun,
        &BrownDwarfOptions::default(),
    )
    .unwrap();

    assert_eq!(dwarf.identity.name, "Brown Dwarf 0001");
    assert_eq!(dwarf.spectral_class, BrownDwarfClass::T);
    assert_relative_eq!(dwarf.mass, 45.0);
    assert_relative_eq!(dwarf.temperature, 1000.0);
    assert_relative_eq!(dwarf.orbital_distance, 10_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(dwarf.orbit.zone, OrbitalZone::Outer);
    assert!(!dwarf.orbit.disrupts_habitable_zone);

    let stages: Vec<&str> = dwarf
        .provenance
        .records()
        .iter()
        .map(|r| r.stage.as_str())
        .collect();
    assert_eq!(stages, ["class", "band", "orbit", "orbitPosition"]);
}

#[test]
fn fixed_class_close_orbit_disrupts() {
    let sun = primary(StellarClass::G, 5);
    let mut dice = ScriptedDice::new([1, 1, 1]).with_units([0.0, 0.5]);
    let options = BrownDwarfOptions {
        spectral_class: Some(BrownDwarfClass::Y),
        ..BrownDwarfOptions::default()
    };

    let dwarf = generate_brown_dwarf(&mut dice, &AtomicNameSequence::new(), &sun, &options)
        .unwrap();

    assert_eq!(dwarf.spectral_class, BrownDwarfClass::Y);
    assert_relative_eq!(dwarf.mass, 10.0);
    assert_relative_eq!(dwarf.temperature, 250.0);
    assert_relative_eq!(dwarf.orbital_distance, 0.1_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(dwarf.orbit.zone, OrbitalZone::Infernal);
    assert!(dwarf.orbit.disrupts_habitable_zone);
    assert!(dwarf.provenance.find("class").is_none());
}

#[test]
fn heavier_dwarfs_are_hotter_within_a_class() {
    let star = primary(StellarClass::M, 2);
    let mut rng = ChaChaRng::seed_from_u64(17);
    let names = AtomicNameSequence::new();
    let options = BrownDwarfOptions {
        spectral_class: Some(BrownDwarfClass::L),
        ..BrownDwarfOptions::default()
    };

    let mut dwarfs: Vec<_> = (0..50)
        .map(|_| generate_brown_dwarf(&mut rng, &names, &star, &options).unwrap())
        .collect();
    dwarfs.sort_by(|a, b| a.mass.total_cmp(&b.mass));

    assert!(dwarfs.windows(2).all(|w| w[0].temperature <= w[1].temperature));
    for dwarf in &dwarfs {
        assert!((60.0..=80.0).contains(&dwarf.mass));
        // K/M separation buckets span 0.05-500 AU
        assert!((0.05 * (1.0 - 1e-9)..=500.0 * (1.0 + 1e-9)).contains(&dwarf.orbital_distance));
    }
}
