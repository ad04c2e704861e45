use approx::assert_relative_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use catalog::AtomicNameSequence;
use dice::{Advantage, ScriptedDice};
use stellar::{OrbitalZone, StellarZones};

use crate::moon::{MoonComposition, MoonOrbit, MoonSize};
use crate::placement::zone_span;
use crate::planet::{PlanetOptions, PlanetType, generate_planet, moon_count};

fn sun() -> StellarZones {
    StellarZones::from_luminosity(1.0).unwrap()
}

#[test]
fn type_table() {
    let cases = [
        (2, PlanetType::Rocky),
        (5, PlanetType::Rocky),
        (6, PlanetType::SuperEarth),
        (7, PlanetType::SuperEarth),
        (8, PlanetType::IceGiant),
        (9, PlanetType::IceGiant),
        (10, PlanetType::GasGiant),
        (11, PlanetType::GasGiant),
        (12, PlanetType::SuperJovian),
    ];
    for (roll, planet_type) in cases {
        assert_eq!(PlanetType::from_roll(roll).unwrap(), planet_type, "roll {roll}");
    }
    assert!(PlanetType::from_roll(1).is_err());
}

#[test]
fn mass_ranges_are_contiguous() {
    let types = [
        PlanetType::Rocky,
        PlanetType::SuperEarth,
        PlanetType::IceGiant,
        PlanetType::GasGiant,
        PlanetType::SuperJovian,
    ];
    for pair in types.windows(2) {
        assert_eq!(pair[0].mass_range().1, pair[1].mass_range().0);
    }
    assert!(!PlanetType::SuperEarth.is_giant());
    assert!(PlanetType::IceGiant.is_giant());
}

#[test]
fn moon_count_is_floored_at_zero() {
    assert_eq!(moon_count(1, PlanetType::Rocky), 0);
    assert_eq!(moon_count(4, PlanetType::Rocky), 0);
    assert_eq!(moon_count(6, PlanetType::Rocky), 2);
    assert_eq!(moon_count(3, PlanetType::SuperEarth), 0);
    assert_eq!(moon_count(6, PlanetType::GasGiant), 6);
    assert_eq!(moon_count(6, PlanetType::SuperJovian), 7);
}

#[test]
fn scripted_gas_giant_with_two_moons() {
    let mut dice = ScriptedDice::new([
        5, 5, // type 10: gas giant
        4, 5, // zone 9: cold
        2, // 1D6 = 2, no modifier: two moons
        1, 1, 1, 1, 1, 1, 1, 1, // moon one
        6, 6, 3, 3, 3, 3, 3, 3, // moon two
    ])
    .with_units([0.5, 0.0]);
    let names = AtomicNameSequence::new();

    let planet = generate_planet(&mut dice, &names, &sun(), &PlanetOptions::default()).unwrap();

    assert_eq!(planet.identity.name, "Planet 0001");
    assert_eq!(planet.planet_type, PlanetType::GasGiant);
    assert_relative_eq!(planet.mass, (50.0_f64 * 1000.0).sqrt(), epsilon = 1e-9);
    assert_eq!(planet.zone, OrbitalZone::Cold);
    assert_relative_eq!(planet.orbital_distance, 1.37, epsilon = 1e-12);

    assert_eq!(planet.moons.len(), 2);
    let first = &planet.moons[0];
    assert_eq!(first.identity.name, "Moon 0002");
    assert_eq!(first.size, MoonSize::Moonlet);
    assert_eq!(first.composition, MoonComposition::Rocky);
    assert_eq!(first.orbit, MoonOrbit::Close);
    let second = &planet.moons[1];
    assert_eq!(second.identity.name, "Moon 0003");
    assert_eq!(second.size, MoonSize::Planetary);
    assert_eq!(second.composition, MoonComposition::Mixed);
    assert_eq!(second.orbit, MoonOrbit::Medium);

    let stages: Vec<&str> = planet
        .provenance
        .records()
        .iter()
        .map(|r| r.stage.as_str())
        .collect();
    assert_eq!(stages, ["type", "mass", "zone", "position", "moonCount"]);
    assert_eq!(dice.remaining(), 0);
}

#[test]
fn skip_moons_leaves_the_die_alone() {
    let mut dice = ScriptedDice::new([1, 1, 3, 4]);
    let options = PlanetOptions {
        skip_moons: true,
        ..PlanetOptions::default()
    };

    let planet = generate_planet(&mut dice, &AtomicNameSequence::new(), &sun(), &options).unwrap();

    assert_eq!(planet.planet_type, PlanetType::Rocky);
    assert_eq!(planet.zone, OrbitalZone::ConservativeHabitable);
    assert!(planet.moons.is_empty());
    assert!(planet.provenance.find("moonCount").is_none());
}

#[test]
fn fixed_type_and_zone() {
    let mut dice = ScriptedDice::new([4, 3, 3, 3, 3, 3, 3, 3, 3]).with_units([1.0 - f64::EPSILON, 0.5]);
    let options = PlanetOptions {
        planet_type: Some(PlanetType::SuperEarth),
        zone: Some(OrbitalZone::Beyond),
        ..PlanetOptions::default()
    };

    let planet = generate_planet(&mut dice, &AtomicNameSequence::new(), &sun(), &options).unwrap();

    assert_eq!(planet.planet_type, PlanetType::SuperEarth);
    assert!(planet.mass < 10.0 && planet.mass > 9.99);
    assert!(planet.orbital_distance > 4.85);
    // 4 - 3 for a super-Earth
    assert_eq!(planet.moons.len(), 1);
    assert_eq!(dice.remaining(), 0);
}

#[test]
fn seeded_planets_stay_in_range() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let names = AtomicNameSequence::new();
    let zones = StellarZones::from_luminosity(3.5).unwrap();
    let options = PlanetOptions {
        edge: Advantage::new(0, 1),
        ..PlanetOptions::default()
    };

    for _ in 0..200 {
        let planet = generate_planet(&mut rng, &names, &zones, &options).unwrap();
        let (min_mass, max_mass) = planet.planet_type.mass_range();
        let (min, max) = zone_span(&zones, planet.zone);
        assert!(planet.mass >= min_mass * (1.0 - 1e-9) && planet.mass <= max_mass * (1.0 + 1e-9));
        assert!(planet.orbital_distance >= min * (1.0 - 1e-9));
        assert!(planet.orbital_distance <= max * (1.0 + 1e-9));
        assert!(planet.moons.len() <= 7);
    }
}

proptest! {
    #[test]
    fn moon_count_never_exceeds_face_plus_one(face in 1u32..=6, roll in 2u32..=12) {
        let planet_type = PlanetType::from_roll(roll).unwrap();
        let count = moon_count(face, planet_type);
        prop_assert!(count <= face as usize + 1);
    }
}
