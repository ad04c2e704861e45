use approx::assert_relative_eq;
use proptest::prelude::*;

use dice::{Advantage, Provenance, RollValue, ScriptedDice};
use stellar::{OrbitalZone, StellarZones};

use crate::error::SystemError;
use crate::placement::{
    BEYOND_SPAN, INFERNAL_FLOOR, log_uniform, pick_zone, place_in_zone, zone_from_roll, zone_span,
};

fn sun() -> StellarZones {
    StellarZones::from_luminosity(1.0).unwrap()
}

#[test]
fn zone_table_covers_two_to_twelve() {
    let expected = [
        (2, OrbitalZone::Infernal),
        (3, OrbitalZone::Infernal),
        (4, OrbitalZone::Hot),
        (5, OrbitalZone::Hot),
        (6, OrbitalZone::ConservativeHabitable),
        (7, OrbitalZone::ConservativeHabitable),
        (8, OrbitalZone::Cold),
        (9, OrbitalZone::Cold),
        (10, OrbitalZone::Outer),
        (11, OrbitalZone::Outer),
        (12, OrbitalZone::Beyond),
    ];
    for (roll, zone) in expected {
        assert_eq!(zone_from_roll(roll).unwrap(), zone, "roll {roll}");
    }
    assert!(matches!(
        zone_from_roll(13),
        Err(SystemError::RollOutOfRange { roll: 13, .. })
    ));
}

#[test]
fn spans_follow_the_zone_bands() {
    let zones = sun();

    let (min, max) = zone_span(&zones, OrbitalZone::ConservativeHabitable);
    assert_relative_eq!(min, 0.95);
    assert_relative_eq!(max, 1.37);

    let (min, max) = zone_span(&zones, OrbitalZone::Infernal);
    assert_relative_eq!(min, 0.475 * INFERNAL_FLOOR);
    assert_relative_eq!(max, 0.475);

    let (min, max) = zone_span(&zones, OrbitalZone::Beyond);
    assert_relative_eq!(min, 4.85);
    assert_relative_eq!(max, 4.85 * BEYOND_SPAN);
}

#[test]
fn log_uniform_hits_its_ends_and_geometric_mean() {
    assert_relative_eq!(log_uniform(1.0, 100.0, 0.0), 1.0);
    assert_relative_eq!(log_uniform(1.0, 100.0, 0.5), 10.0, epsilon = 1e-12);
    assert_relative_eq!(log_uniform(0.1, 10.0, 1.0), 10.0, epsilon = 1e-12);
}

#[test]
fn fixed_zone_skips_the_roll() {
    let mut dice = ScriptedDice::default();
    let mut provenance = Provenance::new();
    let zone = pick_zone(
        &mut dice,
        Some(OrbitalZone::Cold),
        Advantage::NONE,
        "zone",
        &mut provenance,
    )
    .unwrap();
    assert_eq!(zone, OrbitalZone::Cold);
    assert!(provenance.is_empty());
}

#[test]
fn rolled_zone_and_position_are_recorded() {
    let mut dice = ScriptedDice::new([6, 6]).with_units([0.5]);
    let mut provenance = Provenance::new();
    let zones = sun();

    let zone = pick_zone(&mut dice, None, Advantage::NONE, "zone", &mut provenance).unwrap();
    let distance = place_in_zone(&mut dice, &zones, zone, "position", &mut provenance);

    assert_eq!(zone, OrbitalZone::Beyond);
    assert_relative_eq!(distance, 4.85 * BEYOND_SPAN.sqrt(), epsilon = 1e-9);
    assert_eq!(provenance.find("zone").unwrap().value.total(), Some(12));
    assert_eq!(
        provenance.find("position").unwrap().value,
        RollValue::Uniform { value: 0.5 }
    );
}

proptest! {
    #[test]
    fn placement_stays_inside_the_zone(roll in 2u32..=12, u in 0.0f64..1.0, luminosity in 0.001f64..10_000.0) {
        let zones = StellarZones::from_luminosity(luminosity).unwrap();
        let zone = zone_from_roll(roll).unwrap();
        let (min, max) = zone_span(&zones, zone);
        let distance = log_uniform(min, max, u);

        prop_assert!(min > 0.0);
        prop_assert!(distance >= min * (1.0 - 1e-12));
        prop_assert!(distance <= max * (1.0 + 1e-12));
    }
}
