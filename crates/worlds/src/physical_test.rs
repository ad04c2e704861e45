use dice::ScriptedDice;
use dice::{Advantage, Provenance};

use crate::physical::{
    ARTIFICIAL_GRAVITY, Composition, HabitatScale, PopulationRange, SizeClass, WorldBody,
    WorldType, roll_body,
};

#[test]
fn only_dwarfs_have_composition() {
    let dwarf = WorldBody::Dwarf {
        size: SizeClass::Small,
        mass: 0.005,
        gravity: 0.03,
        composition: Composition::Metallic,
    };
    let terrestrial = WorldBody::Terrestrial {
        size: SizeClass::Standard,
        mass: 1.0,
        gravity: 1.0,
    };

    assert_eq!(dwarf.composition(), Some(Composition::Metallic));
    assert_eq!(terrestrial.composition(), None);
    assert_eq!(dwarf.world_type(), WorldType::Dwarf);
    assert_eq!(terrestrial.size_name(), "Standard");
}

#[test]
fn habitats_always_have_one_g() {
    for scale in [
        HabitatScale::Outpost,
        HabitatScale::Station,
        HabitatScale::LargeStation,
        HabitatScale::OrbitalCity,
        HabitatScale::Megastructure,
    ] {
        let body = WorldBody::Habitat {
            scale,
            mass: scale.mass(),
        };
        assert_eq!(body.gravity(), ARTIFICIAL_GRAVITY);
        assert_eq!(body.world_type(), WorldType::Habitat);
    }
}

#[test]
fn population_range_midpoint() {
    let range = PopulationRange { min: 100, max: 1_000 };
    assert_eq!(range.midpoint(), 550);
    assert_eq!(range.label(), "100-1000");
    assert_eq!(HabitatScale::OrbitalCity.population_range().midpoint(), 550_000);
}

#[test]
fn dwarf_body_consumes_three_rolls() {
    let mut dice = ScriptedDice::new([1, 1, 5, 5, 1, 2]);
    let mut provenance = Provenance::new();

    let body = roll_body(&mut dice, WorldType::Dwarf, Advantage::NONE, &mut provenance).unwrap();

    assert_eq!(
        body,
        WorldBody::Dwarf {
            size: SizeClass::Tiny,
            mass: 0.001,
            gravity: 0.05,
            composition: Composition::Metallic,
        }
    );
    assert_eq!(provenance.len(), 3);
}

#[test]
fn habitat_body_consumes_one_roll() {
    let mut dice = ScriptedDice::new([1, 1]);
    let mut provenance = Provenance::new();

    let body = roll_body(&mut dice, WorldType::Habitat, Advantage::NONE, &mut provenance).unwrap();

    assert_eq!(body.size_name(), "Outpost");
    assert_eq!(provenance.len(), 1);
    assert_eq!(dice.remaining(), 0);
}
