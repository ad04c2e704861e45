use std::collections::HashSet;

use dice::D66Code;

use crate::culture::CultureCategory;
use crate::error::WorldError;
use crate::physical::{Composition, HabitatScale, SizeClass, WorldType};
use crate::tables::{self, ECONOMIC_FOCUS, SOCIAL_VALUES, TECHNOLOGICAL_ATTITUDE};

#[test]
fn every_2d6_table_covers_two_to_twelve() {
    for roll in 2..=12 {
        assert!(tables::world_type(roll).is_ok(), "world type {roll}");
        assert!(tables::dwarf_size(roll).is_ok(), "dwarf size {roll}");
        assert!(tables::terrestrial_size(roll).is_ok(), "terrestrial size {roll}");
        assert!(tables::habitat_scale(roll).is_ok(), "habitat {roll}");
        assert!(tables::dwarf_gravity(roll).is_ok(), "dwarf gravity {roll}");
        assert!(tables::terrestrial_gravity(roll).is_ok(), "gravity {roll}");
        assert!(tables::composition(roll).is_ok(), "composition {roll}");
        assert!(tables::atmosphere(roll).is_ok(), "atmosphere {roll}");
        assert!(tables::temperature(roll).is_ok(), "temperature {roll}");
        assert!(tables::hazard_kind(roll).is_ok(), "hazard {roll}");
        assert!(tables::hazard_intensity(roll).is_ok(), "intensity {roll}");
        assert!(tables::biochemistry(roll).is_ok(), "biochemistry {roll}");
        assert!(tables::tech_level(roll).is_ok(), "tech level {roll}");
        assert!(tables::wealth(roll).is_ok(), "wealth {roll}");
        assert!(tables::power_structure(roll).is_ok(), "power {roll}");
        assert!(tables::governance(roll).is_ok(), "governance {roll}");
        assert!(tables::source_of_power(roll).is_ok(), "source {roll}");
    }
}

#[test]
fn rolls_outside_the_domain_are_rejected() {
    for roll in [0, 1, 13, 18] {
        assert!(matches!(
            tables::world_type(roll),
            Err(WorldError::RollOutOfRange { roll: r, .. }) if r == roll
        ));
        assert!(tables::tech_level(roll).is_err());
        assert!(tables::wealth(roll).is_err());
        assert!(tables::hazard_kind(roll).is_err());
    }
}

#[test]
fn world_type_bands() {
    assert_eq!(tables::world_type(5).unwrap(), WorldType::Dwarf);
    assert_eq!(tables::world_type(6).unwrap(), WorldType::Terrestrial);
    assert_eq!(tables::world_type(10).unwrap(), WorldType::Terrestrial);
    assert_eq!(tables::world_type(11).unwrap(), WorldType::Habitat);
}

#[test]
fn tech_level_table() {
    let levels: Vec<u8> = (2..=12).map(|r| tables::tech_level(r).unwrap()).collect();
    assert_eq!(levels, vec![5, 6, 6, 7, 7, 8, 9, 9, 10, 11, 12]);
}

#[test]
fn wealth_spans_minus_two_to_five() {
    let wealth: Vec<i32> = (2..=12).map(|r| tables::wealth(r).unwrap()).collect();
    assert_eq!(wealth.first(), Some(&-2));
    assert_eq!(wealth.last(), Some(&5));
    assert!(wealth.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn sizes_grow_with_the_roll() {
    let dwarf: Vec<f64> = (2..=12).map(|r| tables::dwarf_size(r).unwrap().1).collect();
    let terrestrial: Vec<f64> = (2..=12)
        .map(|r| tables::terrestrial_size(r).unwrap().1)
        .collect();

    assert!(dwarf.windows(2).all(|w| w[0] <= w[1]));
    assert!(terrestrial.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(tables::terrestrial_size(7).unwrap(), (SizeClass::Standard, 1.0));
    assert_eq!(tables::habitat_scale(12).unwrap(), HabitatScale::Megastructure);
    assert_eq!(tables::composition(12).unwrap(), Composition::Other);
}

#[test]
fn culture_tables_have_unique_entries() {
    for table in [&SOCIAL_VALUES, &ECONOMIC_FOCUS, &TECHNOLOGICAL_ATTITUDE] {
        let unique: HashSet<&str> = table.iter().copied().collect();
        assert_eq!(unique.len(), 36);
    }
}

#[test]
fn culture_entry_follows_d66_order() {
    let first = D66Code::new(1, 1).unwrap();
    let last = D66Code::new(6, 6).unwrap();

    assert_eq!(tables::culture_entry(CultureCategory::Social, first), "Honour-bound");
    assert_eq!(tables::culture_entry(CultureCategory::Economic, first), "Agriculture");
    assert_eq!(
        tables::culture_entry(CultureCategory::Technological, last),
        "Innovation Guilds"
    );
}
