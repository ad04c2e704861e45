//! End-to-end generation: stars, bodies and the worlds attached to them.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde_json::Value;

use catalog::{AtomicNameSequence, NameSequence};
use dice::Advantage;
use star_system::{GeneratorConfig, StarSystem, SystemOptions, generate_star_system};
use stellar::{
    CompanionOptions, StarOptions, StellarClass, StellarTable, generate_companion_stars,
    generate_primary_star, reroll_companion, validate_companions,
};
use worlds::{
    BaseType, CultureCategory, StarportOptions, WorldError, WorldOptions, WorldRecord,
    generate_starport, generate_world, reroll_base, reroll_culture_trait,
};

fn build_system(seed: u64) -> (StarSystem, Vec<WorldRecord>) {
    let config = GeneratorConfig::default();
    let names = config.name_sequence();
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let system = generate_star_system(
        &mut rng,
        &names,
        StellarTable::standard(),
        &config,
        &SystemOptions::default(),
    )
    .unwrap();

    let options = WorldOptions {
        star_system_id: Some(system.metadata.identity.id),
        ..WorldOptions::default()
    };
    let worlds = (0..3)
        .map(|_| generate_world(&mut rng, &names, &options).unwrap())
        .collect();

    (system, worlds)
}

/// Serialize and drop every `id`, which is random per run
fn without_ids(value: impl serde::Serialize) -> Value {
    fn strip(value: &mut Value) {
        match value {
            Value::Object(map) => {
                map.remove("id");
                map.remove("catalogName");
                map.values_mut().for_each(strip);
            }
            Value::Array(items) => items.iter_mut().for_each(strip),
            _ => {}
        }
    }
    let mut value = serde_json::to_value(value).unwrap();
    strip(&mut value);
    value
}

#[test]
fn full_flow_links_worlds_to_their_system() {
    let (system, worlds) = build_system(7);

    validate_companions(system.primary.stellar_type(), &system.companions).unwrap();
    for world in &worlds {
        assert_eq!(world.star_system_id, Some(system.metadata.identity.id));
        assert!(world.tech_level >= 5 && world.tech_level <= 12);
        assert!(world.provenance.find("culture.social").is_some());
    }

    let mut rng = ChaChaRng::seed_from_u64(70);
    let port = generate_starport(&mut rng, &worlds[0], &StarportOptions::default()).unwrap();
    assert_eq!(port.world_id, worlds[0].identity.id);
    assert_eq!(port.starport_class, worlds[0].starport.starport_class);
}

#[test]
fn equal_seeds_give_equal_systems() {
    let (first, first_worlds) = build_system(1234);
    let (second, second_worlds) = build_system(1234);

    assert_eq!(without_ids(&first), without_ids(&second));
    assert_eq!(without_ids(&first_worlds), without_ids(&second_worlds));
    assert_ne!(first.metadata.identity.id, second.metadata.identity.id);
}

#[test]
fn different_seeds_diverge() {
    let systems: Vec<Value> = (0..10).map(|seed| without_ids(build_system(seed).0)).collect();
    let distinct = systems
        .iter()
        .enumerate()
        .filter(|(i, s)| !systems[..*i].contains(s))
        .count();
    assert!(distinct > 1);
}

#[test]
fn rerolls_leave_their_inputs_untouched() {
    let names = AtomicNameSequence::new();
    let mut rng = ChaChaRng::seed_from_u64(3);

    // Culture
    let world = generate_world(&mut rng, &names, &WorldOptions::default()).unwrap();
    let record = worlds::CultureRecord {
        world_id: Some(world.identity.id),
        traits: world.culture.clone(),
        provenance: dice::Provenance::new(),
    };
    let rerolled = reroll_culture_trait(&mut rng, &record, CultureCategory::Economic);
    assert_eq!(rerolled.traits.social, record.traits.social);
    assert_eq!(rerolled.traits.technological, record.traits.technological);
    assert_eq!(record.traits, world.culture);

    // Bases
    let port = generate_starport(
        &mut rng,
        &world,
        &StarportOptions {
            starport_class: Some(worlds::StarportClass::B),
            ..StarportOptions::default()
        },
    )
    .unwrap();
    let before = port.clone();
    let next = reroll_base(&mut rng, &port, BaseType::Scout, Advantage::NONE).unwrap();
    assert_eq!(port, before);
    assert_eq!(next.base(BaseType::Naval), port.base(BaseType::Naval));
    assert!(matches!(
        reroll_base(&mut rng, &port, BaseType::Pirate, Advantage::NONE),
        Err(WorldError::BaseNotEligible { .. })
    ));

    // Companions: an O0 primary finds a companion on 4+
    let primary = generate_primary_star(
        &mut rng,
        &names,
        StellarTable::standard(),
        &StarOptions {
            stellar_class: Some(StellarClass::O),
            stellar_grade: Some(0),
            ..StarOptions::default()
        },
    )
    .unwrap();
    let result = loop {
        let result = generate_companion_stars(
            &mut rng,
            &names,
            StellarTable::standard(),
            primary.stellar_type(),
            &CompanionOptions::default(),
        )
        .unwrap();
        if !result.companions.is_empty() {
            break result;
        }
    };
    let before = result.clone();
    let next = reroll_companion(
        &mut rng,
        StellarTable::standard(),
        primary.stellar_type(),
        &result,
        0,
        Advantage::NONE,
    )
    .unwrap();
    assert_eq!(result, before);
    assert_eq!(next.companions[0].identity.name, result.companions[0].identity.name);
    validate_companions(primary.stellar_type(), &next.companions).unwrap();
}

#[test]
fn prefixed_names_flow_through_every_entity() {
    let config = GeneratorConfig::from_toml_str("name_prefix = \"Rimward\"").unwrap();
    let names = config.name_sequence();
    let mut rng = ChaChaRng::seed_from_u64(19);

    let system = generate_star_system(
        &mut rng,
        &names,
        StellarTable::standard(),
        &config,
        &SystemOptions::default(),
    )
    .unwrap();

    assert!(system.metadata.display_name().starts_with("Rimward System"));
    assert!(system.primary.identity.name.starts_with("Rimward Star"));
    assert!(names.next_name(catalog::EntityKind::World).starts_with("Rimward World"));
}
