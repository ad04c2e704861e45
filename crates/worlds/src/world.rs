//! The world record and the generation pipeline that fills it.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

use catalog::{EntityKind, GenerationMethod, Identity, NameSequence};
use dice::{Advantage, DiceSource, Provenance, roll_2d6};

use crate::culture::{CultureOptions, CultureTraits, roll_traits};
use crate::error::{Result, WorldError};
use crate::habitability::{Habitability, roll_factors};
use crate::physical::{WorldBody, WorldType, roll_body};
use crate::social::{DevelopmentLevel, SocialProfile, WEALTH_RANGE, estimate_population, roll_social};
use crate::starport::{PortProfile, port_value_score};
use crate::tables::{self, MAX_TECH_LEVEL};

/// A fully generated world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldRecord {
    #[serde(flatten)]
    pub identity: Identity,
    pub star_system_id: Option<Uuid>,
    pub body: WorldBody,
    pub habitability: Habitability,
    pub social: SocialProfile,
    pub tech_level: u8,
    pub population: u64,
    pub development: DevelopmentLevel,
    pub starport: PortProfile,
    pub culture: CultureTraits,
    pub provenance: Provenance,
}

impl WorldRecord {
    pub fn world_type(&self) -> WorldType {
        self.body.world_type()
    }

    pub fn habitability_score(&self) -> f64 {
        self.habitability.score
    }

    pub fn gravity(&self) -> f64 {
        self.body.gravity()
    }
}

/// Options for [`generate_world`]. Omitted fields are rolled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldOptions {
    #[serde(flatten)]
    pub edge: Advantage,
    pub name: Option<String>,
    pub star_system_id: Option<Uuid>,
    pub world_type: Option<WorldType>,
    pub tech_level: Option<u8>,
    pub wealth: Option<i32>,
    pub culture: CultureOptions,
}

impl WorldOptions {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.tech_level.filter(|&l| l > MAX_TECH_LEVEL) {
            return Err(WorldError::TechLevelOutOfRange(level));
        }
        if let Some(wealth) = self.wealth.filter(|w| !WEALTH_RANGE.contains(w)) {
            return Err(WorldError::WealthOutOfRange(wealth));
        }
        Ok(())
    }

    fn is_custom(&self) -> bool {
        self.world_type.is_some() && self.tech_level.is_some() && self.wealth.is_some()
    }
}

/// Run the full world pipeline.
///
/// Stages run in a fixed order and each consumes its own 2D6 roll:
/// world type, size, gravity (not for habitats), composition (dwarfs only),
/// the habitability factors, tech level and the social factors. Population,
/// development and the starport follow from those without further rolls,
/// and three d66 rolls finish with culture.
///
/// # Errors
/// - [`WorldError::TechLevelOutOfRange`] or [`WorldError::WealthOutOfRange`]
///   for a bad override
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use catalog::AtomicNameSequence;
/// use worlds::{WorldOptions, generate_world};
///
/// let mut rng = ChaChaRng::seed_from_u64(3);
/// let world = generate_world(&mut rng, &AtomicNameSequence::new(), &WorldOptions::default())
///     .unwrap();
/// assert_eq!(world.body.composition().is_some(), world.world_type() == worlds::WorldType::Dwarf);
/// ```
pub fn generate_world<D: DiceSource>(
    dice: &mut D,
    names: &dyn NameSequence,
    options: &WorldOptions,
) -> Result<WorldRecord> {
    options.validate()?;
    let edge = options.edge;
    let mut provenance = Provenance::new();

    let world_type = match options.world_type {
        Some(world_type) => world_type,
        None => {
            let roll = roll_2d6(dice, edge);
            provenance.record_pool("worldType", &roll);
            tables::world_type(roll.total)?
        }
    };
    trace!(world_type = %world_type, "World type");

    let body = roll_body(dice, world_type, edge, &mut provenance)?;
    let factors = roll_factors(dice, edge, &mut provenance)?;

    let tech_level = match options.tech_level {
        Some(level) => level,
        None => {
            let roll = roll_2d6(dice, edge);
            provenance.record_pool("techLevel", &roll);
            tables::tech_level(roll.total)?
        }
    };

    let habitability = Habitability::new(factors, &body, tech_level);
    trace!(score = habitability.score, "Habitability");

    let social = roll_social(dice, edge, options.wealth, &mut provenance)?;

    let population = estimate_population(&body, habitability.score, tech_level);
    let development = DevelopmentLevel::classify(tech_level, habitability.score);
    let pvs = port_value_score(
        habitability.score,
        tech_level,
        social.wealth,
        development.modifier(),
    );
    let starport = PortProfile::from_pvs(pvs);

    let mut culture_rolls = Provenance::new();
    let culture = roll_traits(dice, &options.culture, &mut culture_rolls);
    provenance.extend_prefixed("culture", &culture_rolls);

    let method = if options.is_custom() {
        GenerationMethod::Custom
    } else {
        GenerationMethod::Procedural
    };
    let name = options
        .name
        .clone()
        .unwrap_or_else(|| names.next_name(EntityKind::World));

    debug!(
        name = %name,
        world_type = %world_type,
        tech_level,
        score = habitability.score,
        pvs,
        class = %starport.starport_class,
        "Generated world"
    );

    Ok(WorldRecord {
        identity: Identity::new(name, method),
        star_system_id: options.star_system_id,
        body,
        habitability,
        social,
        tech_level,
        population,
        development,
        starport,
        culture,
        provenance,
    })
}
