//! Star records and primary star generation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog::{EntityKind, GenerationMethod, Identity, NameSequence};
use dice::{Advantage, DiceSource, Provenance, roll_5d6};

use crate::class::{StellarClass, StellarGrade, StellarType};
use crate::error::{Result, StellarError};
use crate::table::{StellarProperty, StellarPropertySource};
use crate::zones::{CompanionOrbitAssessment, StellarZones};

/// Whether a star anchors its system or orbits the primary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "camelCase")]
pub enum StarRole {
    Primary,
    Companion {
        /// Separation from the primary in AU
        orbital_distance: f64,
        orbit: CompanionOrbitAssessment,
    },
}

/// A generated star, primary or companion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRecord {
    #[serde(flatten)]
    pub identity: Identity,
    pub stellar_class: StellarClass,
    pub stellar_grade: StellarGrade,
    pub properties: StellarProperty,
    pub role: StarRole,
    pub provenance: Provenance,
}

impl StarRecord {
    pub fn stellar_type(&self) -> StellarType {
        StellarType::new(self.stellar_class, self.stellar_grade)
    }

    pub fn is_primary(&self) -> bool {
        matches!(self.role, StarRole::Primary)
    }

    /// Separation from the primary, `None` for the primary itself
    pub fn orbital_distance(&self) -> Option<f64> {
        match &self.role {
            StarRole::Primary => None,
            StarRole::Companion {
                orbital_distance, ..
            } => Some(*orbital_distance),
        }
    }

    /// Orbital zones around this star
    pub fn zones(&self) -> Result<StellarZones> {
        StellarZones::from_luminosity(self.properties.luminosity)
    }
}

/// Options for [`generate_primary_star`]. Omitted fields are rolled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarOptions {
    #[serde(flatten)]
    pub edge: Advantage,
    pub stellar_class: Option<StellarClass>,
    pub stellar_grade: Option<u8>,
    pub name: Option<String>,
}

/// Primary star class from a 5D6 roll (5-30)
///
/// # Errors
/// Returns [`StellarError::RollOutOfRange`] outside 5-30.
pub fn primary_class_from_roll(roll: u32) -> Result<StellarClass> {
    match roll {
        5..=6 => Ok(StellarClass::O),
        7..=8 => Ok(StellarClass::B),
        9..=11 => Ok(StellarClass::A),
        12..=15 => Ok(StellarClass::F),
        16..=19 => Ok(StellarClass::G),
        20..=24 => Ok(StellarClass::K),
        25..=30 => Ok(StellarClass::M),
        _ => Err(StellarError::RollOutOfRange {
            table: "primary class",
            roll,
        }),
    }
}

/// Roll a grade 0-9 on a d10
pub(crate) fn roll_grade<D: DiceSource>(
    dice: &mut D,
    provenance: &mut Provenance,
    stage: &str,
) -> StellarGrade {
    let face = dice.roll_die(10);
    provenance.record_die(stage, 10, face);
    StellarGrade((face - 1) as u8)
}

/// Generate the primary star of a system.
///
/// Class comes from 5D6 and grade from a d10; either can be overridden. A
/// star with both overridden is tagged [`GenerationMethod::Custom`].
///
/// # Errors
/// - [`StellarError::GradeOutOfRange`] if the grade override exceeds 9
/// - [`StellarError::MissingProperty`] if the property source has no entry
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use catalog::AtomicNameSequence;
/// use stellar::{StarOptions, StellarTable, generate_primary_star};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let names = AtomicNameSequence::new();
/// let star = generate_primary_star(
///     &mut rng,
///     &names,
///     StellarTable::standard(),
///     &StarOptions::default(),
/// )
/// .unwrap();
/// assert!(star.is_primary());
/// ```
pub fn generate_primary_star<D, S>(
    dice: &mut D,
    names: &dyn NameSequence,
    source: &S,
    options: &StarOptions,
) -> Result<StarRecord>
where
    D: DiceSource,
    S: StellarPropertySource + ?Sized,
{
    let mut provenance = Provenance::new();

    let class = match options.stellar_class {
        Some(class) => class,
        None => {
            let roll = roll_5d6(dice, options.edge);
            provenance.record_pool("class", &roll);
            primary_class_from_roll(roll.total)?
        }
    };

    let grade = match options.stellar_grade {
        Some(grade) => StellarGrade::new(grade)?,
        None => roll_grade(dice, &mut provenance, "grade"),
    };

    let properties = source.require(class, grade)?;

    let method = if options.stellar_class.is_some() && options.stellar_grade.is_some() {
        GenerationMethod::Custom
    } else {
        GenerationMethod::Procedural
    };
    let name = options
        .name
        .clone()
        .unwrap_or_else(|| names.next_name(EntityKind::Star));

    debug!(
        class = %class,
        grade = grade.value(),
        luminosity = properties.luminosity,
        "Generated primary star"
    );

    Ok(StarRecord {
        identity: Identity::new(name, method),
        stellar_class: class,
        stellar_grade: grade,
        properties,
        role: StarRole::Primary,
        provenance,
    })
}
