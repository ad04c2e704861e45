//! Companion star generation.
//!
//! Each system gets up to three companions. A 2D6 roll against a target set
//! by the primary's class decides whether a companion exists; only a natural
//! 12 earns another check. Companions are always strictly dimmer than the
//! primary.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use catalog::{EntityKind, GenerationMethod, Identity, NameSequence};
use dice::{Advantage, DiceSource, Provenance, roll_2d6, roll_3d6};

use crate::class::{StellarClass, StellarGrade, StellarType};
use crate::error::{Result, StellarError};
use crate::star::{StarRecord, StarRole, roll_grade};
use crate::table::StellarPropertySource;
use crate::zones::{StellarZones, assess_companion_orbit};

/// Hard cap on companions per system
pub const MAX_COMPANIONS: usize = 3;

/// 2D6 target for a companion to exist; cooler primaries need more.
pub fn companion_target(primary: StellarClass) -> u32 {
    match primary {
        StellarClass::O => 4,
        StellarClass::B => 5,
        StellarClass::A => 6,
        StellarClass::F => 7,
        StellarClass::G => 8,
        StellarClass::K => 9,
        StellarClass::M => 10,
    }
}

/// Options for [`generate_companion_stars`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanionOptions {
    #[serde(flatten)]
    pub edge: Advantage,
    /// Lower cap on companions (never above [`MAX_COMPANIONS`]). `Some(0)`
    /// skips generation without rolling.
    pub max_companions: Option<usize>,
}

/// Companions produced for one primary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionGenerationResult {
    pub companions: Vec<StarRecord>,
    /// Number of 2D6 existence checks made
    pub total_rolls: u32,
    /// The companion cap was reached
    pub max_reached: bool,
}

// =============================================================================
// Orbital separation
// =============================================================================

/// AU ranges for the four 3D6 buckets, by primary class group
const HOT_BUCKETS: [(f64, f64); 4] = [(0.5, 5.0), (5.0, 50.0), (50.0, 500.0), (500.0, 5000.0)];
const MEDIUM_BUCKETS: [(f64, f64); 4] = [(0.1, 1.0), (1.0, 10.0), (10.0, 100.0), (100.0, 1000.0)];
const NARROW_BUCKETS: [(f64, f64); 4] = [(0.05, 0.5), (0.5, 5.0), (5.0, 50.0), (50.0, 500.0)];

fn separation_buckets(primary: StellarClass) -> &'static [(f64, f64); 4] {
    match primary {
        StellarClass::O | StellarClass::B | StellarClass::A => &HOT_BUCKETS,
        StellarClass::F | StellarClass::G => &MEDIUM_BUCKETS,
        StellarClass::K | StellarClass::M => &NARROW_BUCKETS,
    }
}

fn separation_bucket(roll: u32) -> Result<usize> {
    match roll {
        3..=6 => Ok(0),
        7..=10 => Ok(1),
        11..=14 => Ok(2),
        15..=18 => Ok(3),
        _ => Err(StellarError::RollOutOfRange {
            table: "companion separation",
            roll,
        }),
    }
}

/// Sample a companion's separation from its primary in AU.
///
/// 3D6 picks one of four AU ranges for the primary's class group; the
/// distance is then log-uniform inside that range, so every decade of
/// separation is equally likely.
pub fn sample_companion_distance<D: DiceSource>(
    dice: &mut D,
    primary: StellarClass,
    edge: Advantage,
    provenance: &mut Provenance,
) -> Result<f64> {
    let roll = roll_3d6(dice, edge);
    provenance.record_pool("orbit", &roll);

    let (min, max) = separation_buckets(primary)[separation_bucket(roll.total)?];
    let u = dice.unit();
    provenance.record_uniform("orbitPosition", u);

    let log_min = min.log10();
    let log_max = max.log10();
    Ok(10_f64.powf(log_min + u * (log_max - log_min)))
}

// =============================================================================
// Class and grade selection
// =============================================================================

/// Pick a class/grade strictly dimmer than `primary`.
///
/// The class is uniform over the primary's class and every cooler one. Sharing
/// the primary's class forces a dimmer grade; a grade-9 primary pushes the
/// companion to grade 0 of the next cooler class instead.
fn choose_companion_type<D: DiceSource>(
    dice: &mut D,
    primary: StellarType,
    provenance: &mut Provenance,
) -> Result<StellarType> {
    let candidates = primary.class.this_and_cooler();
    let face = dice.roll_die(candidates.len() as u32);
    provenance.record_die("class", candidates.len() as u32, face);
    let class = candidates[face as usize - 1];

    if class > primary.class {
        let grade = roll_grade(dice, provenance, "grade");
        return Ok(StellarType::new(class, grade));
    }

    let dimmer: Vec<StellarGrade> = primary.grade.dimmer().collect();
    if !dimmer.is_empty() {
        let face = dice.roll_die(dimmer.len() as u32);
        provenance.record_die("grade", dimmer.len() as u32, face);
        return Ok(StellarType::new(class, dimmer[face as usize - 1]));
    }

    match class.next_cooler() {
        Some(next) => Ok(StellarType::new(next, StellarGrade::MIN)),
        None => Err(StellarError::ConstraintExhausted {
            class: primary.class,
            grade: primary.grade.value(),
        }),
    }
}

/// Place and name a companion whose type is already chosen
#[allow(clippy::too_many_arguments)]
fn build_companion<D, S>(
    dice: &mut D,
    source: &S,
    primary: StellarType,
    companion: StellarType,
    primary_zones: &StellarZones,
    edge: Advantage,
    name: String,
    mut provenance: Provenance,
) -> Result<StarRecord>
where
    D: DiceSource,
    S: StellarPropertySource + ?Sized,
{
    let distance = sample_companion_distance(dice, primary.class, edge, &mut provenance)?;
    let properties = source.require(companion.class, companion.grade)?;
    let orbit = assess_companion_orbit(distance, primary_zones);

    debug!(
        primary = %primary,
        companion = %companion,
        distance_au = distance,
        zone = %orbit.zone,
        "Generated companion star"
    );

    Ok(StarRecord {
        identity: Identity::new(name, GenerationMethod::Procedural),
        stellar_class: companion.class,
        stellar_grade: companion.grade,
        properties,
        role: StarRole::Companion {
            orbital_distance: distance,
            orbit,
        },
        provenance,
    })
}

// =============================================================================
// Public entry points
// =============================================================================

/// Generate 0-3 companions for a primary.
///
/// Each iteration rolls 2D6 against [`companion_target`]. A miss ends
/// generation; a hit adds one companion, and only a natural 12 (with room
/// left under the cap) earns another iteration. If no dimmer star exists
/// (an `M9` primary) the attempt is abandoned, no name is taken, and the
/// companions made so far are returned.
///
/// A cap of zero returns at once with no rolls and `max_reached` set.
///
/// # Errors
/// [`StellarError::MissingProperty`] if the property source has no entry for
/// the primary or a chosen companion.
pub fn generate_companion_stars<D, S>(
    dice: &mut D,
    names: &dyn NameSequence,
    source: &S,
    primary: StellarType,
    options: &CompanionOptions,
) -> Result<CompanionGenerationResult>
where
    D: DiceSource,
    S: StellarPropertySource + ?Sized,
{
    let cap = options
        .max_companions
        .unwrap_or(MAX_COMPANIONS)
        .min(MAX_COMPANIONS);
    let primary_zones =
        StellarZones::from_luminosity(source.require(primary.class, primary.grade)?.luminosity)?;
    let target = companion_target(primary.class);

    let mut companions = Vec::new();
    let mut total_rolls = 0;

    while companions.len() < cap {
        let roll = roll_2d6(dice, options.edge);
        total_rolls += 1;

        if roll.total < target {
            debug!(roll = roll.total, target, "No further companion");
            break;
        }

        let mut provenance = Provenance::new();
        provenance.record_pool("existence", &roll);

        let companion = match choose_companion_type(dice, primary, &mut provenance) {
            Ok(companion) => companion,
            Err(err @ StellarError::ConstraintExhausted { .. }) => {
                warn!(primary = %primary, error = %err, "Abandoned companion attempt");
                break;
            }
            Err(err) => return Err(err),
        };
        companions.push(build_companion(
            dice,
            source,
            primary,
            companion,
            &primary_zones,
            options.edge,
            names.next_name(EntityKind::Star),
            provenance,
        )?);

        if !roll.is_maximum(6) {
            break;
        }
    }

    Ok(CompanionGenerationResult {
        max_reached: companions.len() >= cap,
        companions,
        total_rolls,
    })
}

/// Replace one companion with a freshly rolled one.
///
/// The existence roll is not repeated; the replacement keeps the old name.
/// Returns a new result and leaves `result` untouched.
///
/// # Errors
/// - [`StellarError::CompanionIndexOutOfRange`] for a bad index
/// - [`StellarError::ConstraintExhausted`] if no dimmer star exists
pub fn reroll_companion<D, S>(
    dice: &mut D,
    source: &S,
    primary: StellarType,
    result: &CompanionGenerationResult,
    index: usize,
    edge: Advantage,
) -> Result<CompanionGenerationResult>
where
    D: DiceSource,
    S: StellarPropertySource + ?Sized,
{
    let old = result
        .companions
        .get(index)
        .ok_or(StellarError::CompanionIndexOutOfRange {
            index,
            count: result.companions.len(),
        })?;

    let primary_zones =
        StellarZones::from_luminosity(source.require(primary.class, primary.grade)?.luminosity)?;
    let mut provenance = ["class", "grade", "orbit", "orbitPosition"]
        .iter()
        .fold(old.provenance.clone(), |p, stage| p.without_stage(stage));
    let companion = choose_companion_type(dice, primary, &mut provenance)?;

    let replacement = build_companion(
        dice,
        source,
        primary,
        companion,
        &primary_zones,
        edge,
        old.identity.name.clone(),
        provenance,
    )?;

    let mut next = result.clone();
    next.companions[index] = replacement;
    Ok(next)
}

/// Whether `companion` is strictly dimmer and cooler than `primary`
pub fn is_companion_smaller_than_primary(primary: StellarType, companion: StellarType) -> bool {
    companion > primary
}

/// Check every companion against its primary.
///
/// # Errors
/// [`StellarError::CompanionNotSmaller`] for the first offending companion.
pub fn validate_companions(primary: StellarType, companions: &[StarRecord]) -> Result<()> {
    for companion in companions {
        let kind = companion.stellar_type();
        if !is_companion_smaller_than_primary(primary, kind) {
            return Err(StellarError::CompanionNotSmaller {
                primary: primary.to_string(),
                companion: kind.to_string(),
            });
        }
    }
    Ok(())
}
