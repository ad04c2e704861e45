//! Starport classification and base presence.
//!
//! A world's port value score (PVS) places its starport in one of six
//! classes. Each class carries a fixed capability list and decides which
//! bases may be checked for.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use dice::{Advantage, DiceSource, Provenance, roll_2d6};

use crate::error::{Result, WorldError};
use crate::social::score_quarter;
use crate::world::WorldRecord;

/// Starport quality, worst first
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StarportClass {
    X,
    E,
    D,
    C,
    B,
    A,
}

impl StarportClass {
    /// Classify a port value score.
    ///
    /// | PVS     | Class |
    /// |---------|-------|
    /// | < 0     | X     |
    /// | 0-3     | E     |
    /// | 4-7     | D     |
    /// | 8-11    | C     |
    /// | 12-15   | B     |
    /// | >= 16   | A     |
    pub fn from_pvs(pvs: i32) -> Self {
        match pvs {
            p if p < 0 => Self::X,
            0..=3 => Self::E,
            4..=7 => Self::D,
            8..=11 => Self::C,
            12..=15 => Self::B,
            _ => Self::A,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Routine",
            Self::D => "Poor",
            Self::E => "Frontier",
            Self::X => "None",
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        use Capability::*;
        match self {
            Self::A => &[RefinedFuel, StarshipConstruction, FullRepair, CommercialHub],
            Self::B => &[RefinedFuel, SpacecraftConstruction, FullRepair],
            Self::C => &[UnrefinedFuel, LimitedRepair],
            Self::D => &[UnrefinedFuel, LandingField],
            Self::E => &[LandingBeacon],
            Self::X => &[],
        }
    }

    /// 2D6 target for a base, or `None` if this class cannot host it
    pub fn base_target(&self, base: BaseType) -> Option<u32> {
        match (base, self) {
            (BaseType::Naval, Self::A) => Some(8),
            (BaseType::Naval, Self::B) => Some(10),
            (BaseType::Scout, Self::A) => Some(7),
            (BaseType::Scout, Self::B) => Some(8),
            (BaseType::Scout, Self::C) => Some(9),
            (BaseType::Scout, Self::D) => Some(10),
            (BaseType::Pirate, Self::C | Self::D | Self::E) => Some(12),
            _ => None,
        }
    }
}

impl fmt::Display for StarportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::X => "X",
        };
        write!(f, "{letter}")
    }
}

/// Services a starport offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    RefinedFuel,
    UnrefinedFuel,
    StarshipConstruction,
    SpacecraftConstruction,
    FullRepair,
    LimitedRepair,
    CommercialHub,
    LandingField,
    LandingBeacon,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RefinedFuel => "Refined Fuel",
            Self::UnrefinedFuel => "Unrefined Fuel",
            Self::StarshipConstruction => "Starship Construction",
            Self::SpacecraftConstruction => "Spacecraft Construction",
            Self::FullRepair => "Full Repair",
            Self::LimitedRepair => "Limited Repair",
            Self::CommercialHub => "Commercial Hub",
            Self::LandingField => "Landing Field",
            Self::LandingBeacon => "Landing Beacon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaseType {
    Naval,
    Scout,
    Pirate,
}

impl BaseType {
    pub const ALL: [BaseType; 3] = [BaseType::Naval, BaseType::Scout, BaseType::Pirate];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Naval => "Naval",
            Self::Scout => "Scout",
            Self::Pirate => "Pirate",
        }
    }

    fn stage(&self) -> &'static str {
        match self {
            Self::Naval => "base.naval",
            Self::Scout => "base.scout",
            Self::Pirate => "base.pirate",
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outcome of one base check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePresence {
    #[serde(rename = "type")]
    pub base_type: BaseType,
    pub present: bool,
    /// 2D6 total that decided presence
    pub roll: u32,
}

/// `floor(score/4) + (TL - 7) + wealth + developmentModifier`
///
/// # Example
/// ```
/// use worlds::{StarportClass, port_value_score};
///
/// let pvs = port_value_score(8.0, 11, 2, 1);
/// assert_eq!(pvs, 9);
/// assert_eq!(StarportClass::from_pvs(pvs), StarportClass::C);
/// ```
pub fn port_value_score(
    habitability_score: f64,
    tech_level: u8,
    wealth: i32,
    development_modifier: i32,
) -> i32 {
    score_quarter(habitability_score) + (i32::from(tech_level) - 7) + wealth + development_modifier
}

/// Starport attributes carried on a world record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortProfile {
    pub port_value_score: i32,
    pub starport_class: StarportClass,
    pub capabilities: Vec<Capability>,
}

impl PortProfile {
    pub fn from_pvs(port_value_score: i32) -> Self {
        let starport_class = StarportClass::from_pvs(port_value_score);
        Self {
            port_value_score,
            starport_class,
            capabilities: starport_class.capabilities().to_vec(),
        }
    }
}

/// A starport and the bases around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarportRecord {
    pub world_id: Uuid,
    pub starport_class: StarportClass,
    pub port_value_score: i32,
    pub capabilities: Vec<Capability>,
    /// Only bases the class can host appear here
    pub bases: Vec<BasePresence>,
    pub provenance: Provenance,
}

impl StarportRecord {
    pub fn base(&self, base_type: BaseType) -> Option<&BasePresence> {
        self.bases.iter().find(|b| b.base_type == base_type)
    }

    pub fn has_base(&self, base_type: BaseType) -> bool {
        self.base(base_type).is_some_and(|b| b.present)
    }
}

/// Options for [`generate_starport`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarportOptions {
    #[serde(flatten)]
    pub edge: Advantage,
    /// Use this class instead of the one the world's PVS gives
    pub starport_class: Option<StarportClass>,
}

fn check_base<D: DiceSource>(
    dice: &mut D,
    class: StarportClass,
    base_type: BaseType,
    edge: Advantage,
    provenance: &mut Provenance,
) -> Option<BasePresence> {
    let target = class.base_target(base_type)?;
    let roll = roll_2d6(dice, edge);
    provenance.record_pool(base_type.stage(), &roll);
    Some(BasePresence {
        base_type,
        present: roll.total >= target,
        roll: roll.total,
    })
}

/// Build the starport record for a world and roll its base checks.
///
/// Naval bases need class A or B, scout bases A through D, and pirate bases
/// C through E (and then only on a 12). Ineligible bases are left out of the
/// record entirely.
pub fn generate_starport<D: DiceSource>(
    dice: &mut D,
    world: &WorldRecord,
    options: &StarportOptions,
) -> Result<StarportRecord> {
    let class = options
        .starport_class
        .unwrap_or(world.starport.starport_class);
    let mut provenance = Provenance::new();

    let bases: Vec<BasePresence> = BaseType::ALL
        .iter()
        .filter_map(|&base| check_base(dice, class, base, options.edge, &mut provenance))
        .collect();

    debug!(
        world = %world.identity.name,
        class = %class,
        pvs = world.starport.port_value_score,
        bases = bases.iter().filter(|b| b.present).count(),
        "Generated starport"
    );

    Ok(StarportRecord {
        world_id: world.identity.id,
        starport_class: class,
        port_value_score: world.starport.port_value_score,
        capabilities: class.capabilities().to_vec(),
        bases,
        provenance,
    })
}

/// Repeat one base check, leaving every other base as it was.
///
/// # Errors
/// [`WorldError::BaseNotEligible`] when the starport class cannot host the
/// base.
pub fn reroll_base<D: DiceSource>(
    dice: &mut D,
    record: &StarportRecord,
    base_type: BaseType,
    edge: Advantage,
) -> Result<StarportRecord> {
    let class = record.starport_class;
    let mut provenance = record.provenance.without_stage(base_type.stage());
    let presence = check_base(dice, class, base_type, edge, &mut provenance)
        .ok_or(WorldError::BaseNotEligible {
            base: base_type,
            class,
        })?;

    let mut next = record.clone();
    match next.bases.iter_mut().find(|b| b.base_type == base_type) {
        Some(existing) => *existing = presence,
        None => next.bases.push(presence),
    }
    next.provenance = provenance;
    Ok(next)
}
