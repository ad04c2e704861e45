//! Habitability factors and the aggregate habitability score.
//!
//! Four independent rolls (atmosphere, temperature, hazard, biochemistry)
//! each contribute a signed modifier. The score adds a mass-extremity penalty
//! and a tech-level bonus on top. It is deliberately left unbounded.

use std::fmt;

use serde::{Deserialize, Serialize};

use dice::{Advantage, DiceSource, Provenance, roll_2d6};

use crate::error::Result;
use crate::physical::WorldBody;
use crate::tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Atmosphere {
    Vacuum,
    Trace,
    Thin,
    Standard,
    Dense,
    Crushing,
}

impl Atmosphere {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vacuum => "Vacuum",
            Self::Trace => "Trace",
            Self::Thin => "Thin",
            Self::Standard => "Standard",
            Self::Dense => "Dense",
            Self::Crushing => "Crushing",
        }
    }

    pub fn modifier(&self) -> i32 {
        match self {
            Self::Vacuum | Self::Crushing => -3,
            Self::Trace => -2,
            Self::Thin => -1,
            Self::Standard => 2,
            Self::Dense => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Temperature {
    Frozen,
    Cold,
    Temperate,
    Hot,
    Scorching,
}

impl Temperature {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Frozen => "Frozen",
            Self::Cold => "Cold",
            Self::Temperate => "Temperate",
            Self::Hot => "Hot",
            Self::Scorching => "Scorching",
        }
    }

    pub fn modifier(&self) -> i32 {
        match self {
            Self::Frozen | Self::Scorching => -3,
            Self::Cold | Self::Hot => -1,
            Self::Temperate => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HazardKind {
    Radiation,
    Toxic,
    Seismic,
    Storms,
    Biological,
    Exotic,
}

impl HazardKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Radiation => "Radiation",
            Self::Toxic => "Toxic",
            Self::Seismic => "Seismic",
            Self::Storms => "Storms",
            Self::Biological => "Biological",
            Self::Exotic => "Exotic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HazardIntensity {
    Mild,
    Moderate,
    Severe,
    Extreme,
}

impl HazardIntensity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::Extreme => "Extreme",
        }
    }

    pub fn modifier(&self) -> i32 {
        match self {
            Self::Mild => -1,
            Self::Moderate => -2,
            Self::Severe => -3,
            Self::Extreme => -4,
        }
    }
}

/// Environmental hazard; intensity exists only when a hazard does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "hazard", rename_all = "camelCase")]
pub enum Hazard {
    None,
    Present {
        kind: HazardKind,
        intensity: HazardIntensity,
    },
}

impl Hazard {
    /// A hazard-free world earns +1
    pub fn modifier(&self) -> i32 {
        match self {
            Self::None => 1,
            Self::Present { intensity, .. } => intensity.modifier(),
        }
    }
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Present { kind, intensity } => {
                write!(f, "{} {}", intensity.name(), kind.name())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Biochemistry {
    Barren,
    Scarce,
    Moderate,
    Abundant,
    Rich,
}

impl Biochemistry {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Barren => "Barren",
            Self::Scarce => "Scarce",
            Self::Moderate => "Moderate",
            Self::Abundant => "Abundant",
            Self::Rich => "Rich",
        }
    }

    pub fn modifier(&self) -> i32 {
        match self {
            Self::Barren => -2,
            Self::Scarce => -1,
            Self::Moderate => 0,
            Self::Abundant => 1,
            Self::Rich => 2,
        }
    }
}

/// The four rolled factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitabilityFactors {
    pub atmosphere: Atmosphere,
    pub temperature: Temperature,
    pub hazard: Hazard,
    pub biochemistry: Biochemistry,
}

impl HabitabilityFactors {
    /// Sum of the rolled modifiers
    pub fn modifier_total(&self) -> i32 {
        self.atmosphere.modifier()
            + self.temperature.modifier()
            + self.hazard.modifier()
            + self.biochemistry.modifier()
    }
}

/// Factors plus every term of the aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habitability {
    #[serde(flatten)]
    pub factors: HabitabilityFactors,
    pub mass_penalty: i32,
    pub tech_bonus: f64,
    pub score: f64,
}

impl Habitability {
    pub fn new(factors: HabitabilityFactors, body: &WorldBody, tech_level: u8) -> Self {
        let mass_penalty = mass_extremity_penalty(body);
        let tech_bonus = tech_level_bonus(tech_level);
        Self {
            factors,
            mass_penalty,
            tech_bonus,
            score: habitability_score(&factors, mass_penalty, tech_level),
        }
    }
}

/// Penalty for worlds far from one Earth mass; habitats are exempt.
///
/// | Mass (M⊕)  | Penalty |
/// |------------|---------|
/// | < 0.1      | -2      |
/// | 0.1 - 0.5  | -1      |
/// | 0.5 - 2    | 0       |
/// | 2 - 5      | -1      |
/// | > 5        | -2      |
pub fn mass_extremity_penalty(body: &WorldBody) -> i32 {
    if let WorldBody::Habitat { .. } = body {
        return 0;
    }
    match body.mass() {
        m if m < 0.1 => -2,
        m if m < 0.5 => -1,
        m if m > 5.0 => -2,
        m if m > 2.0 => -1,
        _ => 0,
    }
}

/// Half a point per tech level above 7
pub fn tech_level_bonus(tech_level: u8) -> f64 {
    f64::from(tech_level.saturating_sub(7)) * 0.5
}

/// Unbounded sum of the factor modifiers, mass penalty and tech bonus
pub fn habitability_score(factors: &HabitabilityFactors, mass_penalty: i32, tech_level: u8) -> f64 {
    f64::from(factors.modifier_total() + mass_penalty) + tech_level_bonus(tech_level)
}

pub(crate) fn roll_factors<D: DiceSource>(
    dice: &mut D,
    edge: Advantage,
    provenance: &mut Provenance,
) -> Result<HabitabilityFactors> {
    let roll = roll_2d6(dice, edge);
    provenance.record_pool("atmosphere", &roll);
    let atmosphere = tables::atmosphere(roll.total)?;

    let roll = roll_2d6(dice, edge);
    provenance.record_pool("temperature", &roll);
    let temperature = tables::temperature(roll.total)?;

    let roll = roll_2d6(dice, edge);
    provenance.record_pool("hazard", &roll);
    let hazard = match tables::hazard_kind(roll.total)? {
        None => Hazard::None,
        Some(kind) => {
            let roll = roll_2d6(dice, edge);
            provenance.record_pool("hazardIntensity", &roll);
            Hazard::Present {
                kind,
                intensity: tables::hazard_intensity(roll.total)?,
            }
        }
    };

    let roll = roll_2d6(dice, edge);
    provenance.record_pool("biochemistry", &roll);
    let biochemistry = tables::biochemistry(roll.total)?;

    Ok(HabitabilityFactors {
        atmosphere,
        temperature,
        hazard,
        biochemistry,
    })
}
