//! Social factors, population and development.

use std::fmt;

use serde::{Deserialize, Serialize};

use dice::{Advantage, DiceSource, Provenance, roll_2d6};

use crate::error::Result;
use crate::physical::WorldBody;
use crate::tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerStructure {
    Anarchic,
    Confederation,
    Federation,
    Unitary,
    Hegemony,
}

impl PowerStructure {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Anarchic => "Anarchic",
            Self::Confederation => "Confederation",
            Self::Federation => "Federation",
            Self::Unitary => "Unitary State",
            Self::Hegemony => "Hegemony",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Governance {
    Failed,
    Corrupt,
    Inefficient,
    Functional,
    Effective,
    Exemplary,
}

impl Governance {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Failed => "Failed",
            Self::Corrupt => "Corrupt",
            Self::Inefficient => "Inefficient",
            Self::Functional => "Functional",
            Self::Effective => "Effective",
            Self::Exemplary => "Exemplary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceOfPower {
    Military,
    Religious,
    Democratic,
    Corporate,
    Aristocratic,
    Technocratic,
}

impl SourceOfPower {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Military => "Military",
            Self::Religious => "Religious",
            Self::Democratic => "Democratic",
            Self::Corporate => "Corporate",
            Self::Aristocratic => "Aristocratic",
            Self::Technocratic => "Technocratic",
        }
    }
}

/// Lowest and highest wealth values
pub const WEALTH_RANGE: std::ops::RangeInclusive<i32> = -2..=5;

/// Name of a wealth level
pub fn wealth_name(wealth: i32) -> &'static str {
    match wealth {
        w if w <= -2 => "Destitute",
        -1 => "Poor",
        0 => "Struggling",
        1 => "Average",
        2 => "Comfortable",
        3 => "Prosperous",
        4 => "Affluent",
        _ => "Opulent",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    /// -2 (destitute) to +5 (opulent)
    pub wealth: i32,
    pub power_structure: PowerStructure,
    pub governance: Governance,
    pub source_of_power: SourceOfPower,
}

/// Discrete development classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentLevel {
    Underdeveloped,
    Developing,
    Developed,
    WellDeveloped,
    VeryDeveloped,
}

impl DevelopmentLevel {
    /// Classify development points.
    ///
    /// | Points | Level          |
    /// |--------|----------------|
    /// | < 0    | Underdeveloped |
    /// | 0-2    | Developing     |
    /// | 3-5    | Developed      |
    /// | 6-8    | WellDeveloped  |
    /// | >= 9   | VeryDeveloped  |
    pub fn from_points(points: i32) -> Self {
        match points {
            p if p < 0 => Self::Underdeveloped,
            0..=2 => Self::Developing,
            3..=5 => Self::Developed,
            6..=8 => Self::WellDeveloped,
            _ => Self::VeryDeveloped,
        }
    }

    /// Classify from tech level and habitability score
    pub fn classify(tech_level: u8, habitability_score: f64) -> Self {
        Self::from_points(development_points(tech_level, habitability_score))
    }

    /// Contribution to the port value score
    pub fn modifier(&self) -> i32 {
        match self {
            Self::Underdeveloped => -2,
            Self::Developing => -1,
            Self::Developed => 0,
            Self::WellDeveloped => 1,
            Self::VeryDeveloped => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Underdeveloped => "Underdeveloped",
            Self::Developing => "Developing",
            Self::Developed => "Developed",
            Self::WellDeveloped => "Well Developed",
            Self::VeryDeveloped => "Very Developed",
        }
    }
}

impl fmt::Display for DevelopmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// `(techLevel - 7) + floor(score / 4)`
pub fn development_points(tech_level: u8, habitability_score: f64) -> i32 {
    (i32::from(tech_level) - 7) + score_quarter(habitability_score)
}

/// `floor(score / 4)`, shared by development and port value
pub(crate) fn score_quarter(habitability_score: f64) -> i32 {
    (habitability_score / 4.0).floor() as i32
}

/// Estimated head count.
///
/// Habitats take the midpoint of their scale's population range. Natural
/// worlds use `floor(mass × factor × 10^(TL-7) × 1e6)` with
/// `factor = max(0.1, 1 + score/10)`.
///
/// # Example
/// ```
/// use worlds::{SizeClass, WorldBody, estimate_population};
///
/// let earthlike = WorldBody::Terrestrial {
///     size: SizeClass::Standard,
///     mass: 1.0,
///     gravity: 1.0,
/// };
/// assert_eq!(estimate_population(&earthlike, 0.0, 7), 1_000_000);
/// ```
pub fn estimate_population(body: &WorldBody, habitability_score: f64, tech_level: u8) -> u64 {
    match body {
        WorldBody::Habitat { scale, .. } => scale.population_range().midpoint(),
        _ => {
            let factor = (1.0 + habitability_score / 10.0).max(0.1);
            let tech_scale = 10_f64.powi(i32::from(tech_level) - 7);
            (body.mass() * factor * tech_scale * 1_000_000.0).floor() as u64
        }
    }
}

pub(crate) fn roll_social<D: DiceSource>(
    dice: &mut D,
    edge: Advantage,
    wealth_override: Option<i32>,
    provenance: &mut Provenance,
) -> Result<SocialProfile> {
    let wealth = match wealth_override {
        Some(wealth) => wealth,
        None => {
            let roll = roll_2d6(dice, edge);
            provenance.record_pool("wealth", &roll);
            tables::wealth(roll.total)?
        }
    };

    let roll = roll_2d6(dice, edge);
    provenance.record_pool("powerStructure", &roll);
    let power_structure = tables::power_structure(roll.total)?;

    let roll = roll_2d6(dice, edge);
    provenance.record_pool("governance", &roll);
    let governance = tables::governance(roll.total)?;

    let roll = roll_2d6(dice, edge);
    provenance.record_pool("sourceOfPower", &roll);
    let source_of_power = tables::source_of_power(roll.total)?;

    Ok(SocialProfile {
        wealth,
        power_structure,
        governance,
        source_of_power,
    })
}
