//! Stellar class and grade.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StellarError};

/// Coarse stellar class, declared hottest to coolest.
///
/// The derived `Ord` follows declaration order, so `O < B < ... < M` reads
/// "hotter than".
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StellarClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl StellarClass {
    /// All classes, hottest first
    pub const ALL: [StellarClass; 7] = [
        StellarClass::O,
        StellarClass::B,
        StellarClass::A,
        StellarClass::F,
        StellarClass::G,
        StellarClass::K,
        StellarClass::M,
    ];

    /// Position in the hot-to-cool ordering (O is 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The next cooler class, or `None` for M
    pub fn next_cooler(&self) -> Option<StellarClass> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// This class and every cooler one
    pub fn this_and_cooler(&self) -> &'static [StellarClass] {
        &Self::ALL[self.index()..]
    }

    pub fn letter(&self) -> char {
        match self {
            Self::O => 'O',
            Self::B => 'B',
            Self::A => 'A',
            Self::F => 'F',
            Self::G => 'G',
            Self::K => 'K',
            Self::M => 'M',
        }
    }

    /// Apparent colour of the class
    pub fn color_name(&self) -> &'static str {
        match self {
            Self::O => "Blue",
            Self::B => "Blue-white",
            Self::A => "White",
            Self::F => "Yellow-white",
            Self::G => "Yellow",
            Self::K => "Orange",
            Self::M => "Red",
        }
    }

    /// Representative display colour as `#RRGGBB`
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::O => "#9BB0FF",
            Self::B => "#AABFFF",
            Self::A => "#CAD7FF",
            Self::F => "#F8F7FF",
            Self::G => "#FFF4EA",
            Self::K => "#FFD2A1",
            Self::M => "#FFCC6F",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::O => "Rare, massive and short-lived; floods its system with ultraviolet light",
            Self::B => "Hot and luminous; wide habitable zones but brief main-sequence lives",
            Self::A => "White stars with strong hydrogen lines and fast rotation",
            Self::F => "Slightly hotter and brighter than the Sun, stable for billions of years",
            Self::G => "Sun-like stars; the benchmark for habitable worlds",
            Self::K => "Orange dwarfs; long-lived, calm and common hosts for life",
            Self::M => "Red dwarfs; dim, numerous and prone to flares",
        }
    }
}

impl fmt::Display for StellarClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for StellarClass {
    type Err = StellarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "O" => Ok(Self::O),
            "B" => Ok(Self::B),
            "A" => Ok(Self::A),
            "F" => Ok(Self::F),
            "G" => Ok(Self::G),
            "K" => Ok(Self::K),
            "M" => Ok(Self::M),
            _ => Err(StellarError::UnknownClass(s.to_string())),
        }
    }
}

/// Grade within a class: 0 is brightest/hottest, 9 dimmest/coolest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StellarGrade(pub(crate) u8);

impl StellarGrade {
    pub const MIN: StellarGrade = StellarGrade(0);
    pub const MAX: StellarGrade = StellarGrade(9);

    /// # Errors
    /// Returns [`StellarError::GradeOutOfRange`] above 9.
    pub fn new(grade: u8) -> Result<Self> {
        if grade > Self::MAX.0 {
            return Err(StellarError::GradeOutOfRange(grade));
        }
        Ok(Self(grade))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Grades strictly dimmer than this one
    pub fn dimmer(&self) -> impl Iterator<Item = StellarGrade> {
        (self.0 + 1..=Self::MAX.0).map(StellarGrade)
    }

    pub fn all() -> impl Iterator<Item = StellarGrade> {
        (Self::MIN.0..=Self::MAX.0).map(StellarGrade)
    }
}

impl TryFrom<u8> for StellarGrade {
    type Error = StellarError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<StellarGrade> for u8 {
    fn from(grade: StellarGrade) -> Self {
        grade.0
    }
}

impl fmt::Display for StellarGrade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A (class, grade) pair such as `G5`.
///
/// Ordering is class first, then grade, so `a < b` means `a` is brighter and
/// hotter than `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StellarType {
    pub class: StellarClass,
    pub grade: StellarGrade,
}

impl StellarType {
    pub fn new(class: StellarClass, grade: StellarGrade) -> Self {
        Self { class, grade }
    }

    /// # Errors
    /// Returns [`StellarError::GradeOutOfRange`] above 9.
    pub fn from_parts(class: StellarClass, grade: u8) -> Result<Self> {
        Ok(Self::new(class, StellarGrade::new(grade)?))
    }

    /// The dimmest star in the scheme
    pub fn dimmest() -> Self {
        Self::new(StellarClass::M, StellarGrade::MAX)
    }

    /// All 70 types, brightest first
    pub fn all() -> impl Iterator<Item = StellarType> {
        StellarClass::ALL
            .into_iter()
            .flat_map(|class| StellarGrade::all().map(move |grade| Self::new(class, grade)))
    }
}

impl fmt::Display for StellarType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.class, self.grade)
    }
}

impl FromStr for StellarType {
    type Err = StellarError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let class: StellarClass = chars
            .next()
            .ok_or_else(|| StellarError::UnknownClass(s.to_string()))?
            .to_string()
            .parse()?;
        let grade: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| StellarError::UnknownClass(s.to_string()))?;
        Self::from_parts(class, grade)
    }
}
