//! Error types for world generation.

use thiserror::Error;

use dice::DiceError;

use crate::starport::{BaseType, StarportClass};

/// Result type alias using [`WorldError`].
pub type Result<T> = std::result::Result<T, WorldError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    /// A roll fell outside the closed domain of a lookup table.
    #[error("Roll {roll} is outside the {table} table")]
    RollOutOfRange { table: &'static str, roll: u32 },

    /// A culture code that is not a valid d66 key.
    #[error("Unknown culture code: {0}")]
    UnknownCultureCode(String),

    /// Tech level override above the supported maximum.
    #[error("Tech level {0} is out of range (maximum {})", crate::tables::MAX_TECH_LEVEL)]
    TechLevelOutOfRange(u8),

    /// Wealth override outside -2..=5.
    #[error("Wealth {0} is out of range (must be -2 to 5)")]
    WealthOutOfRange(i32),

    /// Base check requested for a base the starport class cannot host.
    #[error("A {base} base is not possible at a class {class} starport")]
    BaseNotEligible { base: BaseType, class: StarportClass },

    #[error("Dice error: {0}")]
    Dice(#[from] DiceError),
}
