//! Error types for stellar lookups and star generation.

use thiserror::Error;

use dice::DiceError;

use crate::class::StellarClass;

/// Result type alias using [`StellarError`].
pub type Result<T> = std::result::Result<T, StellarError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StellarError {
    /// Grade outside 0-9.
    #[error("Stellar grade out of range: {0} (must be 0-9)")]
    GradeOutOfRange(u8),

    /// Unrecognised class letter.
    #[error("Unknown stellar class: {0}")]
    UnknownClass(String),

    /// A roll fell outside the closed domain of a lookup table.
    #[error("Roll {roll} is outside the {table} table")]
    RollOutOfRange { table: &'static str, roll: u32 },

    /// Luminosity must be positive and finite to derive zones.
    #[error("Invalid luminosity: {0}")]
    InvalidLuminosity(f64),

    /// The reference table has no entry for a valid class/grade.
    #[error("No stellar properties for {class}{grade}")]
    MissingProperty { class: StellarClass, grade: u8 },

    /// No star dimmer than the given one exists.
    #[error("No companion can be dimmer than {class}{grade}")]
    ConstraintExhausted { class: StellarClass, grade: u8 },

    /// A companion is brighter than or equal to its primary.
    #[error("Companion {companion} is not smaller than primary {primary}")]
    CompanionNotSmaller { primary: String, companion: String },

    /// Re-roll requested for a companion that does not exist.
    #[error("Companion index {index} out of range (system has {count})")]
    CompanionIndexOutOfRange { index: usize, count: usize },

    #[error("Dice error: {0}")]
    Dice(#[from] DiceError),
}
