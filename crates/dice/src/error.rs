//! Error types for dice rolls.

use thiserror::Error;

/// Result type alias using [`DiceError`].
pub type Result<T> = std::result::Result<T, DiceError>;

/// A roll was requested outside the domain of the dice engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// A pool must contain at least one die.
    #[error("Invalid dice count: {0} (must be at least 1)")]
    InvalidDiceCount(u32),

    /// A die must have at least one side.
    #[error("Invalid number of sides: {0} (must be at least 1)")]
    InvalidSides(u32),

    /// A d66 code whose digits are not both in 1-6.
    #[error("Invalid d66 code: {0}")]
    InvalidD66Code(String),
}
