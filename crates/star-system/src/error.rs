//! Error types for system assembly and configuration.

use std::path::PathBuf;

use thiserror::Error;

use dice::DiceError;
use stellar::StellarError;

/// Result type alias using [`SystemError`].
pub type Result<T> = std::result::Result<T, SystemError>;

#[derive(Debug, Error)]
pub enum SystemError {
    /// A roll fell outside the closed domain of a lookup table.
    #[error("Roll {roll} is outside the {table} table")]
    RollOutOfRange { table: &'static str, roll: u32 },

    /// Configuration values that cannot drive generation.
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse generator configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dice error: {0}")]
    Dice(#[from] DiceError),

    #[error("Stellar error: {0}")]
    Stellar(#[from] StellarError),
}
