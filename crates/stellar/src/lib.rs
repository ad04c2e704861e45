//! Stellar classification, reference data and star generation.
//!
//! Stars are classified by a coarse class (O hottest through M coolest) and a
//! grade 0-9 within the class (0 brightest). The pair totally orders stars by
//! brightness, which is what the companion rules depend on.

pub mod class;
pub mod companion;
pub mod error;
pub mod star;
pub mod table;
pub mod zones;

#[cfg(test)]
mod class_test;

// Re-export types
pub use class::{StellarClass, StellarGrade, StellarType};
pub use error::{Result, StellarError};
pub use star::{StarOptions, StarRecord, StarRole};
pub use table::{StellarProperty, StellarPropertySource, StellarTable, lookup_stellar_property};
pub use zones::{
    CompanionOrbitAssessment, HabitableZone, OrbitalZone, StellarZones, ZoneBand,
    assess_companion_orbit, determine_orbital_zone, frostline,
};

// Re-export generation functions
pub use companion::{
    CompanionGenerationResult, CompanionOptions, MAX_COMPANIONS, companion_target,
    generate_companion_stars, is_companion_smaller_than_primary, reroll_companion,
    sample_companion_distance, validate_companions,
};
pub use star::{generate_primary_star, primary_class_from_roll};
