//! World generation for procedurally built star systems.
//!
//! A world is produced by one pass through a fixed pipeline of table
//! lookups: physical body, habitability, tech level, social factors, then
//! the derived population, development level and starport class, and
//! finally culture. Starport bases and single culture traits can be rolled
//! again on their own without regenerating the world.

pub mod culture;
pub mod error;
pub mod habitability;
pub mod physical;
pub mod social;
pub mod starport;
pub mod tables;
pub mod world;

#[cfg(test)]
mod physical_test;
#[cfg(test)]
mod tables_test;

// Re-export types
pub use culture::{CultureCategory, CultureOptions, CultureRecord, CultureTrait, CultureTraits};
pub use error::{Result, WorldError};
pub use habitability::{
    Atmosphere, Biochemistry, Habitability, HabitabilityFactors, Hazard, HazardIntensity,
    HazardKind, Temperature, habitability_score, mass_extremity_penalty, tech_level_bonus,
};
pub use physical::{
    ARTIFICIAL_GRAVITY, Composition, HabitatScale, PopulationRange, SizeClass, WorldBody,
    WorldType,
};
pub use social::{
    DevelopmentLevel, Governance, PowerStructure, SocialProfile, SourceOfPower,
    development_points, estimate_population, wealth_name,
};
pub use starport::{
    BasePresence, BaseType, Capability, PortProfile, StarportClass, StarportOptions,
    StarportRecord, port_value_score,
};
pub use world::{WorldOptions, WorldRecord};

// Re-export generation functions
pub use culture::{generate_culture, reroll_culture_trait};
pub use starport::{generate_starport, reroll_base};
pub use world::generate_world;
