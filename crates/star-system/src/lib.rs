//! Star system assembly.
//!
//! Builds on the stellar generators to populate a system with disks, planets,
//! moons and brown dwarfs, and gathers everything into a [`StarSystem`].
//! Tunables that are not fixed by the tables live in [`GeneratorConfig`].

pub mod brown_dwarf;
pub mod config;
pub mod disk;
pub mod error;
pub mod metadata;
pub mod moon;
pub mod placement;
pub mod planet;
pub mod system;

#[cfg(test)]
mod brown_dwarf_test;
#[cfg(test)]
mod disk_test;
#[cfg(test)]
mod placement_test;
#[cfg(test)]
mod planet_test;

pub use brown_dwarf::{BrownDwarfClass, BrownDwarfOptions, BrownDwarfRecord, generate_brown_dwarf};
pub use config::{DiskWeights, GeneratorConfig, PLANET_LIMIT};
pub use disk::{DiskMass, DiskOptions, DiskRecord, DiskType, DiskWidth, generate_disk};
pub use error::{Result, SystemError};
pub use metadata::SystemMetadata;
pub use moon::{
    MoonComposition, MoonOptions, MoonOrbit, MoonRecord, MoonSize, TidalHeating, generate_moon,
};
pub use placement::{log_uniform, zone_from_roll, zone_span};
pub use planet::{PlanetOptions, PlanetRecord, PlanetType, generate_planet, moon_count};
pub use system::{StarSystem, SystemOptions, disk_count, generate_star_system, planet_count};
