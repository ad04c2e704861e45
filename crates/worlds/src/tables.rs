//! Lookup tables for the world pipeline.
//!
//! Every 2D6 table is exhaustive over 2-12 and rejects anything else. The
//! culture tables are keyed by d66 code, 36 entries each in `1-1`..`6-6`
//! order.

use dice::D66Code;

use crate::culture::CultureCategory;
use crate::error::{Result, WorldError};
use crate::habitability::{Atmosphere, Biochemistry, HazardIntensity, HazardKind, Temperature};
use crate::physical::{Composition, HabitatScale, SizeClass, WorldType};
use crate::social::{Governance, PowerStructure, SourceOfPower};

/// Highest tech level accepted as an override
pub const MAX_TECH_LEVEL: u8 = 15;

fn out_of_range<T>(table: &'static str, roll: u32) -> Result<T> {
    Err(WorldError::RollOutOfRange { table, roll })
}

// =============================================================================
// Physical
// =============================================================================

pub fn world_type(roll: u32) -> Result<WorldType> {
    match roll {
        2..=5 => Ok(WorldType::Dwarf),
        6..=10 => Ok(WorldType::Terrestrial),
        11..=12 => Ok(WorldType::Habitat),
        _ => out_of_range("world type", roll),
    }
}

/// Size and representative mass (M⊕) of a dwarf world
pub fn dwarf_size(roll: u32) -> Result<(SizeClass, f64)> {
    match roll {
        2..=3 => Ok((SizeClass::Tiny, 0.001)),
        4..=5 => Ok((SizeClass::Small, 0.005)),
        6..=8 => Ok((SizeClass::Medium, 0.01)),
        9..=10 => Ok((SizeClass::Large, 0.03)),
        11..=12 => Ok((SizeClass::Huge, 0.08)),
        _ => out_of_range("dwarf size", roll),
    }
}

/// Size and representative mass (M⊕) of a terrestrial world
pub fn terrestrial_size(roll: u32) -> Result<(SizeClass, f64)> {
    match roll {
        2 => Ok((SizeClass::Tiny, 0.1)),
        3..=4 => Ok((SizeClass::Small, 0.3)),
        5..=6 => Ok((SizeClass::Medium, 0.6)),
        7 => Ok((SizeClass::Standard, 1.0)),
        8..=9 => Ok((SizeClass::Large, 1.6)),
        10..=11 => Ok((SizeClass::VeryLarge, 3.0)),
        12 => Ok((SizeClass::Huge, 6.0)),
        _ => out_of_range("terrestrial size", roll),
    }
}

pub fn habitat_scale(roll: u32) -> Result<HabitatScale> {
    match roll {
        2..=4 => Ok(HabitatScale::Outpost),
        5..=7 => Ok(HabitatScale::Station),
        8..=9 => Ok(HabitatScale::LargeStation),
        10..=11 => Ok(HabitatScale::OrbitalCity),
        12 => Ok(HabitatScale::Megastructure),
        _ => out_of_range("habitat size", roll),
    }
}

/// Surface gravity in G
pub fn dwarf_gravity(roll: u32) -> Result<f64> {
    match roll {
        2..=4 => Ok(0.01),
        5..=7 => Ok(0.03),
        8..=10 => Ok(0.05),
        11..=12 => Ok(0.1),
        _ => out_of_range("dwarf gravity", roll),
    }
}

/// Surface gravity in G
pub fn terrestrial_gravity(roll: u32) -> Result<f64> {
    match roll {
        2 => Ok(0.3),
        3..=4 => Ok(0.5),
        5..=6 => Ok(0.8),
        7..=8 => Ok(1.0),
        9..=10 => Ok(1.2),
        11 => Ok(1.5),
        12 => Ok(2.0),
        _ => out_of_range("terrestrial gravity", roll),
    }
}

pub fn composition(roll: u32) -> Result<Composition> {
    match roll {
        2..=4 => Ok(Composition::Metallic),
        5..=8 => Ok(Composition::Silicaceous),
        9..=11 => Ok(Composition::Carbonaceous),
        12 => Ok(Composition::Other),
        _ => out_of_range("composition", roll),
    }
}

// =============================================================================
// Habitability
// =============================================================================

pub fn atmosphere(roll: u32) -> Result<Atmosphere> {
    match roll {
        2 => Ok(Atmosphere::Vacuum),
        3 => Ok(Atmosphere::Trace),
        4..=5 => Ok(Atmosphere::Thin),
        6..=9 => Ok(Atmosphere::Standard),
        10..=11 => Ok(Atmosphere::Dense),
        12 => Ok(Atmosphere::Crushing),
        _ => out_of_range("atmosphere", roll),
    }
}

pub fn temperature(roll: u32) -> Result<Temperature> {
    match roll {
        2 => Ok(Temperature::Frozen),
        3..=4 => Ok(Temperature::Cold),
        5..=9 => Ok(Temperature::Temperate),
        10..=11 => Ok(Temperature::Hot),
        12 => Ok(Temperature::Scorching),
        _ => out_of_range("temperature", roll),
    }
}

/// Hazard type; `None` means the world is hazard-free
pub fn hazard_kind(roll: u32) -> Result<Option<HazardKind>> {
    match roll {
        2..=6 => Ok(None),
        7 => Ok(Some(HazardKind::Radiation)),
        8 => Ok(Some(HazardKind::Toxic)),
        9 => Ok(Some(HazardKind::Seismic)),
        10 => Ok(Some(HazardKind::Storms)),
        11 => Ok(Some(HazardKind::Biological)),
        12 => Ok(Some(HazardKind::Exotic)),
        _ => out_of_range("hazard", roll),
    }
}

pub fn hazard_intensity(roll: u32) -> Result<HazardIntensity> {
    match roll {
        2..=4 => Ok(HazardIntensity::Mild),
        5..=8 => Ok(HazardIntensity::Moderate),
        9..=11 => Ok(HazardIntensity::Severe),
        12 => Ok(HazardIntensity::Extreme),
        _ => out_of_range("hazard intensity", roll),
    }
}

pub fn biochemistry(roll: u32) -> Result<Biochemistry> {
    match roll {
        2 => Ok(Biochemistry::Barren),
        3..=4 => Ok(Biochemistry::Scarce),
        5..=8 => Ok(Biochemistry::Moderate),
        9..=11 => Ok(Biochemistry::Abundant),
        12 => Ok(Biochemistry::Rich),
        _ => out_of_range("biochemistry", roll),
    }
}

pub fn tech_level(roll: u32) -> Result<u8> {
    match roll {
        2 => Ok(5),
        3..=4 => Ok(6),
        5..=6 => Ok(7),
        7 => Ok(8),
        8..=9 => Ok(9),
        10 => Ok(10),
        11 => Ok(11),
        12 => Ok(12),
        _ => out_of_range("tech level", roll),
    }
}

// =============================================================================
// Social
// =============================================================================

/// Wealth -2..=5
pub fn wealth(roll: u32) -> Result<i32> {
    match roll {
        2 => Ok(-2),
        3..=4 => Ok(-1),
        5..=6 => Ok(0),
        7 => Ok(1),
        8..=9 => Ok(2),
        10 => Ok(3),
        11 => Ok(4),
        12 => Ok(5),
        _ => out_of_range("wealth", roll),
    }
}

pub fn power_structure(roll: u32) -> Result<PowerStructure> {
    match roll {
        2..=3 => Ok(PowerStructure::Anarchic),
        4..=5 => Ok(PowerStructure::Confederation),
        6..=8 => Ok(PowerStructure::Federation),
        9..=11 => Ok(PowerStructure::Unitary),
        12 => Ok(PowerStructure::Hegemony),
        _ => out_of_range("power structure", roll),
    }
}

pub fn governance(roll: u32) -> Result<Governance> {
    match roll {
        2 => Ok(Governance::Failed),
        3..=4 => Ok(Governance::Corrupt),
        5..=6 => Ok(Governance::Inefficient),
        7..=8 => Ok(Governance::Functional),
        9..=10 => Ok(Governance::Effective),
        11..=12 => Ok(Governance::Exemplary),
        _ => out_of_range("governance", roll),
    }
}

pub fn source_of_power(roll: u32) -> Result<SourceOfPower> {
    match roll {
        2..=3 => Ok(SourceOfPower::Military),
        4..=5 => Ok(SourceOfPower::Religious),
        6..=7 => Ok(SourceOfPower::Democratic),
        8..=9 => Ok(SourceOfPower::Corporate),
        10..=11 => Ok(SourceOfPower::Aristocratic),
        12 => Ok(SourceOfPower::Technocratic),
        _ => out_of_range("source of power", roll),
    }
}

// =============================================================================
// Culture
// =============================================================================

pub fn culture_entry(category: CultureCategory, code: D66Code) -> &'static str {
    let table = match category {
        CultureCategory::Social => &SOCIAL_VALUES,
        CultureCategory::Economic => &ECONOMIC_FOCUS,
        CultureCategory::Technological => &TECHNOLOGICAL_ATTITUDE,
    };
    table[code.index()]
}

pub const SOCIAL_VALUES: [&str; 36] = [
    // 1-x
    "Honour-bound",
    "Collectivist",
    "Individualist",
    "Xenophobic",
    "Xenophilic",
    "Ancestor-venerating",
    // 2-x
    "Militaristic",
    "Pacifist",
    "Meritocratic",
    "Hierarchical",
    "Egalitarian",
    "Matriarchal",
    // 3-x
    "Patriarchal",
    "Ritualistic",
    "Hedonistic",
    "Ascetic",
    "Devout",
    "Secular",
    // 4-x
    "Nomadic",
    "Clannish",
    "Cosmopolitan",
    "Insular",
    "Litigious",
    "Oral Tradition",
    // 5-x
    "Artistic",
    "Competitive",
    "Cooperative",
    "Superstitious",
    "Rationalist",
    "Tradition-bound",
    // 6-x
    "Progressive",
    "Debt-of-honour",
    "Caste-based",
    "Communal",
    "Stoic",
    "Expressive",
];

pub const ECONOMIC_FOCUS: [&str; 36] = [
    // 1-x
    "Agriculture",
    "Mining",
    "Manufacturing",
    "Trade Hub",
    "Finance",
    "Tourism",
    // 2-x
    "Research",
    "Shipbuilding",
    "Fuel Refining",
    "Luxury Goods",
    "Arms Manufacture",
    "Biotechnology",
    // 3-x
    "Information Services",
    "Subsistence",
    "Barter",
    "Gift Economy",
    "Corporate Enclave",
    "Salvage",
    // 4-x
    "Aquaculture",
    "Forestry",
    "Pharmaceuticals",
    "Entertainment",
    "Education",
    "Logistics",
    // 5-x
    "Energy Export",
    "Water Export",
    "Ice Mining",
    "Gas Harvesting",
    "Rare Elements",
    "Textiles",
    // 6-x
    "Robotics",
    "Colonial Services",
    "Mercenary Contracts",
    "Smuggling",
    "Pilgrimage",
    "Artisan Crafts",
];

pub const TECHNOLOGICAL_ATTITUDE: [&str; 36] = [
    // 1-x
    "Technophile",
    "Technophobe",
    "Pragmatic Adopter",
    "Luddite Enclaves",
    "Cybernetic Enthusiasts",
    "Bio-purist",
    // 2-x
    "AI-accepting",
    "AI-forbidding",
    "Open Knowledge",
    "Proprietary",
    "Salvage Tech",
    "Retro Tech",
    // 3-x
    "Ritualised Tech",
    "Cargo Cult",
    "Experimental",
    "Conservative Engineering",
    "Green Tech",
    "Heavy Industry",
    // 4-x
    "Nanotech-wary",
    "Gene-crafters",
    "Post-scarcity Aspirants",
    "Automation-averse",
    "Fully Automated",
    "Information-restricted",
    // 5-x
    "Information-free",
    "Military-first Research",
    "Medical Focus",
    "Spacefaring Pride",
    "Planet-bound",
    "Terraforming Zeal",
    // 6-x
    "Preservationist",
    "Network-integrated",
    "Off-grid",
    "Import-dependent",
    "Self-sufficient",
    "Innovation Guilds",
];
