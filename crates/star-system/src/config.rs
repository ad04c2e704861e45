//! Generator configuration.
//!
//! Tunables that are design guesses rather than rules live here so a host
//! can adjust them without touching the tables. Every field has a default,
//! and a TOML file only needs the keys it changes:
//!
//! ```toml
//! brown_dwarf_chance = 0.25
//! name_prefix = "Spinward"
//!
//! [disk_weights]
//! debris = 2.0
//! accretion = 0.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use catalog::AtomicNameSequence;

use crate::disk::DiskType;
use crate::error::{Result, SystemError};

/// Upper limit for `max_planets`
pub const PLANET_LIMIT: usize = 20;

/// Relative weights for the four disk types
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskWeights {
    pub debris: f64,
    pub asteroid_belt: f64,
    pub protoplanetary: f64,
    pub accretion: f64,
}

impl Default for DiskWeights {
    fn default() -> Self {
        Self {
            debris: 0.4,
            asteroid_belt: 0.35,
            protoplanetary: 0.15,
            accretion: 0.1,
        }
    }
}

impl DiskWeights {
    fn entries(&self) -> [(DiskType, f64); 4] {
        [
            (DiskType::Debris, self.debris),
            (DiskType::AsteroidBelt, self.asteroid_belt),
            (DiskType::Protoplanetary, self.protoplanetary),
            (DiskType::Accretion, self.accretion),
        ]
    }

    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, w)| w).sum()
    }

    /// Pick a disk type from a uniform sample in `[0, 1)`
    pub fn choose(&self, u: f64) -> DiskType {
        let target = u * self.total();
        let mut cumulative = 0.0;
        let mut last = DiskType::Debris;
        for (disk_type, weight) in self.entries() {
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            last = disk_type;
            if target < cumulative {
                return disk_type;
            }
        }
        last
    }
}

/// Tunable generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub disk_weights: DiskWeights,
    /// Chance in `[0, 1]` that a system carries a brown dwarf
    pub brown_dwarf_chance: f64,
    /// Cap on planets per system
    pub max_planets: usize,
    /// Prefix for default names, e.g. a sector name
    pub name_prefix: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            disk_weights: DiskWeights::default(),
            brown_dwarf_chance: 0.15,
            max_planets: 8,
            name_prefix: None,
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// [`SystemError::ConfigParse`] for malformed TOML and
    /// [`SystemError::InvalidConfig`] for values that fail validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SystemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let weights = self.disk_weights.entries();
        if let Some((disk_type, weight)) = weights
            .iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(SystemError::InvalidConfig(format!(
                "disk weight for {disk_type} must be a non-negative number, got {weight}"
            )));
        }
        if self.disk_weights.total() <= 0.0 {
            return Err(SystemError::InvalidConfig(
                "at least one disk weight must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.brown_dwarf_chance) {
            return Err(SystemError::InvalidConfig(format!(
                "brown_dwarf_chance must be within 0-1, got {}",
                self.brown_dwarf_chance
            )));
        }
        if self.max_planets > PLANET_LIMIT {
            return Err(SystemError::InvalidConfig(format!(
                "max_planets must be at most {PLANET_LIMIT}, got {}",
                self.max_planets
            )));
        }
        Ok(())
    }

    /// A fresh name sequence using the configured prefix
    pub fn name_sequence(&self) -> AtomicNameSequence {
        match &self.name_prefix {
            Some(prefix) => AtomicNameSequence::new().with_prefix(prefix.clone()),
            None => AtomicNameSequence::new(),
        }
    }
}
