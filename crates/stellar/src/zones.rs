//! Habitable zone, frostline and orbital zone bands.
//!
//! Every boundary scales with the square root of luminosity, so the five
//! bands keep the same proportions around every star.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StellarError};

/// Conservative habitable zone inner edge, AU per √L☉
pub const HZ_INNER_COEFFICIENT: f64 = 0.95;

/// Conservative habitable zone outer edge, AU per √L☉
pub const HZ_OUTER_COEFFICIENT: f64 = 1.37;

/// Frostline distance, AU per √L☉
pub const FROSTLINE_COEFFICIENT: f64 = 4.85;

/// Conservative habitable zone boundaries in AU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    pub inner_edge: f64,
    pub outer_edge: f64,
}

impl HabitableZone {
    pub fn from_luminosity(luminosity: f64) -> Self {
        let root = luminosity.sqrt();
        Self {
            inner_edge: HZ_INNER_COEFFICIENT * root,
            outer_edge: HZ_OUTER_COEFFICIENT * root,
        }
    }

    /// Closed on both ends
    pub fn contains(&self, distance_au: f64) -> bool {
        (self.inner_edge..=self.outer_edge).contains(&distance_au)
    }
}

/// Frostline location in AU
pub fn frostline(luminosity: f64) -> f64 {
    FROSTLINE_COEFFICIENT * luminosity.sqrt()
}

/// One contiguous distance band in AU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBand {
    pub inner: f64,
    pub outer: f64,
}

impl ZoneBand {
    pub fn width(&self) -> f64 {
        self.outer - self.inner
    }
}

/// Named orbital zones, closest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrbitalZone {
    Infernal,
    Hot,
    ConservativeHabitable,
    Cold,
    Outer,
    Beyond,
}

impl OrbitalZone {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Infernal => "Infernal",
            Self::Hot => "Hot",
            Self::ConservativeHabitable => "Conservative Habitable",
            Self::Cold => "Cold",
            Self::Outer => "Outer",
            Self::Beyond => "Beyond",
        }
    }

    /// Zones inside the outer edge of the habitable zone
    pub fn is_inner_system(&self) -> bool {
        matches!(
            self,
            Self::Infernal | Self::Hot | Self::ConservativeHabitable
        )
    }
}

impl std::fmt::Display for OrbitalZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Five gapless bands from the star out to the frostline.
///
/// | Zone                  | Range                                  |
/// |-----------------------|----------------------------------------|
/// | Infernal              | `[0, 0.5 × HZ inner)`                  |
/// | Hot                   | `[0.5 × HZ inner, HZ inner)`           |
/// | ConservativeHabitable | `[HZ inner, HZ outer]` (closed)        |
/// | Cold                  | `(HZ outer, 2 × HZ outer)`             |
/// | Outer                 | `[2 × HZ outer, frostline)`            |
/// | Beyond                | `≥ frostline`                          |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarZones {
    pub infernal: ZoneBand,
    pub hot: ZoneBand,
    pub conservative_habitable: ZoneBand,
    pub cold: ZoneBand,
    pub outer: ZoneBand,
    pub frostline: f64,
}

impl StellarZones {
    /// # Errors
    /// Returns [`StellarError::InvalidLuminosity`] unless `luminosity` is
    /// positive and finite.
    pub fn from_luminosity(luminosity: f64) -> Result<Self> {
        if !(luminosity.is_finite() && luminosity > 0.0) {
            return Err(StellarError::InvalidLuminosity(luminosity));
        }

        let hz = HabitableZone::from_luminosity(luminosity);
        let frost = frostline(luminosity);

        Ok(Self {
            infernal: ZoneBand {
                inner: 0.0,
                outer: 0.5 * hz.inner_edge,
            },
            hot: ZoneBand {
                inner: 0.5 * hz.inner_edge,
                outer: hz.inner_edge,
            },
            conservative_habitable: ZoneBand {
                inner: hz.inner_edge,
                outer: hz.outer_edge,
            },
            cold: ZoneBand {
                inner: hz.outer_edge,
                outer: 2.0 * hz.outer_edge,
            },
            outer: ZoneBand {
                inner: 2.0 * hz.outer_edge,
                outer: frost,
            },
            frostline: frost,
        })
    }

    pub fn habitable_zone(&self) -> HabitableZone {
        HabitableZone {
            inner_edge: self.conservative_habitable.inner,
            outer_edge: self.conservative_habitable.outer,
        }
    }

    /// Band for a zone; `Beyond` has none
    pub fn band(&self, zone: OrbitalZone) -> Option<ZoneBand> {
        match zone {
            OrbitalZone::Infernal => Some(self.infernal),
            OrbitalZone::Hot => Some(self.hot),
            OrbitalZone::ConservativeHabitable => Some(self.conservative_habitable),
            OrbitalZone::Cold => Some(self.cold),
            OrbitalZone::Outer => Some(self.outer),
            OrbitalZone::Beyond => None,
        }
    }

    /// The five bands in order, closest first
    pub fn bands(&self) -> [(OrbitalZone, ZoneBand); 5] {
        [
            (OrbitalZone::Infernal, self.infernal),
            (OrbitalZone::Hot, self.hot),
            (OrbitalZone::ConservativeHabitable, self.conservative_habitable),
            (OrbitalZone::Cold, self.cold),
            (OrbitalZone::Outer, self.outer),
        ]
    }

    pub fn zone_of(&self, distance_au: f64) -> OrbitalZone {
        determine_orbital_zone(distance_au, self)
    }
}

/// Classify a distance into exactly one zone.
///
/// Bands are half-open `[inner, outer)` except the habitable zone, which is
/// closed on both ends: a distance exactly on the outer habitable edge is
/// habitable, not cold.
pub fn determine_orbital_zone(distance_au: f64, zones: &StellarZones) -> OrbitalZone {
    let hz = zones.conservative_habitable;
    match distance_au {
        d if d < zones.infernal.outer => OrbitalZone::Infernal,
        d if d < zones.hot.outer => OrbitalZone::Hot,
        d if d <= hz.outer => OrbitalZone::ConservativeHabitable,
        d if d < zones.cold.outer => OrbitalZone::Cold,
        d if d < zones.frostline => OrbitalZone::Outer,
        _ => OrbitalZone::Beyond,
    }
}

/// Where a companion sits relative to the primary's zones
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionOrbitAssessment {
    pub distance_au: f64,
    pub zone: OrbitalZone,
    /// The companion orbits inside or on the primary's habitable zone
    pub disrupts_habitable_zone: bool,
}

/// Check whether a companion orbit leaves the primary's habitable zone intact.
pub fn assess_companion_orbit(distance_au: f64, zones: &StellarZones) -> CompanionOrbitAssessment {
    let zone = determine_orbital_zone(distance_au, zones);
    CompanionOrbitAssessment {
        distance_au,
        zone,
        disrupts_habitable_zone: zone.is_inner_system(),
    }
}
