//! Stellar reference table.
//!
//! Seventy main-sequence entries, `O0` through `M9`. Values are tuned for
//! play rather than measured; mass, luminosity, radius and temperature all
//! fall strictly from each entry to the next dimmer one.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::class::{StellarClass, StellarGrade, StellarType};
use crate::error::{Result, StellarError};

/// Physical properties for one class/grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarProperty {
    /// Class and grade, e.g. `"G5"`
    pub id: String,
    pub class: StellarClass,
    pub grade: StellarGrade,
    /// Mass in solar masses (M☉)
    pub mass: f64,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    /// Radius in solar radii (R☉)
    pub radius: f64,
    /// Effective temperature in Kelvin
    pub temperature: f64,
    pub color_name: String,
    pub color_hex: String,
    pub description: String,
}

impl StellarProperty {
    pub fn stellar_type(&self) -> StellarType {
        StellarType::new(self.class, self.grade)
    }
}

/// Read access to stellar reference data.
///
/// The generators only ever read through this trait, so a host can serve the
/// table from its own store. A `None` for a valid class/grade is treated as a
/// hard failure, never replaced by a default.
pub trait StellarPropertySource {
    fn lookup(&self, class: StellarClass, grade: StellarGrade) -> Option<StellarProperty>;

    /// Lookup that turns absence into [`StellarError::MissingProperty`]
    fn require(&self, class: StellarClass, grade: StellarGrade) -> Result<StellarProperty> {
        self.lookup(class, grade)
            .ok_or(StellarError::MissingProperty {
                class,
                grade: grade.value(),
            })
    }
}

/// The built-in table, indexed by class then grade.
#[derive(Debug, Clone)]
pub struct StellarTable {
    entries: Vec<StellarProperty>,
}

static STANDARD_TABLE: LazyLock<StellarTable> = LazyLock::new(StellarTable::build);

impl StellarTable {
    /// Shared, immutable standard table
    pub fn standard() -> &'static StellarTable {
        &STANDARD_TABLE
    }

    fn build() -> Self {
        let entries = STANDARD_ROWS
            .iter()
            .map(|&(class, grade, mass, luminosity, radius, temperature)| StellarProperty {
                id: format!("{class}{grade}"),
                class,
                grade: StellarGrade(grade),
                mass,
                luminosity,
                radius,
                temperature,
                color_name: class.color_name().to_string(),
                color_hex: class.color_hex().to_string(),
                description: class.description().to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Entry for a class/grade. Every valid pair is present.
    pub fn get(&self, class: StellarClass, grade: StellarGrade) -> &StellarProperty {
        &self.entries[class.index() * 10 + grade.value() as usize]
    }

    pub fn entries(&self) -> &[StellarProperty] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StellarPropertySource for StellarTable {
    fn lookup(&self, class: StellarClass, grade: StellarGrade) -> Option<StellarProperty> {
        self.entries
            .get(class.index() * 10 + grade.value() as usize)
            .cloned()
    }
}

/// Look up the standard table by class and raw grade.
///
/// # Errors
/// Returns [`StellarError::GradeOutOfRange`] for grades above 9.
pub fn lookup_stellar_property(class: StellarClass, grade: u8) -> Result<&'static StellarProperty> {
    let grade = StellarGrade::new(grade)?;
    Ok(StellarTable::standard().get(class, grade))
}

// (class, grade, mass M☉, luminosity L☉, radius R☉, temperature K)
#[rustfmt::skip]
const STANDARD_ROWS: [(StellarClass, u8, f64, f64, f64, f64); 70] = [
    (StellarClass::O, 0, 90.0, 800000.0, 15.0, 50000.0),
    (StellarClass::O, 1, 76.2, 576000.0, 13.9, 47670.0),
    (StellarClass::O, 2, 64.5, 415000.0, 12.9, 45440.0),
    (StellarClass::O, 3, 54.6, 299000.0, 11.9, 43320.0),
    (StellarClass::O, 4, 46.2, 215000.0, 11.1, 41300.0),
    (StellarClass::O, 5, 39.1, 155000.0, 10.2, 39370.0),
    (StellarClass::O, 6, 33.1, 112000.0, 9.5, 37530.0),
    (StellarClass::O, 7, 28.0, 80300.0, 8.8, 35780.0),
    (StellarClass::O, 8, 23.7, 57900.0, 8.15, 34110.0),
    (StellarClass::O, 9, 20.1, 41700.0, 7.55, 32520.0),
    (StellarClass::B, 0, 17.0, 30000.0, 7.0, 31000.0),
    (StellarClass::B, 1, 14.2, 16000.0, 6.26, 27600.0),
    (StellarClass::B, 2, 11.9, 8510.0, 5.6, 24570.0),
    (StellarClass::B, 3, 10.0, 4530.0, 5.01, 21880.0),
    (StellarClass::B, 4, 8.38, 2410.0, 4.48, 19480.0),
    (StellarClass::B, 5, 7.02, 1280.0, 4.01, 17340.0),
    (StellarClass::B, 6, 5.88, 684.0, 3.59, 15440.0),
    (StellarClass::B, 7, 4.93, 364.0, 3.21, 13750.0),
    (StellarClass::B, 8, 4.13, 194.0, 2.87, 12240.0),
    (StellarClass::B, 9, 3.46, 103.0, 2.57, 10900.0),
    (StellarClass::A, 0, 2.9, 55.0, 2.3, 9700.0),
    (StellarClass::A, 1, 2.73, 44.8, 2.23, 9430.0),
    (StellarClass::A, 2, 2.57, 36.4, 2.17, 9160.0),
    (StellarClass::A, 3, 2.43, 29.6, 2.1, 8910.0),
    (StellarClass::A, 4, 2.29, 24.1, 2.04, 8660.0),
    (StellarClass::A, 5, 2.15, 19.6, 1.98, 8410.0),
    (StellarClass::A, 6, 2.03, 16.0, 1.92, 8180.0),
    (StellarClass::A, 7, 1.91, 13.0, 1.86, 7950.0),
    (StellarClass::A, 8, 1.8, 10.6, 1.81, 7730.0),
    (StellarClass::A, 9, 1.7, 8.6, 1.75, 7510.0),
    (StellarClass::F, 0, 1.6, 7.0, 1.7, 7300.0),
    (StellarClass::F, 1, 1.55, 6.04, 1.63, 7160.0),
    (StellarClass::F, 2, 1.5, 5.21, 1.57, 7020.0),
    (StellarClass::F, 3, 1.45, 4.5, 1.51, 6880.0),
    (StellarClass::F, 4, 1.4, 3.88, 1.45, 6750.0),
    (StellarClass::F, 5, 1.36, 3.35, 1.4, 6620.0),
    (StellarClass::F, 6, 1.31, 2.89, 1.34, 6490.0),
    (StellarClass::F, 7, 1.27, 2.49, 1.29, 6360.0),
    (StellarClass::F, 8, 1.23, 2.15, 1.24, 6240.0),
    (StellarClass::F, 9, 1.19, 1.85, 1.2, 6120.0),
    (StellarClass::G, 0, 1.15, 1.6, 1.15, 6000.0),
    (StellarClass::G, 1, 1.12, 1.46, 1.12, 5910.0),
    (StellarClass::G, 2, 1.09, 1.34, 1.08, 5830.0),
    (StellarClass::G, 3, 1.06, 1.22, 1.05, 5750.0),
    (StellarClass::G, 4, 1.03, 1.12, 1.02, 5670.0),
    (StellarClass::G, 5, 1.01, 1.01, 0.989, 5590.0),
    (StellarClass::G, 6, 0.979, 0.932, 0.959, 5510.0),
    (StellarClass::G, 7, 0.954, 0.852, 0.931, 5430.0),
    (StellarClass::G, 8, 0.928, 0.778, 0.903, 5350.0),
    (StellarClass::G, 9, 0.904, 0.711, 0.876, 5270.0),
    (StellarClass::K, 0, 0.88, 0.65, 0.85, 5200.0),
    (StellarClass::K, 1, 0.843, 0.527, 0.821, 5050.0),
    (StellarClass::K, 2, 0.807, 0.428, 0.793, 4900.0),
    (StellarClass::K, 3, 0.773, 0.347, 0.766, 4750.0),
    (StellarClass::K, 4, 0.74, 0.281, 0.739, 4610.0),
    (StellarClass::K, 5, 0.708, 0.228, 0.714, 4470.0),
    (StellarClass::K, 6, 0.678, 0.185, 0.69, 4340.0),
    (StellarClass::K, 7, 0.649, 0.15, 0.666, 4210.0),
    (StellarClass::K, 8, 0.622, 0.122, 0.643, 4090.0),
    (StellarClass::K, 9, 0.595, 0.0986, 0.621, 3970.0),
    (StellarClass::M, 0, 0.57, 0.08, 0.6, 3850.0),
    (StellarClass::M, 1, 0.465, 0.0427, 0.496, 3640.0),
    (StellarClass::M, 2, 0.38, 0.0228, 0.411, 3440.0),
    (StellarClass::M, 3, 0.31, 0.0122, 0.34, 3250.0),
    (StellarClass::M, 4, 0.253, 0.00649, 0.281, 3080.0),
    (StellarClass::M, 5, 0.207, 0.00346, 0.232, 2910.0),
    (StellarClass::M, 6, 0.169, 0.00185, 0.192, 2750.0),
    (StellarClass::M, 7, 0.138, 0.000987, 0.159, 2600.0),
    (StellarClass::M, 8, 0.113, 0.000527, 0.132, 2460.0),
    (StellarClass::M, 9, 0.0919, 0.000281, 0.109, 2330.0),
];
