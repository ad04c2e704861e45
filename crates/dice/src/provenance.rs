//! Records of the rolls behind a generated entity.

use serde::{Deserialize, Serialize};

use crate::d66::D66Code;
use crate::roll::DiceRollResult;

/// The value produced at one stage of a generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RollValue {
    /// A summed pool (2D6, 3D6, 5D6, ...)
    Pool(DiceRollResult),
    /// A d66 table key
    D66 { code: D66Code },
    /// A single die used as an index or grade
    Die { sides: u32, face: u32 },
    /// A uniform sample used for continuous interpolation
    Uniform { value: f64 },
}

impl RollValue {
    /// The numeric result used for table lookup, if the roll has one
    pub fn total(&self) -> Option<u32> {
        match self {
            RollValue::Pool(result) => Some(result.total),
            RollValue::Die { face, .. } => Some(*face),
            RollValue::D66 { .. } | RollValue::Uniform { .. } => None,
        }
    }
}

/// One labelled roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollRecord {
    pub stage: String,
    pub value: RollValue,
}

/// Ordered provenance for a generated entity.
///
/// Stages are appended in the order the generator consumed them, so replaying
/// the recorded faces through a scripted source reproduces the entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Provenance {
    records: Vec<RollRecord>,
}

impl Provenance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stage: impl Into<String>, value: RollValue) {
        self.records.push(RollRecord {
            stage: stage.into(),
            value,
        });
    }

    pub fn record_pool(&mut self, stage: impl Into<String>, result: &DiceRollResult) {
        self.record(stage, RollValue::Pool(result.clone()));
    }

    pub fn record_d66(&mut self, stage: impl Into<String>, code: D66Code) {
        self.record(stage, RollValue::D66 { code });
    }

    pub fn record_die(&mut self, stage: impl Into<String>, sides: u32, face: u32) {
        self.record(stage, RollValue::Die { sides, face });
    }

    pub fn record_uniform(&mut self, stage: impl Into<String>, value: f64) {
        self.record(stage, RollValue::Uniform { value });
    }

    /// First record for a stage
    pub fn find(&self, stage: &str) -> Option<&RollRecord> {
        self.records.iter().find(|r| r.stage == stage)
    }

    /// Remove every record for a stage (used when one facet is re-rolled)
    pub fn without_stage(&self, stage: &str) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| r.stage != stage)
                .cloned()
                .collect(),
        }
    }

    /// Append all records from another provenance, prefixing their stage names
    pub fn extend_prefixed(&mut self, prefix: &str, other: &Provenance) {
        for record in &other.records {
            self.record(format!("{prefix}.{}", record.stage), record.value.clone());
        }
    }

    pub fn records(&self) -> &[RollRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
