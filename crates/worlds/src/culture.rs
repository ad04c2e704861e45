//! Culture traits from three d66 tables.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use dice::{D66Code, DiceSource, Provenance, roll_d66};

use crate::error::{Result, WorldError};
use crate::tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CultureCategory {
    Social,
    Economic,
    Technological,
}

impl CultureCategory {
    pub const ALL: [CultureCategory; 3] = [
        CultureCategory::Social,
        CultureCategory::Economic,
        CultureCategory::Technological,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Social => "Social Values",
            Self::Economic => "Economic Focus",
            Self::Technological => "Technological Attitude",
        }
    }

    fn stage(&self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Economic => "economic",
            Self::Technological => "technological",
        }
    }

    /// Trait name for a d66 code in this category's table
    pub fn lookup(&self, code: D66Code) -> &'static str {
        tables::culture_entry(*self, code)
    }

    /// Lookup by textual code such as `"3-5"`.
    ///
    /// # Errors
    /// [`WorldError::UnknownCultureCode`] if `code` is not a d66 key.
    pub fn lookup_str(&self, code: &str) -> Result<&'static str> {
        let parsed: D66Code = code
            .parse()
            .map_err(|_| WorldError::UnknownCultureCode(code.to_string()))?;
        Ok(self.lookup(parsed))
    }
}

impl fmt::Display for CultureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One trait and the code that selected it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureTrait {
    pub category: CultureCategory,
    pub code: D66Code,
    pub name: String,
}

impl CultureTrait {
    pub fn from_code(category: CultureCategory, code: D66Code) -> Self {
        Self {
            category,
            code,
            name: category.lookup(code).to_string(),
        }
    }
}

/// One trait per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureTraits {
    pub social: CultureTrait,
    pub economic: CultureTrait,
    pub technological: CultureTrait,
}

impl CultureTraits {
    pub fn get(&self, category: CultureCategory) -> &CultureTrait {
        match category {
            CultureCategory::Social => &self.social,
            CultureCategory::Economic => &self.economic,
            CultureCategory::Technological => &self.technological,
        }
    }

    fn slot(&mut self, category: CultureCategory) -> &mut CultureTrait {
        match category {
            CultureCategory::Social => &mut self.social,
            CultureCategory::Economic => &mut self.economic,
            CultureCategory::Technological => &mut self.technological,
        }
    }

    /// Trait names in category order
    pub fn names(&self) -> [&str; 3] {
        [
            self.social.name.as_str(),
            self.economic.name.as_str(),
            self.technological.name.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureRecord {
    pub world_id: Option<Uuid>,
    pub traits: CultureTraits,
    pub provenance: Provenance,
}

/// Options for [`generate_culture`]. A fixed code skips that roll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CultureOptions {
    pub world_id: Option<Uuid>,
    pub social: Option<D66Code>,
    pub economic: Option<D66Code>,
    pub technological: Option<D66Code>,
}

impl CultureOptions {
    fn fixed(&self, category: CultureCategory) -> Option<D66Code> {
        match category {
            CultureCategory::Social => self.social,
            CultureCategory::Economic => self.economic,
            CultureCategory::Technological => self.technological,
        }
    }
}

fn roll_trait<D: DiceSource>(
    dice: &mut D,
    category: CultureCategory,
    provenance: &mut Provenance,
) -> CultureTrait {
    let code = roll_d66(dice);
    provenance.record_d66(category.stage(), code);
    CultureTrait::from_code(category, code)
}

pub(crate) fn roll_traits<D: DiceSource>(
    dice: &mut D,
    options: &CultureOptions,
    provenance: &mut Provenance,
) -> CultureTraits {
    let mut pick = |category| match options.fixed(category) {
        Some(code) => CultureTrait::from_code(category, code),
        None => roll_trait(dice, category, provenance),
    };
    CultureTraits {
        social: pick(CultureCategory::Social),
        economic: pick(CultureCategory::Economic),
        technological: pick(CultureCategory::Technological),
    }
}

/// Roll three culture traits, one per category.
pub fn generate_culture<D: DiceSource>(dice: &mut D, options: &CultureOptions) -> CultureRecord {
    let mut provenance = Provenance::new();
    let traits = roll_traits(dice, options, &mut provenance);

    debug!(traits = ?traits.names(), "Generated culture");

    CultureRecord {
        world_id: options.world_id,
        traits,
        provenance,
    }
}

/// Re-roll one trait and keep the other two.
pub fn reroll_culture_trait<D: DiceSource>(
    dice: &mut D,
    record: &CultureRecord,
    category: CultureCategory,
) -> CultureRecord {
    let mut provenance = record.provenance.without_stage(category.stage());
    let mut traits = record.traits.clone();
    *traits.slot(category) = roll_trait(dice, category, &mut provenance);

    CultureRecord {
        world_id: record.world_id,
        traits,
        provenance,
    }
}
