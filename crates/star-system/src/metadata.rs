//! System identity.

use serde::{Deserialize, Serialize};

use catalog::{EntityKind, GenerationMethod, Identity, catalog_designation};

/// Who a system is and how to refer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetadata {
    #[serde(flatten)]
    pub identity: Identity,
    /// Short designation derived from the id, e.g. `"S-KV4729"`
    pub catalog_name: String,
}

impl SystemMetadata {
    pub fn new(name: impl Into<String>, generation_method: GenerationMethod) -> Self {
        Self::from_identity(Identity::new(name, generation_method))
    }

    /// Deterministic metadata: the same seed name always yields the same id
    pub fn from_seed_name(
        seed_name: &str,
        name: impl Into<String>,
        generation_method: GenerationMethod,
    ) -> Self {
        Self::from_identity(Identity::from_seed_name(seed_name, name, generation_method))
    }

    fn from_identity(identity: Identity) -> Self {
        let catalog_name = catalog_designation(EntityKind::System, &identity.id);
        Self {
            identity,
            catalog_name,
        }
    }

    /// A u64 derived from the id, suitable for seeding an RNG
    pub fn seed(&self) -> u64 {
        self.identity.seed()
    }

    pub fn display_name(&self) -> &str {
        &self.identity.name
    }
}
