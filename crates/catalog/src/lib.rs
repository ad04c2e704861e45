//! Identity and naming for generated entities
//!
//! Generators never own storage. They ask an injected [`NameSequence`] for a
//! default name and stamp each record with an [`Identity`].

pub mod identity;
pub mod naming;

pub use identity::{EntityKind, GenerationMethod, Identity, catalog_designation};
pub use naming::{AtomicNameSequence, CatalogNameSequence, NameSequence};

#[cfg(test)]
mod naming_test;
