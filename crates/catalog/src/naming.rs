//! Default-name services.
//!
//! The only shared mutable state in generation is the counter behind default
//! names. It lives behind [`NameSequence`] so callers can back it with an
//! atomic, a database sequence or UUID-derived designations.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::identity::{EntityKind, catalog_designation};

/// Source of default names, called once per generated entity
pub trait NameSequence: Send + Sync {
    fn next_name(&self, kind: EntityKind) -> String;
}

/// Process-wide incrementing counter ("Star 0001", "World 0002", ...)
///
/// One counter is shared across all entity kinds, matching a single
/// persistent sequence.
#[derive(Debug, Default)]
pub struct AtomicNameSequence {
    prefix: Option<String>,
    counter: AtomicU64,
}

impl AtomicNameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously persisted value
    pub fn starting_at(next: u64) -> Self {
        Self {
            prefix: None,
            counter: AtomicU64::new(next.saturating_sub(1)),
        }
    }

    /// Prepend a prefix such as a sector name (builder pattern)
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Value the next call will use
    pub fn peek(&self) -> u64 {
        self.counter.load(Ordering::SeqCst) + 1
    }
}

impl NameSequence for AtomicNameSequence {
    fn next_name(&self, kind: EntityKind) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        match &self.prefix {
            Some(prefix) => format!("{prefix} {} {n:04}", kind.label()),
            None => format!("{} {n:04}", kind.label()),
        }
    }
}

/// Stateless names built from fresh UUIDs ("K-QX0193")
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogNameSequence;

impl NameSequence for CatalogNameSequence {
    fn next_name(&self, kind: EntityKind) -> String {
        catalog_designation(kind, &Uuid::new_v4())
    }
}
