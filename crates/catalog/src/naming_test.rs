use std::sync::Arc;
use std::thread;

use crate::identity::EntityKind;
use crate::naming::{AtomicNameSequence, CatalogNameSequence, NameSequence};

#[test]
fn test_sequence_increments_across_kinds() {
    let names = AtomicNameSequence::new();

    assert_eq!(names.next_name(EntityKind::Star), "Star 0001");
    assert_eq!(names.next_name(EntityKind::World), "World 0002");
    assert_eq!(names.peek(), 3);
}

#[test]
fn test_sequence_resumes_and_prefixes() {
    let names = AtomicNameSequence::starting_at(42).with_prefix("Spinward");

    assert_eq!(names.next_name(EntityKind::Planet), "Spinward Planet 0042");
}

#[test]
fn test_sequence_is_unique_under_concurrency() {
    let names = Arc::new(AtomicNameSequence::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let names = Arc::clone(&names);
            thread::spawn(move || {
                (0..250)
                    .map(|_| names.next_name(EntityKind::Star))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all: Vec<String> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort();
    all.dedup();

    assert_eq!(all.len(), 1000);
}

#[test]
fn test_catalog_sequence_uses_kind_prefix() {
    let name = CatalogNameSequence.next_name(EntityKind::Moon);
    assert!(name.starts_with("L-"));
}
