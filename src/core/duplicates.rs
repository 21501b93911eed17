//! Duplicate key detection across all scanned files.

use std::collections::HashMap;

use super::entry::LocalizedEntry;

/// A later entry reusing a key that was first seen at `existing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey<'a> {
    pub existing: &'a LocalizedEntry,
    pub duplicate: &'a LocalizedEntry,
}

/// Finds every entry whose key was already seen, in encounter order.
///
/// The first entry for a key stays the reference point: a third occurrence
/// is reported against the first one, not the second.
pub fn find_duplicates(entries: &[LocalizedEntry]) -> Vec<DuplicateKey<'_>> {
    let mut first_seen: HashMap<&str, &LocalizedEntry> = HashMap::new();
    let mut duplicates = Vec::new();

    for entry in entries {
        match first_seen.get(entry.key()).copied() {
            Some(existing) => duplicates.push(DuplicateKey {
                existing,
                duplicate: entry,
            }),
            None => {
                first_seen.insert(entry.key(), entry);
            }
        }
    }

    duplicates
}
