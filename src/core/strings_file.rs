//! Reading and writing `Localizable.strings` resource files.
//!
//! Output is one `"<key>" = "<value>";` line per entry, sorted by key.
//! Writes only ever update a file that already exists.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

use super::entry::{Field, LocalizedEntry};
use crate::error::{Error, Result};

static STRINGS_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"((?:[^"\\]|\\.)*)"\s*=\s*"((?:[^"\\]|\\.)*)"\s*;\s*$"#).unwrap()
});

/// Render entries as resource file content, sorted by key.
///
/// Entries sharing a key keep their scan order, so rendering is
/// deterministic for a given input.
pub fn render_strings(entries: &[LocalizedEntry], field: Field) -> String {
    let mut sorted: Vec<&LocalizedEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.key().cmp(b.key()));

    sorted
        .iter()
        .map(|entry| format!("\"{}\" = \"{}\";\n", entry.key(), entry.value(field)))
        .collect()
}

fn ensure_target_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingTargetFile {
            path: path.to_path_buf(),
        })
    }
}

/// Replace the contents of an existing resource file.
///
/// Returns the number of lines written. Fails with
/// [`Error::MissingTargetFile`] without touching the filesystem if `path`
/// is not an existing file.
pub fn write_strings_file(entries: &[LocalizedEntry], path: &Path, field: Field) -> Result<usize> {
    ensure_target_exists(path)?;
    fs::write(path, render_strings(entries, field)).map_err(|e| Error::io(path, e))?;
    Ok(entries.len())
}

/// Parse one `"<key>" = "<value>";` line.
///
/// Returns `None` for blank lines, comments and anything else that is not a
/// single key/value pair. Escape sequences are kept verbatim.
pub fn parse_strings_line(line: &str) -> Option<(String, String)> {
    STRINGS_LINE_REGEX
        .captures(line)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}

/// Read all key/value pairs of a resource file in file order.
pub fn read_strings_file(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(content.lines().filter_map(parse_strings_line).collect())
}

/// What writing a resource file would change, computed without writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritePlan {
    pub path: PathBuf,
    pub field: Field,
    pub entry_count: usize,
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl WritePlan {
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.changed == 0
    }
}

/// Compare the entries against the current content of `path`.
///
/// Applies the same precondition as [`write_strings_file`].
pub fn plan_write(entries: &[LocalizedEntry], path: &Path, field: Field) -> Result<WritePlan> {
    ensure_target_exists(path)?;

    let existing: BTreeMap<String, String> = read_strings_file(path)?.into_iter().collect();
    let incoming: BTreeMap<&str, &str> = entries
        .iter()
        .map(|entry| (entry.key(), entry.value(field)))
        .collect();

    let existing_keys: BTreeSet<&str> = existing.keys().map(String::as_str).collect();
    let incoming_keys: BTreeSet<&str> = incoming.keys().copied().collect();

    let changed = incoming
        .iter()
        .filter(|(key, value)| {
            existing
                .get(**key)
                .is_some_and(|old| old.as_str() != **value)
        })
        .count();

    Ok(WritePlan {
        path: path.to_path_buf(),
        field,
        entry_count: entries.len(),
        added: incoming_keys.difference(&existing_keys).count(),
        removed: existing_keys.difference(&incoming_keys).count(),
        changed,
    })
}
