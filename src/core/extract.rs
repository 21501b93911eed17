//! Pattern extractor for localization calls.
//!
//! Matching is line-local and left to right. Each search resumes right after
//! the previous match, so several calls on one line each produce an entry.

use std::{fs, path::Path};

use super::{entry::LocalizedEntry, patterns::LOCALIZED_CALL_REGEX};
use crate::error::{Error, Result};

/// Extract every localization call on a single line.
pub fn extract_entries_from_line(line: &str, file: &str, line_number: usize) -> Vec<LocalizedEntry> {
    LOCALIZED_CALL_REGEX
        .captures_iter(line)
        .map(|caps| LocalizedEntry::new(&caps[1], &caps[2], file, line_number))
        .collect()
}

/// Extract entries from a whole file's content, numbering lines from 1.
pub fn extract_entries(content: &str, file: &str) -> Vec<LocalizedEntry> {
    content
        .lines()
        .enumerate()
        .flat_map(|(index, line)| extract_entries_from_line(line, file, index + 1))
        .collect()
}

pub fn extract_entries_from_file(path: &Path) -> Result<Vec<LocalizedEntry>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(extract_entries(&content, &path.to_string_lossy()))
}
