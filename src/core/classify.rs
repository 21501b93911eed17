//! Classifier for ad-hoc quoted literals (check mode).
//!
//! A cursor walks each line. The localization call, `print(...)` and a `//`
//! comment are tried first, in that order, anywhere in the rest of the line;
//! the first one found is skipped whole along with everything before it.
//! Only when none of them remain is a generic quoted string consumed, and it
//! is reported if its text is multi-byte.

use std::{fs, path::Path};

use regex::Regex;

use super::{
    entry::LocalizableLiteral,
    patterns::{LINE_COMMENT_REGEX, LOCALIZED_CALL_REGEX, PRINT_CALL_REGEX, QUOTED_STRING_REGEX},
};
use crate::error::{Error, Result};
use crate::utils::is_multibyte_text;

/// End of the first excluded construct at or after `pos`, by priority.
fn skip_excluded(line: &str, pos: usize) -> Option<usize> {
    let skip_patterns: [&Regex; 3] = [&LOCALIZED_CALL_REGEX, &PRINT_CALL_REGEX, &LINE_COMMENT_REGEX];

    skip_patterns
        .iter()
        .find_map(|re| re.find_at(line, pos))
        .map(|m| m.end())
}

/// Classify the quoted literals of a single line.
pub fn classify_line(line: &str, file: &str, line_number: usize) -> Vec<LocalizableLiteral> {
    let mut literals = Vec::new();
    let mut pos = 0;

    loop {
        if let Some(end) = skip_excluded(line, pos) {
            pos = end;
            continue;
        }
        let Some(m) = QUOTED_STRING_REGEX.find_at(line, pos) else {
            break;
        };
        // Strip the surrounding quotes.
        let text = &line[m.start() + 1..m.end() - 1];
        if is_multibyte_text(text) {
            literals.push(LocalizableLiteral::new(text, file, line_number));
        }
        pos = m.end();
    }

    literals
}

/// Classify every line of a file's content, numbering lines from 1.
pub fn classify_literals(content: &str, file: &str) -> Vec<LocalizableLiteral> {
    content
        .lines()
        .enumerate()
        .flat_map(|(index, line)| classify_line(line, file, index + 1))
        .collect()
}

pub fn classify_literals_in_file(path: &Path) -> Result<Vec<LocalizableLiteral>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(classify_literals(&content, &path.to_string_lossy()))
}
