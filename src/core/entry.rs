//! Records produced by scanning source lines.
//!
//! Both kinds are built once per match and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::file_basename;

/// Common view over anything found at a source location.
///
/// Provides the two diagnostic display forms used by progress output.
/// The machine-parsable form is the type's `Display` impl.
pub trait SourceRecord {
    fn file(&self) -> &str;
    fn line(&self) -> usize;

    /// Text describing what was found, without location.
    fn payload(&self) -> String;

    /// `<file>:<line>: <payload>`
    fn verbose(&self) -> String {
        format!("{}:{}: {}", self.file(), self.line(), self.payload())
    }

    /// `<payload> <basename>:<line>`
    fn short(&self) -> String {
        format!(
            "{} {}:{}",
            self.payload(),
            file_basename(self.file()),
            self.line()
        )
    }
}

/// One `NSLocalizedString("<key>", comment: "<translation>")` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedEntry {
    key: String,
    translation: String,
    file: String,
    line: usize,
}

impl LocalizedEntry {
    /// Callers must pass a non-empty key and a 1-based line number; the
    /// extractor only ever produces such entries.
    pub(crate) fn new(
        key: impl Into<String>,
        translation: impl Into<String>,
        file: impl Into<String>,
        line: usize,
    ) -> Self {
        let key = key.into();
        debug_assert!(!key.is_empty(), "localized entry key must not be empty");
        debug_assert!(line >= 1, "line numbers are 1-based");
        Self {
            key,
            translation: translation.into(),
            file: file.into(),
            line,
        }
    }

    /// Base-language text; also the deduplication key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Value written for `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Base => &self.key,
            Field::Translation => &self.translation,
        }
    }
}

impl SourceRecord for LocalizedEntry {
    fn file(&self) -> &str {
        &self.file
    }

    fn line(&self) -> usize {
        self.line
    }

    fn payload(&self) -> String {
        format!("{} {}", self.key, self.translation)
    }
}

impl fmt::Display for LocalizedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.key, self.translation, self.file, self.line
        )
    }
}

/// Quoted multi-byte text that is not wrapped in a localization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizableLiteral {
    text: String,
    file: String,
    line: usize,
}

impl LocalizableLiteral {
    pub(crate) fn new(text: impl Into<String>, file: impl Into<String>, line: usize) -> Self {
        debug_assert!(line >= 1, "line numbers are 1-based");
        Self {
            text: text.into(),
            file: file.into(),
            line,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl SourceRecord for LocalizableLiteral {
    fn file(&self) -> &str {
        &self.file
    }

    fn line(&self) -> usize {
        self.line
    }

    fn payload(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for LocalizableLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.text, self.file, self.line)
    }
}

/// Which text of an entry goes on the right-hand side of a resource line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The key itself, for the base (development) language.
    Base,
    /// The `comment:` text.
    Translation,
}
