//! Core extraction engine.
//!
//! Line-oriented pattern matching over source text. Nothing here builds a
//! syntax tree; every record is produced from a single line.
//!
//! - `entry`: record types and their display forms
//! - `patterns`: the fixed regexes
//! - `extract`: localization call extraction
//! - `classify`: ad-hoc multi-byte literal detection
//! - `duplicates`: duplicate key detection
//! - `strings_file`: `Localizable.strings` reader/writer
//! - `scanner`: source file enumeration

pub mod classify;
pub mod duplicates;
pub mod entry;
pub mod extract;
pub mod patterns;
pub mod scanner;
pub mod strings_file;

pub use classify::{classify_line, classify_literals, classify_literals_in_file};
pub use duplicates::{DuplicateKey, find_duplicates};
pub use entry::{Field, LocalizableLiteral, LocalizedEntry, SourceRecord};
pub use extract::{extract_entries, extract_entries_from_file, extract_entries_from_line};
pub use scanner::{ScanResult, scan_files};
pub use strings_file::{
    WritePlan, parse_strings_line, plan_write, read_strings_file, render_strings,
    write_strings_file,
};
