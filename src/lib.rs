//! swiftloc - NSLocalizedString extractor for Swift projects
//!
//! swiftloc scans Swift sources line by line for
//! `NSLocalizedString("<key>", comment: "<translation>")` calls, reports
//! duplicate keys, and rewrites pre-seeded `<locale>.lproj/Localizable.strings`
//! files. In check mode it instead reports quoted multi-byte literals that are
//! not localized yet.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine and resource file writer
//! - `error`: Library error type
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use error::{Error, Result};
