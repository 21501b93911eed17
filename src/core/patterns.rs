//! Fixed line-level patterns recognized in Swift sources.
//!
//! Every capture is a run of non-quote characters, so no pattern can match
//! an empty span and a call split across lines is never recognized.

use std::sync::LazyLock;

use regex::Regex;

/// `NSLocalizedString("<key>", comment: "<translation>")`
pub static LOCALIZED_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"NSLocalizedString\("([^"]+)",\s*comment:\s*"([^"]+)"\)"#).unwrap()
});

/// `print("<text>")`
pub static PRINT_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"print\("([^"]+)"\)"#).unwrap());

/// `//` through end of line.
pub static LINE_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*").unwrap());

pub static QUOTED_STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).unwrap());
