//! Common utility functions shared across the codebase.

use std::path::Path;

/// Checks if the text contains at least one multi-byte encoded character.
///
/// The UTF-8 byte length exceeds the character count exactly when some
/// character needs more than one byte. Plain ASCII identifiers, format
/// strings and punctuation never qualify.
///
/// # Examples
///
/// ```
/// use swiftloc::utils::is_multibyte_text;
///
/// assert!(is_multibyte_text("日本語"));
/// assert!(is_multibyte_text("Café"));
/// assert!(!is_multibyte_text("Hello"));
/// assert!(!is_multibyte_text(""));
/// ```
pub fn is_multibyte_text(text: &str) -> bool {
    text.len() > text.chars().count()
}

/// Returns the final path component, or the whole path if there is none.
pub fn file_basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
