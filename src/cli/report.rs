//! Progress and result printing.
//!
//! Every printer takes a writer so the CLI can be driven from tests.
//! Warnings go to stderr via [`print_warning`].

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{DuplicateKey, SourceRecord, WritePlan};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print_warning(message: &str) {
    let _ = writeln!(io::stderr().lock(), "{} {}", "warning:".bold().yellow(), message);
}

pub fn print_note(message: &str) {
    let _ = writeln!(io::stderr().lock(), "{} {}", "note:".bold().cyan(), message);
}

pub fn print_scan_header<W: Write>(dir: &Path, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "Scan".bold(), dir.display());
}

/// Print one scanned file with its record count and each record's verbose form.
pub fn print_file_records<R: SourceRecord, W: Write>(
    path: &Path,
    records: &[R],
    noun: &str,
    writer: &mut W,
) {
    let _ = writeln!(writer, "{}", path.display().to_string().cyan());
    let _ = writeln!(writer, "retrieve {} {}", records.len(), plural(noun, records.len()));
    for record in records {
        let _ = writeln!(writer, "\t{}", record.verbose());
    }
}

/// Print duplicate key pairs as `<existing> <=> <duplicate>`, aligned on `<=>`.
pub fn print_duplicates<W: Write>(duplicates: &[DuplicateKey<'_>], writer: &mut W) {
    let _ = writeln!(writer, "{}", "Check duplicate".bold());

    let pairs: Vec<(String, String)> = duplicates
        .iter()
        .map(|d| (d.existing.short(), d.duplicate.short()))
        .collect();
    let width = pairs
        .iter()
        .map(|(existing, _)| existing.width())
        .max()
        .unwrap_or(0);

    for (existing, duplicate) in &pairs {
        let padding = " ".repeat(width - existing.width());
        let _ = writeln!(
            writer,
            "\t{}{} {} {}",
            existing,
            padding,
            "<=>".yellow(),
            duplicate
        );
    }
}

pub fn print_write<W: Write>(path: &Path, count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} ({} {})",
        "Write".bold(),
        path.display(),
        count,
        plural("entry", count)
    );
}

pub fn print_plan<W: Write>(plan: &WritePlan, writer: &mut W) {
    let status = if plan.is_unchanged() {
        "unchanged".dimmed().to_string()
    } else {
        format!(
            "{} added, {} removed, {} changed",
            plan.added, plan.removed, plan.changed
        )
    };
    let _ = writeln!(
        writer,
        "{} {} ({} {}, {})",
        "Would write".bold(),
        plan.path.display(),
        plan.entry_count,
        plural("entry", plan.entry_count),
        status
    );
}

/// Print the final one-line summary.
pub fn print_summary<W: Write>(file_count: usize, record_count: usize, noun: &str, writer: &mut W) {
    let msg = format!(
        "Scanned {} {}, found {} {}",
        file_count,
        plural("file", file_count),
        record_count,
        plural(noun, record_count)
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about files that could not be read.
pub fn print_unreadable_warning(count: usize, verbose: bool) {
    if count > 0 && !verbose {
        print_warning(&format!(
            "{} file(s) could not be read (use {} for details)",
            count,
            "-v".cyan()
        ));
    }
}

fn plural(noun: &str, count: usize) -> String {
    if count == 1 {
        noun.to_string()
    } else if let Some(stem) = noun.strip_suffix('y') {
        format!("{stem}ies")
    } else {
        format!("{noun}s")
    }
}
