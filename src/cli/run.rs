//! Command execution for both modes.
//!
//! Phases run strictly in order: enumerate sources, extract per file,
//! check duplicates over the aggregate, then write one file per locale.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{args::Arguments, report};
use crate::config::{Config, load_config, load_config_file};
use crate::core::{
    LocalizableLiteral, LocalizedEntry, SourceRecord, classify_literals_in_file, extract_entries_from_file,
    find_duplicates, plan_write, scan_files, write_strings_file,
};
use crate::error::Error;

/// Counts gathered by a run, for the caller to report or assert on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub records_found: usize,
    pub duplicate_count: usize,
    pub unreadable_count: usize,
    pub written: Vec<PathBuf>,
}

pub fn run<W: Write>(args: &Arguments, writer: &mut W) -> Result<RunSummary> {
    let config = resolve_config(args)?;

    if args.check {
        check_literals(args, &config, writer)
    } else {
        scan_and_write(args, &config, writer)
    }
}

fn resolve_config(args: &Arguments) -> Result<Config> {
    if let Some(path) = &args.config {
        return load_config_file(path);
    }

    let loaded = load_config(&args.dir)?;
    if args.verbose {
        match &loaded.source {
            Some(path) => report::print_note(&format!("using config {}", path.display())),
            None => report::print_note("no config file found, using defaults"),
        }
    }
    Ok(loaded.config)
}

/// Collect records from every source file under the root, printing progress.
fn scan_sources<R, W, F>(
    args: &Arguments,
    config: &Config,
    noun: &str,
    writer: &mut W,
    mut extract: F,
) -> (Vec<R>, RunSummary)
where
    R: SourceRecord,
    W: Write,
    F: FnMut(&Path) -> Result<Vec<R>, Error>,
{
    report::print_scan_header(&args.dir, writer);

    let scan = scan_files(
        &args.dir,
        &config.source_extensions,
        &config.ignores,
        args.verbose,
    );
    let mut summary = RunSummary {
        unreadable_count: scan.skipped_count,
        ..RunSummary::default()
    };
    let mut records = Vec::new();

    for file in &scan.files {
        match extract(file) {
            Ok(file_records) => {
                report::print_file_records(file, &file_records, noun, writer);
                summary.files_scanned += 1;
                records.extend(file_records);
            }
            Err(err) => {
                summary.unreadable_count += 1;
                if args.verbose {
                    report::print_warning(&err.to_string());
                }
            }
        }
    }

    summary.records_found = records.len();
    (records, summary)
}

fn check_literals<W: Write>(args: &Arguments, config: &Config, writer: &mut W) -> Result<RunSummary> {
    let (_literals, summary): (Vec<LocalizableLiteral>, _) =
        scan_sources(args, config, "literal", writer, classify_literals_in_file);

    report::print_unreadable_warning(summary.unreadable_count, args.verbose);
    report::print_summary(summary.files_scanned, summary.records_found, "literal", writer);
    Ok(summary)
}

fn scan_and_write<W: Write>(args: &Arguments, config: &Config, writer: &mut W) -> Result<RunSummary> {
    let (entries, mut summary): (Vec<LocalizedEntry>, _) =
        scan_sources(args, config, "string", writer, extract_entries_from_file);

    let duplicates = find_duplicates(&entries);
    report::print_duplicates(&duplicates, writer);
    summary.duplicate_count = duplicates.len();

    for (path, field) in config.resource_paths(&args.dir) {
        if args.dry_run {
            let plan = plan_write(&entries, &path, field)
                .context("Failed to plan resource file update")?;
            report::print_plan(&plan, writer);
        } else {
            let count = write_strings_file(&entries, &path, field)
                .context("Failed to update resource file")?;
            report::print_write(&path, count, writer);
            summary.written.push(path);
        }
    }

    report::print_unreadable_warning(summary.unreadable_count, args.verbose);
    report::print_summary(summary.files_scanned, summary.records_found, "string", writer);
    Ok(summary)
}
