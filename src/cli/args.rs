//! CLI argument definitions using clap.
//!
//! swiftloc has a single mode switch rather than subcommands:
//!
//! - default: extract `NSLocalizedString` calls, report duplicate keys and
//!   rewrite each configured `<locale>.lproj/Localizable.strings`
//! - `--check`: report quoted multi-byte literals that are not localized yet

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root to scan recursively
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Report what would be written without modifying any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Report hardcoded multi-byte string literals instead of writing resources
    #[arg(short, long)]
    pub check: bool,

    /// Config file path (default: search for .swiftlocrc.json upwards from DIR)
    #[arg(long, env = "SWIFTLOC_CONFIG")]
    pub config: Option<PathBuf>,
}
