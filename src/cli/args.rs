//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::package::Category;
use crate::report::DEFAULT_LOG_FILE;

/// pacsort - sort explicitly installed pacman packages into categories.
#[derive(Debug, Parser)]
#[command(name = "pacsort")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "REPORTS:\n  \
    (none)          Sync with pacman and classify new packages\n  \
    s, system       List system packages\n  \
    p, program      List programs\n  \
    l, library      List libraries\n  \
    d, dependency   List dependencies\n  \
    a, all          List every category\n  \
    i, info         Show package statistics")]
pub struct Cli {
    /// Report to show instead of syncing
    pub report: Option<String>,

    /// Path to the classification store (defaults to packages.json next to the binary)
    #[arg(long, env = "PACSORT_STORE")]
    pub store: Option<PathBuf>,

    /// Package manager program to query
    #[arg(long, env = "PACSORT_PACMAN", default_value = "pacman")]
    pub pacman: String,

    /// pacman log used for the recently installed report
    #[arg(long, env = "PACSORT_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Number of entries in each statistics ranking
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top: usize,

    /// Never prompt; report pending packages instead
    #[arg(long)]
    pub non_interactive: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// What the positional `REPORT` argument asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Listing of one category.
    Category(Category),
    /// Every category in turn.
    All,
    /// Statistics report.
    Info,
}

impl ReportKind {
    /// Valid spellings, for error messages.
    pub const CHOICES: &'static str = "s, p, l, d, a, i (or system, program, library, dependency, all, info)";

    /// Parse a report name. Letters and full names are accepted, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "a" | "all" => Some(Self::All),
            "i" | "info" => Some(Self::Info),
            other => other.parse::<Category>().ok().map(Self::Category),
        }
    }
}
