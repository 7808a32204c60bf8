//! Runtime settings.
//!
//! pacsort has no configuration file. Everything is resolved from the
//! command line, with clap supplying the `PACSORT_*` environment fallbacks.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::report::DEFAULT_LOG_FILE;
use crate::store::default_store_path;

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Location of the classification store.
    pub store_path: PathBuf,
    /// Package manager program.
    pub pacman: String,
    /// pacman log read by the statistics report.
    pub log_file: PathBuf,
    /// Entries per statistics ranking.
    pub top: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            pacman: "pacman".to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            top: 10,
        }
    }
}

impl Settings {
    /// Resolve settings from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let settings = Self {
            store_path: cli.store.clone().unwrap_or_else(default_store_path),
            pacman: cli.pacman.clone(),
            log_file: cli.log_file.clone(),
            top: cli.top,
        };
        tracing::debug!("Resolved settings: {:?}", settings);
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn explicit_store_path_wins() {
        let cli = Cli::try_parse_from(["pacsort", "--store", "/data/sorted.json"]).unwrap();
        let settings = Settings::from_cli(&cli);
        assert_eq!(settings.store_path, PathBuf::from("/data/sorted.json"));
    }

    #[test]
    fn store_defaults_next_to_executable() {
        let cli = Cli::try_parse_from(["pacsort"]).unwrap();
        if cli.store.is_none() {
            let settings = Settings::from_cli(&cli);
            assert!(settings.store_path.ends_with("packages.json"));
        }
    }

    #[test]
    fn options_carry_through() {
        let cli = Cli::try_parse_from([
            "pacsort",
            "--pacman",
            "/usr/local/bin/fake-pacman",
            "--log-file",
            "/tmp/pacman.log",
            "--top",
            "5",
        ])
        .unwrap();
        let settings = Settings::from_cli(&cli);
        assert_eq!(settings.pacman, "/usr/local/bin/fake-pacman");
        assert_eq!(settings.log_file, PathBuf::from("/tmp/pacman.log"));
        assert_eq!(settings.top, 5);
    }
}
