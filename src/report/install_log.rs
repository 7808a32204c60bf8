//! pacman install log parsing.
//!
//! Only `installed` transactions matter here; upgrades, removals and hook
//! output are skipped.

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::Result;

/// Default location of the pacman log.
pub const DEFAULT_LOG_FILE: &str = "/var/log/pacman.log";

/// `[timestamp] [ALPM] installed name (version)`; the `[ALPM]` tag is absent
/// in logs written by older pacman releases.
static INSTALLED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?P<ts>[^\]]+)\](?: \[[A-Za-z-]+\])? installed (?P<name>\S+) \((?P<version>[^)]*)\)")
        .expect("INSTALLED_REGEX must compile")
});

/// One `installed` line from the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallEvent {
    pub package: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Parse a log timestamp. Offset-less legacy stamps are taken as UTC.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    for format in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(ts, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Extract every install event from log text, in log order.
pub fn parse_install_log(content: &str) -> Vec<InstallEvent> {
    content
        .lines()
        .filter_map(|line| {
            let caps = INSTALLED_REGEX.captures(line)?;
            let timestamp = parse_timestamp(&caps["ts"])?;
            Some(InstallEvent {
                package: caps["name"].to_string(),
                version: caps["version"].to_string(),
                timestamp,
            })
        })
        .collect()
}

/// Read and parse a log file.
pub fn read_install_log(path: &Path) -> Result<Vec<InstallEvent>> {
    let bytes = std::fs::read(path)?;
    let events = parse_install_log(&String::from_utf8_lossy(&bytes));
    tracing::debug!("Read {} install events from {}", events.len(), path.display());
    Ok(events)
}
