//! Listings and rankings.
//!
//! Everything here is a pure function over a [`Snapshot`] or the
//! [`ClassificationStore`]; commands decide how to print the results.

pub mod install_log;

pub use install_log::{parse_install_log, read_install_log, InstallEvent, DEFAULT_LOG_FILE};

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::package::{Category, Package, Snapshot};
use crate::store::ClassificationStore;

/// One line of a category listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub description: String,
}

/// Records in `category`, alphabetically.
pub fn category_listing(store: &ClassificationStore, category: Category) -> Vec<ListingEntry> {
    store
        .in_category(category)
        .into_iter()
        .map(|(name, record)| ListingEntry {
            name: name.to_string(),
            description: record.description.clone(),
        })
        .collect()
}

/// The `n` largest packages by installed size. Ties keep snapshot order.
pub fn largest(snapshot: &Snapshot, n: usize) -> Vec<&Package> {
    let mut packages: Vec<&Package> = snapshot.packages().iter().collect();
    packages.sort_by(|a, b| b.installed_size.cmp(&a.installed_size));
    packages.truncate(n);
    packages
}

/// A package together with its distinct direct dependency count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyCount<'a> {
    pub package: &'a Package,
    pub count: usize,
}

/// The `n` packages with the most direct dependencies. Ties keep snapshot order.
pub fn most_dependencies(snapshot: &Snapshot, n: usize) -> Vec<DependencyCount<'_>> {
    let mut counts: Vec<DependencyCount<'_>> = snapshot
        .packages()
        .iter()
        .map(|package| DependencyCount {
            package,
            count: snapshot.resolved_dependencies(package).len(),
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Most recent install of a currently explicit package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentInstall {
    pub name: String,
    pub installed_at: DateTime<Utc>,
}

/// The `n` most recently installed packages that are explicitly installed now.
///
/// Only the latest install of each package counts. Equal timestamps are
/// ordered by name.
pub fn most_recent(events: &[InstallEvent], snapshot: &Snapshot, n: usize) -> Vec<RecentInstall> {
    let mut latest: HashMap<&str, DateTime<Utc>> = HashMap::new();
    for event in events {
        let entry = latest
            .entry(event.package.as_str())
            .or_insert(event.timestamp);
        if event.timestamp > *entry {
            *entry = event.timestamp;
        }
    }

    let mut recent: Vec<RecentInstall> = latest
        .into_iter()
        .filter(|(name, _)| snapshot.get(name).is_some_and(Package::is_explicit))
        .map(|(name, installed_at)| RecentInstall {
            name: name.to_string(),
            installed_at,
        })
        .collect();
    recent.sort_by(|a, b| {
        b.installed_at
            .cmp(&a.installed_at)
            .then_with(|| a.name.cmp(&b.name))
    });
    recent.truncate(n);
    recent
}

/// An explicitly installed package nothing requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnneededPackage {
    pub name: String,
    pub description: String,
    pub installed_size: u64,
    /// Packages that list this one as an optional dependency.
    pub optional_for: Vec<String>,
}

impl UnneededPackage {
    /// Human phrasing of the optional-for set.
    pub fn describe(&self) -> String {
        match self.optional_for.as_slice() {
            [] => "not needed by any package".to_string(),
            [one] => format!("optional for {}", one),
            [first, second] => format!("optional for {} and {}", first, second),
            [first, second, rest @ ..] => {
                format!("optional for {}, {} and {} more", first, second, rest.len())
            }
        }
    }
}

/// Explicit packages with no reverse dependencies, in snapshot order.
pub fn unneeded_explicit(snapshot: &Snapshot) -> Vec<UnneededPackage> {
    snapshot
        .packages()
        .iter()
        .filter(|p| p.is_explicit() && p.required_by.is_empty())
        .map(|p| UnneededPackage {
            name: p.name.clone(),
            description: p.description.clone(),
            installed_size: p.installed_size,
            optional_for: p.optional_for.clone(),
        })
        .collect()
}

/// Totals over the installed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackageSummary {
    pub total: usize,
    pub explicit: usize,
    pub total_size: u64,
}

pub fn summary(snapshot: &Snapshot) -> PackageSummary {
    let packages = snapshot.packages();
    PackageSummary {
        total: packages.len(),
        explicit: packages.iter().filter(|p| p.is_explicit()).count(),
        total_size: packages.iter().map(|p| p.installed_size).sum(),
    }
}
