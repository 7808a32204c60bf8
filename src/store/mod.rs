//! Persistent classification store.
//!
//! The store is a single JSON document mapping package names to their
//! description and category. It is the only state pacsort owns; everything
//! else is read from the package manager on each run.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PacsortError, Result};
use crate::package::{Category, Package};

/// File name used when no store path is configured.
pub const DEFAULT_STORE_FILE: &str = "packages.json";

/// One classified package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPackage {
    pub description: String,
    #[serde(default)]
    pub category: Category,
    /// Installed explicitly when first recorded.
    #[serde(default)]
    pub explicit: bool,
}

impl StoredPackage {
    /// Explicitly installed but not yet given a category by the operator.
    pub fn is_pending(&self) -> bool {
        self.explicit && self.category == Category::Dependency
    }
}

/// The persisted `(name, description, flag)` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationStore {
    /// Schema version for migration.
    pub version: u32,

    /// Records keyed by package name.
    #[serde(default)]
    pub packages: BTreeMap<String, StoredPackage>,
}

impl Default for ClassificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationStore {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 1;

    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            packages: BTreeMap::new(),
        }
    }

    /// Load the store, or `None` if it has never been written.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let store: Self =
            serde_json::from_str(&content).map_err(|e| PacsortError::StoreParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Loaded {} records from {}",
            store.packages.len(),
            path.display()
        );
        Ok(Some(store))
    }

    /// Save the store using write-to-temp-then-rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| PacsortError::StoreSerialize {
                message: e.to_string(),
            })?;

        let temp_path = temp_path_for(path);
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)?;

        tracing::debug!(
            "Saved {} records to {}",
            self.packages.len(),
            path.display()
        );
        Ok(())
    }

    /// Record a newly seen package.
    ///
    /// Explicit installs start pending; dependencies start as `dependency`.
    pub fn insert(&mut self, pkg: &Package) {
        self.packages.insert(
            pkg.name.clone(),
            StoredPackage {
                description: pkg.description.clone(),
                category: Category::Dependency,
                explicit: pkg.is_explicit(),
            },
        );
    }

    /// Remove a record, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<StoredPackage> {
        self.packages.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&StoredPackage> {
        self.packages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Recorded names, sorted.
    pub fn names(&self) -> BTreeSet<&str> {
        self.packages.keys().map(String::as_str).collect()
    }

    /// Assign a category. Returns false if the package is unknown.
    pub fn set_category(&mut self, name: &str, category: Category) -> bool {
        match self.packages.get_mut(name) {
            Some(record) => {
                record.category = category;
                true
            }
            None => false,
        }
    }

    /// Records awaiting classification, alphabetically.
    pub fn pending(&self) -> Vec<(&str, &StoredPackage)> {
        self.packages
            .iter()
            .filter(|(_, record)| record.is_pending())
            .map(|(name, record)| (name.as_str(), record))
            .collect()
    }

    /// Records in one category, alphabetically.
    pub fn in_category(&self, category: Category) -> Vec<(&str, &StoredPackage)> {
        self.packages
            .iter()
            .filter(|(_, record)| record.category == category)
            .map(|(name, record)| (name.as_str(), record))
            .collect()
    }

    /// Number of records per category, in [`Category::ALL`] order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .packages
                    .values()
                    .filter(|r| r.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }
}

/// Default store location: next to the running executable.
pub fn default_store_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_STORE_FILE)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_STORE_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}
