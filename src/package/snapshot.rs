//! The installed package set at one point in time.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::Package;

/// Strip a version constraint or description tail from a dependency string.
///
/// `glibc>=2.38` -> `glibc`, `sh=5.2` -> `sh`, `python: scripting` -> `python`.
pub fn strip_constraint(dep: &str) -> &str {
    let end = dep
        .find(|c: char| matches!(c, '<' | '>' | '=' | ':'))
        .unwrap_or(dep.len());
    dep[..end].trim()
}

/// Installed packages in source order, indexed by name.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    packages: Vec<Package>,
    index: HashMap<String, usize>,
}

impl Snapshot {
    /// Build a snapshot. Later duplicates of a name are dropped.
    pub fn new(packages: Vec<Package>) -> Self {
        let mut kept = Vec::with_capacity(packages.len());
        let mut index = HashMap::with_capacity(packages.len());
        for pkg in packages {
            if index.contains_key(&pkg.name) {
                tracing::debug!("Ignoring duplicate package record '{}'", pkg.name);
                continue;
            }
            index.insert(pkg.name.clone(), kept.len());
            kept.push(pkg);
        }
        Self {
            packages: kept,
            index,
        }
    }

    /// All packages in source order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Installed package names.
    pub fn names(&self) -> BTreeSet<&str> {
        self.packages.iter().map(|p| p.name.as_str()).collect()
    }

    /// Exact name lookup.
    pub fn get(&self, name: &str) -> Option<&Package> {
        self.index.get(name).map(|&i| &self.packages[i])
    }

    /// Find the installed package satisfying a dependency string.
    ///
    /// Tries the stripped name as an exact key first, then scans provided
    /// names in source order. With several providers the first one wins.
    pub fn lookup(&self, dep: &str) -> Option<&Package> {
        let name = strip_constraint(dep);
        if name.is_empty() {
            return None;
        }
        if let Some(pkg) = self.get(name) {
            return Some(pkg);
        }
        self.packages
            .iter()
            .find(|pkg| pkg.provides.iter().any(|p| strip_constraint(p) == name))
    }

    /// Distinct direct dependencies of `pkg`.
    ///
    /// Resolved dependencies are keyed by the providing package, so `sh` and
    /// `bash` count once. Unresolvable names count by their stripped name.
    pub fn resolved_dependencies<'a>(&'a self, pkg: &'a Package) -> BTreeSet<&'a str> {
        let mut seen = BTreeSet::new();
        for dep in &pkg.depends_on {
            match self.lookup(dep) {
                Some(target) => seen.insert(target.name.as_str()),
                None => seen.insert(strip_constraint(dep)),
            };
        }
        seen.remove("");
        seen
    }

    /// Names in `self` but missing from `other`.
    pub fn missing_from<'a>(&'a self, other: &HashSet<&str>) -> Vec<&'a Package> {
        self.packages
            .iter()
            .filter(|p| !other.contains(p.name.as_str()))
            .collect()
    }
}

impl From<Vec<Package>> for Snapshot {
    fn from(packages: Vec<Package>) -> Self {
        Self::new(packages)
    }
}
