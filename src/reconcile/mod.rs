//! Reconciliation of the classification store against the live package set.
//!
//! After [`reconcile`] returns, the store holds exactly the names in the
//! snapshot. Running it again on the same snapshot changes nothing.

use std::collections::HashSet;

use tracing::debug;

use crate::package::Snapshot;
use crate::store::ClassificationStore;

/// What a reconciliation pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Newly recorded packages, in snapshot order.
    pub added: Vec<String>,
    /// Dropped packages, in store (alphabetical) order.
    pub removed: Vec<String>,
}

impl ReconcileReport {
    /// True if the pass made no insertions or deletions.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Bring `store` in line with `snapshot`.
///
/// Packages only in the snapshot are inserted with a flag derived from their
/// install reason; packages only in the store are deleted. Descriptions of
/// surviving records are refreshed without being reported.
pub fn reconcile(store: &mut ClassificationStore, snapshot: &Snapshot) -> ReconcileReport {
    let stored: HashSet<&str> = store.packages.keys().map(String::as_str).collect();
    let to_add: Vec<_> = snapshot.missing_from(&stored);

    let removed: Vec<String> = store
        .packages
        .keys()
        .filter(|name| snapshot.get(name).is_none())
        .cloned()
        .collect();

    let mut report = ReconcileReport {
        added: Vec::with_capacity(to_add.len()),
        removed: Vec::with_capacity(removed.len()),
    };

    for pkg in to_add {
        debug!("Recording new package '{}' ({:?})", pkg.name, pkg.reason);
        store.insert(pkg);
        report.added.push(pkg.name.clone());
    }

    for name in removed {
        debug!("Dropping uninstalled package '{}'", name);
        store.remove(&name);
        report.removed.push(name);
    }

    for (name, record) in store.packages.iter_mut() {
        if let Some(pkg) = snapshot.get(name) {
            if record.description != pkg.description {
                record.description = pkg.description.clone();
            }
        }
    }

    report
}

/// Build a store from scratch for the first run.
pub fn populate(snapshot: &Snapshot) -> ClassificationStore {
    let mut store = ClassificationStore::new();
    for pkg in snapshot.packages() {
        store.insert(pkg);
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::{Category, InstallReason, Package};

    fn live(packages: Vec<Package>) -> Snapshot {
        Snapshot::new(packages)
    }

    #[test]
    fn reconcile_into_empty_store() {
        let snapshot = live(vec![
            Package::new("a", InstallReason::Explicit).with_size(10),
            Package::new("b", InstallReason::Dependency).with_size(5),
        ]);
        let mut store = ClassificationStore::new();

        let report = reconcile(&mut store, &snapshot);

        assert_eq!(report.added, vec!["a", "b"]);
        assert!(report.removed.is_empty());
        assert!(store.get("a").unwrap().is_pending());
        assert_eq!(store.get("a").unwrap().category, Category::Dependency);
        assert!(!store.get("b").unwrap().is_pending());
        assert_eq!(store.get("b").unwrap().category, Category::Dependency);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let snapshot = live(vec![
            Package::new("a", InstallReason::Explicit),
            Package::new("b", InstallReason::Dependency),
        ]);
        let mut store = ClassificationStore::new();

        let first = reconcile(&mut store, &snapshot);
        let after_first = store.clone();
        let second = reconcile(&mut store, &snapshot);

        assert!(!first.is_empty());
        assert!(second.is_empty());
        assert_eq!(store, after_first);
    }

    #[test]
    fn reconcile_removes_uninstalled_and_keeps_categories() {
        let mut store = populate(&live(vec![
            Package::new("old", InstallReason::Explicit),
            Package::new("kept", InstallReason::Explicit),
        ]));
        store.set_category("kept", Category::Program);

        let snapshot = live(vec![
            Package::new("kept", InstallReason::Explicit),
            Package::new("new", InstallReason::Dependency),
        ]);
        let report = reconcile(&mut store, &snapshot);

        assert_eq!(report.added, vec!["new"]);
        assert_eq!(report.removed, vec!["old"]);
        assert_eq!(store.get("kept").unwrap().category, Category::Program);
        assert!(!store.contains("old"));
    }

    #[test]
    fn store_names_equal_live_names_after_reconcile() {
        let mut store = populate(&live(vec![
            Package::new("x", InstallReason::Dependency),
            Package::new("y", InstallReason::Explicit),
        ]));
        let snapshot = live(vec![
            Package::new("y", InstallReason::Explicit),
            Package::new("z", InstallReason::Explicit),
            Package::new("w", InstallReason::Dependency),
        ]);

        reconcile(&mut store, &snapshot);

        assert_eq!(store.names(), snapshot.names());
    }

    #[test]
    fn reconcile_refreshes_descriptions_silently() {
        let mut store = populate(&live(vec![
            Package::new("a", InstallReason::Dependency).with_description("old text")
        ]));
        let snapshot =
            live(vec![Package::new("a", InstallReason::Dependency).with_description("new text")]);

        let report = reconcile(&mut store, &snapshot);

        assert!(report.is_empty());
        assert_eq!(store.get("a").unwrap().description, "new text");
    }

    #[test]
    fn reconcile_against_empty_snapshot_clears_store() {
        let mut store = populate(&live(vec![Package::new("a", InstallReason::Explicit)]));
        let report = reconcile(&mut store, &Snapshot::default());
        assert_eq!(report.removed, vec!["a"]);
        assert!(store.is_empty());
    }

    #[test]
    fn populate_records_everything() {
        let snapshot = live(vec![
            Package::new("a", InstallReason::Explicit),
            Package::new("b", InstallReason::Dependency),
        ]);
        let store = populate(&snapshot);
        assert_eq!(store.len(), 2);
        assert_eq!(store.pending().len(), 1);
    }
}
