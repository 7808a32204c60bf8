//! Package sources.
//!
//! A [`PackageSource`] produces a read-only [`Snapshot`] of the installed
//! package set. [`PacmanSource`] asks pacman; [`StaticSource`] serves a fixed
//! list and is what tests and embedding code use.

pub mod pacman;

pub use pacman::{parse_query_output, PacmanSource};

use crate::error::Result;
use crate::package::{Package, Snapshot};

/// Something that can list the installed packages.
pub trait PackageSource {
    /// Short identifier for log and error messages.
    fn name(&self) -> &str;

    /// Take a snapshot of the installed packages.
    fn installed(&self) -> Result<Snapshot>;
}

/// A source that always returns the same packages.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    packages: Vec<Package>,
}

impl StaticSource {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }
}

impl PackageSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn installed(&self) -> Result<Snapshot> {
        Ok(Snapshot::new(self.packages.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::InstallReason;

    #[test]
    fn static_source_returns_packages() {
        let source = StaticSource::new(vec![
            Package::new("a", InstallReason::Explicit),
            Package::new("b", InstallReason::Dependency),
        ]);
        let snapshot = source.installed().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(source.name(), "static");
    }
}
