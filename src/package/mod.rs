//! Package records as reported by the package manager.
//!
//! - [`Package`] - one installed package
//! - [`Category`] / [`InstallReason`] - classification and install reason
//! - [`Snapshot`] - the installed set at one point in time, with name lookup
//! - [`size`] - parsing and formatting of installed sizes

pub mod category;
pub mod size;
pub mod snapshot;

pub use category::{Category, InstallReason};
pub use size::{format_size, parse_size};
pub use snapshot::{strip_constraint, Snapshot};

use serde::{Deserialize, Serialize};

/// An installed package.
///
/// Dependency and reverse-dependency edges are plain names, resolved
/// against a [`Snapshot`] when needed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Installed size in bytes.
    pub installed_size: u64,
    pub reason: InstallReason,
    /// Direct dependencies, possibly with version constraints (`glibc>=2.38`).
    pub depends_on: Vec<String>,
    pub required_by: Vec<String>,
    pub optional_for: Vec<String>,
    /// Virtual names this package satisfies (`sh`, `libfoo.so=1-64`).
    pub provides: Vec<String>,
}

impl Package {
    /// Create a package with just a name and install reason.
    pub fn new(name: impl Into<String>, reason: InstallReason) -> Self {
        Self {
            name: name.into(),
            reason,
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the installed size in bytes.
    pub fn with_size(mut self, bytes: u64) -> Self {
        self.installed_size = bytes;
        self
    }

    /// Set the direct dependencies.
    pub fn with_depends(mut self, depends: &[&str]) -> Self {
        self.depends_on = depends.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the packages that require this one.
    pub fn with_required_by(mut self, required_by: &[&str]) -> Self {
        self.required_by = required_by.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the packages this one is optional for.
    pub fn with_optional_for(mut self, optional_for: &[&str]) -> Self {
        self.optional_for = optional_for.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the provided names.
    pub fn with_provides(mut self, provides: &[&str]) -> Self {
        self.provides = provides.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Whether the user installed this package on purpose.
    pub fn is_explicit(&self) -> bool {
        self.reason == InstallReason::Explicit
    }
}
