//! Package categories and install reasons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-assigned classification of a package.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base system components (kernel, firmware, init, ...).
    System,
    /// User-facing applications.
    Program,
    /// Libraries installed on purpose.
    Library,
    /// Everything else; the default for new records.
    #[default]
    Dependency,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::System,
        Category::Program,
        Category::Library,
        Category::Dependency,
    ];

    /// Categories an operator can assign interactively.
    pub const ASSIGNABLE: [Category; 3] = [Category::System, Category::Program, Category::Library];

    /// Single-letter code used on the command line and in prompts.
    pub fn code(&self) -> char {
        match self {
            Self::System => 's',
            Self::Program => 'p',
            Self::Library => 'l',
            Self::Dependency => 'd',
        }
    }

    /// Lowercase name, as stored on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Program => "program",
            Self::Library => "library",
            Self::Dependency => "dependency",
        }
    }

    /// Plural heading used by listings.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::System => "System Packages",
            Self::Program => "Programs",
            Self::Library => "Libraries",
            Self::Dependency => "Dependencies",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the single-letter code or the full name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s" | "system" => Ok(Self::System),
            "p" | "program" => Ok(Self::Program),
            "l" | "library" => Ok(Self::Library),
            "d" | "dependency" => Ok(Self::Dependency),
            _ => Err(format!("unknown category: {}", s)),
        }
    }
}

/// Why a package was installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallReason {
    /// Explicitly installed by the user.
    Explicit,
    /// Pulled in as a dependency.
    #[default]
    Dependency,
}
