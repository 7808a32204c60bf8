//! pacsort - sort explicitly installed pacman packages into categories.
//!
//! pacsort keeps a small JSON store mapping every installed package to a
//! category (system, program, library or dependency). Each run reconciles
//! the store against pacman and asks the operator to classify any newly
//! explicitly installed packages.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`classify`] - Interactive classification of pending packages
//! - [`config`] - Runtime settings
//! - [`error`] - Error types and result aliases
//! - [`package`] - Package records, categories and snapshot lookup
//! - [`reconcile`] - Store/live-set reconciliation
//! - [`report`] - Listings, rankings and install-log parsing
//! - [`source`] - Package sources (pacman, static)
//! - [`store`] - The persisted classification store
//! - [`ui`] - Prompts, spinners, tables and terminal output
//!
//! # Example
//!
//! ```
//! use pacsort::package::{Category, InstallReason, Package, Snapshot};
//! use pacsort::reconcile::{populate, reconcile};
//!
//! let mut store = populate(&Snapshot::new(vec![
//!     Package::new("vim", InstallReason::Explicit),
//! ]));
//! assert_eq!(store.pending().len(), 1);
//!
//! let report = reconcile(&mut store, &Snapshot::new(vec![
//!     Package::new("vim", InstallReason::Explicit),
//!     Package::new("zlib", InstallReason::Dependency),
//! ]));
//! assert_eq!(report.added, vec!["zlib"]);
//! assert_eq!(store.get("zlib").unwrap().category, Category::Dependency);
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod package;
pub mod reconcile;
pub mod report;
pub mod source;
pub mod store;
pub mod ui;

pub use error::{PacsortError, Result};
