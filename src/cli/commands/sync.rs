//! Sync command implementation.
//!
//! `pacsort` with no report argument brings the store in line with pacman
//! (or creates it on the first run) and then asks about pending packages.

use std::path::{Path, PathBuf};

use crate::classify::classify_pending;
use crate::error::Result;
use crate::package::Snapshot;
use crate::reconcile::{populate, reconcile};
use crate::source::PackageSource;
use crate::store::ClassificationStore;
use crate::ui::{PacsortTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The sync command implementation.
pub struct SyncCommand {
    store_path: PathBuf,
    source: Box<dyn PackageSource>,
    theme: PacsortTheme,
}

impl SyncCommand {
    /// Create a new sync command.
    pub fn new(store_path: &Path, source: Box<dyn PackageSource>) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
            source,
            theme: PacsortTheme::detect(),
        }
    }

    /// Use a specific theme.
    pub fn with_theme(mut self, theme: PacsortTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Get the store path.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    fn read_installed(&self, ui: &mut dyn UserInterface) -> Result<Snapshot> {
        let mut spinner = ui.start_spinner(&format!(
            "Reading installed packages from {}",
            self.source.name()
        ));
        match self.source.installed() {
            Ok(snapshot) => {
                spinner.finish_success(&format!("Read {} installed packages", snapshot.len()));
                Ok(snapshot)
            }
            Err(e) => {
                spinner.finish_error("Could not read installed packages");
                Err(e)
            }
        }
    }

    fn import(&self, snapshot: &Snapshot, ui: &mut dyn UserInterface) -> Result<ClassificationStore> {
        let store = populate(snapshot);
        store.save(&self.store_path)?;
        ui.success("Data imported.");
        ui.message(&format!(
            "{} packages recorded in {}",
            store.len(),
            self.store_path.display()
        ));
        Ok(store)
    }

    fn update(
        &self,
        mut store: ClassificationStore,
        snapshot: &Snapshot,
        ui: &mut dyn UserInterface,
    ) -> Result<ClassificationStore> {
        let report = reconcile(&mut store, snapshot);
        store.save(&self.store_path)?;

        if report.is_empty() {
            tracing::debug!("Store already matches the installed packages");
            if ui.output_mode().shows_details() {
                ui.message(&format!(
                    "{} packages in {} already match pacman",
                    store.len(),
                    self.store_path.display()
                ));
            }
            return Ok(store);
        }

        if ui.output_mode().shows_status() {
            for name in &report.added {
                ui.message(&self.theme.format_added(name));
            }
            for name in &report.removed {
                ui.message(&self.theme.format_removed(name));
            }
        }
        Ok(store)
    }
}

impl Command for SyncCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let snapshot = self.read_installed(ui)?;

        let mut store = match ClassificationStore::load(&self.store_path)? {
            Some(store) => self.update(store, &snapshot, ui)?,
            None => self.import(&snapshot, ui)?,
        };

        let outcome = classify_pending(&mut store, ui, &self.theme);
        store.save(&self.store_path)?;
        let summary = outcome?;

        if summary.classified > 0 {
            ui.success(&format!(
                "Sorted {} package{}",
                summary.classified,
                if summary.classified == 1 { "" } else { "s" }
            ));
        }

        Ok(CommandResult::success())
    }
}
