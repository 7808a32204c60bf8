//! Statistics command implementation.
//!
//! `pacsort i` reads the live package set and the pacman log and prints
//! rankings. The store is not read or written.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;
use crate::package::{format_size, Snapshot};
use crate::report::{
    largest, most_dependencies, most_recent, read_install_log, summary, unneeded_explicit,
};
use crate::source::PackageSource;
use crate::ui::{PacsortTheme, Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The statistics command implementation.
pub struct StatsCommand {
    log_file: PathBuf,
    source: Box<dyn PackageSource>,
    top: usize,
    theme: PacsortTheme,
}

impl StatsCommand {
    /// Create a new statistics command.
    pub fn new(log_file: &Path, source: Box<dyn PackageSource>) -> Self {
        Self {
            log_file: log_file.to_path_buf(),
            source,
            top: 10,
            theme: PacsortTheme::detect(),
        }
    }

    /// Set how many entries each ranking shows.
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Use a specific theme.
    pub fn with_theme(mut self, theme: PacsortTheme) -> Self {
        self.theme = theme;
        self
    }

    fn print_table(&self, ui: &mut dyn UserInterface, title: &str, table: &Table) {
        ui.message("");
        ui.show_header(title);
        if table.is_empty() {
            ui.message(&format!("{}", self.theme.dim.apply_to("(none)")));
            return;
        }
        for line in table.render_lines() {
            ui.message(&line);
        }
    }

    fn show_summary(&self, snapshot: &Snapshot, ui: &mut dyn UserInterface) {
        let totals = summary(snapshot);
        ui.show_header("Package Statistics");
        ui.message(&format!(
            "Installed packages:   {}",
            self.theme.highlight.apply_to(totals.total)
        ));
        ui.message(&format!(
            "Explicitly installed: {}",
            self.theme.highlight.apply_to(totals.explicit)
        ));
        ui.message(&format!(
            "Total installed size: {}",
            self.theme.highlight.apply_to(format_size(totals.total_size))
        ));
    }

    fn show_largest(&self, snapshot: &Snapshot, ui: &mut dyn UserInterface) {
        let mut table = Table::new(vec!["#", "Package", "Size"])
            .align_right(0)
            .align_right(2);
        for (i, package) in largest(snapshot, self.top).into_iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                package.name.clone(),
                format_size(package.installed_size),
            ]);
        }
        self.print_table(ui, "Largest packages", &table);
    }

    fn show_recent(&self, snapshot: &Snapshot, ui: &mut dyn UserInterface) {
        let events = match read_install_log(&self.log_file) {
            Ok(events) => events,
            Err(e) => {
                tracing::debug!("Install log unavailable: {}", e);
                ui.warning(&format!(
                    "Could not read {} ({}); skipping recently installed packages",
                    self.log_file.display(),
                    e
                ));
                return;
            }
        };

        let mut table = Table::new(vec!["#", "Package", "Installed"]).align_right(0);
        for (i, install) in most_recent(&events, snapshot, self.top).into_iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                install.name,
                install
                    .installed_at
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
            ]);
        }
        self.print_table(ui, "Recently installed", &table);
    }

    fn show_most_dependencies(&self, snapshot: &Snapshot, ui: &mut dyn UserInterface) {
        let mut table = Table::new(vec!["#", "Package", "Dependencies"])
            .align_right(0)
            .align_right(2);
        for (i, ranked) in most_dependencies(snapshot, self.top).into_iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                ranked.package.name.clone(),
                ranked.count.to_string(),
            ]);
        }
        self.print_table(ui, "Most dependencies", &table);
    }

    fn show_unneeded(&self, snapshot: &Snapshot, ui: &mut dyn UserInterface) {
        let unneeded = unneeded_explicit(snapshot);
        ui.message("");
        ui.show_header("Explicitly installed, required by nothing");
        for package in &unneeded {
            ui.message(&self.theme.format_entry(&package.name, &package.describe()));
        }
        ui.message(&self.theme.format_rule());
        ui.message(&format!(
            "{} package{}",
            self.theme.highlight.apply_to(unneeded.len()),
            if unneeded.len() == 1 { "" } else { "s" }
        ));
    }
}

impl Command for StatsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut spinner = ui.start_spinner(&format!(
            "Reading installed packages from {}",
            self.source.name()
        ));
        let snapshot = match self.source.installed() {
            Ok(snapshot) => {
                spinner.finish_success(&format!("Read {} installed packages", snapshot.len()));
                snapshot
            }
            Err(e) => {
                spinner.finish_error("Could not read installed packages");
                return Err(e);
            }
        };

        self.show_summary(&snapshot, ui);
        self.show_largest(&snapshot, ui);
        self.show_recent(&snapshot, ui);
        self.show_most_dependencies(&snapshot, ui);
        self.show_unneeded(&snapshot, ui);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::{InstallReason, Package};
    use crate::source::StaticSource;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    const LOG: &str = "\
[2024-02-01T10:00:00+0000] [ALPM] installed vim (9.1.0-1)
[2024-02-03T10:00:00+0000] [ALPM] installed zlib (1.3-1)
[2024-02-05T10:00:00+0000] [ALPM] installed firefox (122.0-1)
";

    fn source() -> Box<dyn PackageSource> {
        Box::new(StaticSource::new(vec![
            Package::new("firefox", InstallReason::Explicit)
                .with_size(250 * 1024 * 1024)
                .with_depends(&["zlib", "gtk3"]),
            Package::new("vim", InstallReason::Explicit)
                .with_size(3 * 1024 * 1024)
                .with_depends(&["zlib"])
                .with_optional_for(&["neovim-qt"]),
            Package::new("zlib", InstallReason::Dependency)
                .with_size(200 * 1024)
                .with_required_by(&["firefox", "vim"]),
        ]))
    }

    fn run(log_file: &Path, top: usize) -> MockUI {
        let cmd = StatsCommand::new(log_file, source())
            .with_top(top)
            .with_theme(PacsortTheme::plain());
        let mut ui = MockUI::new();
        assert!(cmd.execute(&mut ui).unwrap().success);
        ui
    }

    #[test]
    fn prints_every_section() {
        let temp = TempDir::new().unwrap();
        let log = temp.path().join("pacman.log");
        std::fs::write(&log, LOG).unwrap();

        let ui = run(&log, 10);

        assert_eq!(
            ui.headers(),
            vec![
                "Package Statistics",
                "Largest packages",
                "Recently installed",
                "Most dependencies",
                "Explicitly installed, required by nothing",
            ]
        );
        assert!(ui.has_message("Installed packages:   3"));
        assert!(ui.has_message("Explicitly installed: 2"));
        assert!(ui.has_message("1  firefox  250.00 MiB"));
        assert!(ui.has_message("vim (optional for neovim-qt)"));
        assert!(ui.has_message("firefox (not needed by any package)"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn recent_lists_explicit_packages_newest_first() {
        let temp = TempDir::new().unwrap();
        let log = temp.path().join("pacman.log");
        std::fs::write(&log, LOG).unwrap();

        let ui = run(&log, 10);

        let firefox = ui
            .messages()
            .iter()
            .position(|m| m.starts_with("1  firefox  2024-02-0"));
        let vim = ui.messages().iter().position(|m| m.starts_with("2  vim"));
        assert!(firefox.is_some());
        assert!(vim.is_some());
        assert!(!ui.messages().iter().any(|m| m.contains("zlib  2024")));
    }

    #[test]
    fn missing_log_skips_section_with_warning() {
        let temp = TempDir::new().unwrap();

        let ui = run(&temp.path().join("missing.log"), 10);

        assert!(ui.has_warning("skipping recently installed packages"));
        assert!(!ui.headers().contains(&"Recently installed"));
        assert!(ui.headers().contains(&"Most dependencies"));
    }

    #[test]
    fn top_limits_rankings() {
        let temp = TempDir::new().unwrap();
        let ui = run(&temp.path().join("missing.log"), 1);

        assert!(ui.has_message("1  firefox"));
        assert!(!ui.messages().iter().any(|m| m.starts_with("2  ")));
    }
}
