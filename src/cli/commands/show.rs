//! Category listing command.
//!
//! `pacsort s|p|l|d` lists one category from the store; `pacsort a` lists
//! all of them followed by a count summary. pacman is not consulted.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::package::Category;
use crate::report::category_listing;
use crate::store::ClassificationStore;
use crate::ui::{PacsortTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Which categories to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    One(Category),
    All,
}

/// The listing command implementation.
pub struct ShowCommand {
    store_path: PathBuf,
    listing: Listing,
    theme: PacsortTheme,
}

impl ShowCommand {
    /// Create a new listing command.
    pub fn new(store_path: &Path, listing: Listing) -> Self {
        Self {
            store_path: store_path.to_path_buf(),
            listing,
            theme: PacsortTheme::detect(),
        }
    }

    /// Use a specific theme.
    pub fn with_theme(mut self, theme: PacsortTheme) -> Self {
        self.theme = theme;
        self
    }

    fn show_category(&self, store: &ClassificationStore, category: Category, ui: &mut dyn UserInterface) {
        let entries = category_listing(store, category);

        ui.show_header(category.heading());
        for entry in &entries {
            ui.message(&self.theme.format_entry(&entry.name, &entry.description));
        }
        ui.message(&self.theme.format_rule());
        ui.message(&self.theme.format_category_count(entries.len(), category));
    }

    fn show_summary(&self, store: &ClassificationStore, ui: &mut dyn UserInterface) {
        ui.show_header("Summary");
        for (category, count) in store.category_counts() {
            ui.message(&format!(
                "{:<16}{:>6}",
                self.theme.category(category).apply_to(category.heading()),
                self.theme.highlight.apply_to(count)
            ));
        }
        ui.message(&self.theme.format_rule());
        ui.message(&format!(
            "{:<16}{:>6}",
            "Total",
            self.theme.highlight.apply_to(store.len())
        ));

        let pending = store.pending().len();
        if pending > 0 {
            ui.warning(&format!(
                "{} explicitly installed package{} not sorted yet; run pacsort to classify",
                pending,
                if pending == 1 { " is" } else { "s are" }
            ));
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(store) = ClassificationStore::load(&self.store_path)? else {
            ui.error(&format!(
                "No package data at {}; run pacsort without a report first",
                self.store_path.display()
            ));
            return Ok(CommandResult::failure(1));
        };

        match self.listing {
            Listing::One(category) => self.show_category(&store, category, ui),
            Listing::All => {
                for (i, category) in Category::ALL.into_iter().enumerate() {
                    if i > 0 {
                        ui.message("");
                    }
                    self.show_category(&store, category, ui);
                }
                ui.message("");
                self.show_summary(&store, ui);
            }
        }

        Ok(CommandResult::success())
    }
}
