//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the `REPORT` argument

use crate::cli::args::{Cli, ReportKind};
use crate::config::Settings;
use crate::error::Result;
use crate::source::PacmanSource;
use crate::ui::UserInterface;

use super::show::{Listing, ShowCommand};
use super::stats::StatsCommand;
use super::sync::SyncCommand;

/// Exit code for an unrecognised `REPORT` argument.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Trait for command implementations.
///
/// Each mode of the CLI implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Routes the CLI to the sync, listing or statistics command.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher with resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the resolved settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(report) = cli.report.as_deref() else {
            let source = PacmanSource::new(self.settings.pacman.as_str());
            let cmd = SyncCommand::new(&self.settings.store_path, Box::new(source));
            return cmd.execute(ui);
        };

        match ReportKind::parse(report) {
            Some(ReportKind::Info) => {
                let source = PacmanSource::new(self.settings.pacman.as_str());
                let cmd = StatsCommand::new(&self.settings.log_file, Box::new(source))
                    .with_top(self.settings.top);
                cmd.execute(ui)
            }
            Some(ReportKind::Category(category)) => {
                let cmd = ShowCommand::new(&self.settings.store_path, Listing::One(category));
                cmd.execute(ui)
            }
            Some(ReportKind::All) => {
                let cmd = ShowCommand::new(&self.settings.store_path, Listing::All);
                cmd.execute(ui)
            }
            None => {
                ui.error(&format!(
                    "Unknown report '{}'; expected one of {}",
                    report,
                    ReportKind::CHOICES
                ));
                Ok(CommandResult::failure(USAGE_EXIT_CODE))
            }
        }
    }
}
