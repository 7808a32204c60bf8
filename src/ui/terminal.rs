//! Interactive terminal UI.

use console::Term;
use std::io::{IsTerminal, Write};

use crate::error::Result;

use super::{
    prompt_user, NonInteractiveUI, OutputMode, PacsortTheme, ProgressSpinner, Prompt,
    SpinnerHandle, UserInterface,
};

/// UI for an operator at a terminal.
///
/// Reports and prompts use stdout; warnings and errors go to stderr so a
/// listing piped through `less` or `grep` stays clean.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PacsortTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: PacsortTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_user(prompt, &self.out)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if !self.mode.shows_status() {
            return Box::new(ProgressSpinner::hidden());
        }
        Box::new(ProgressSpinner::new(message))
    }

    fn show_header(&mut self, title: &str) {
        let header = self.theme.format_header(title);
        let rule = self.theme.format_rule();
        writeln!(self.out, "{}\n{}", header, rule).ok();
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term() && std::io::stdin().is_terminal()
    }
}

/// Pick the UI for this process.
///
/// The terminal UI is used only when prompting was not disabled and both
/// stdin and stdout are terminals; cron jobs and pipes get
/// [`NonInteractiveUI`].
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() && std::io::stdin().is_terminal() {
        Box::new(TerminalUI::new(mode))
    } else {
        tracing::debug!("Using non-interactive UI");
        Box::new(NonInteractiveUI::new(mode))
    }
}
