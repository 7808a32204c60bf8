//! Scriptable UI for tests.
//!
//! `MockUI` records everything a command prints as an ordered list of
//! [`UiEvent`]s and answers prompts from scripted responses.
//!
//! # Example
//!
//! ```
//! use pacsort::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("classify", "p");
//!
//! let answer = ui.prompt(&Prompt::new("classify", "Category?")).unwrap();
//! assert_eq!(answer, "p");
//! assert_eq!(ui.prompts_shown(), vec!["classify"]);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// One thing shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Header(String),
    Spinner(String),
    /// A prompt, by key.
    Prompt(String),
}

/// Recording UI with scripted prompt answers.
///
/// Answers come from, in order: the per-key queue, the per-key fixed
/// response, then the empty string.
#[derive(Debug)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    events: Vec<UiEvent>,
    fixed: HashMap<String, String>,
    queued: HashMap<String, VecDeque<String>>,
    prompts_fail: bool,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// An interactive mock in normal output mode.
    pub fn new() -> Self {
        Self::with_mode(OutputMode::Normal)
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            interactive: true,
            events: Vec::new(),
            fixed: HashMap::new(),
            queued: HashMap::new(),
            prompts_fail: false,
        }
    }

    /// Answer every prompt with `key` the same way.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.fixed.insert(key.to_string(), response.to_string());
    }

    /// Answer successive prompts with `key` from `responses`, in order.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        self.queued.insert(
            key.to_string(),
            responses.into_iter().map(str::to_string).collect(),
        );
    }

    /// Make every prompt fail as if the terminal had been closed.
    pub fn fail_prompts(&mut self) {
        self.prompts_fail = true;
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Everything recorded, in order.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    fn collect(&self, pick: impl Fn(&UiEvent) -> Option<&String>) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(pick)
            .map(String::as_str)
            .collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Message(m) => Some(m),
            _ => None,
        })
    }

    pub fn successes(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Success(m) => Some(m),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Warning(m) => Some(m),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Error(m) => Some(m),
            _ => None,
        })
    }

    pub fn headers(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Header(m) => Some(m),
            _ => None,
        })
    }

    pub fn spinners(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Spinner(m) => Some(m),
            _ => None,
        })
    }

    /// Keys of the prompts shown, in order.
    pub fn prompts_shown(&self) -> Vec<&str> {
        self.collect(|e| match e {
            UiEvent::Prompt(key) => Some(key),
            _ => None,
        })
    }

    /// True if any message contains `needle`.
    pub fn has_message(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.successes().iter().any(|m| m.contains(needle))
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(needle))
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.errors().iter().any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.events.push(UiEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.events.push(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.events.push(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.events.push(UiEvent::Error(msg.to_string()));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.events.push(UiEvent::Prompt(prompt.key.clone()));

        if self.prompts_fail {
            let closed = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "terminal closed");
            return Err(closed.into());
        }

        let queued = self
            .queued
            .get_mut(&prompt.key)
            .and_then(VecDeque::pop_front);
        let answer = queued
            .or_else(|| self.fixed.get(&prompt.key).cloned())
            .unwrap_or_default();
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.events.push(UiEvent::Spinner(message.to_string()));
        Box::new(MockSpinner::default())
    }

    fn show_header(&mut self, title: &str) {
        self.events.push(UiEvent::Header(title.to_string()));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that remembers how it ended.
#[derive(Debug, Default)]
pub struct MockSpinner {
    /// `Ok(line)` on success, `Err(line)` on failure, `None` while running.
    pub finished: Option<std::result::Result<String, String>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finished = Some(Ok(msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.finished = Some(Err(msg.to_string()));
    }
}
