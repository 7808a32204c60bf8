//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{PacsortError, Result};

use super::Prompt;

fn map_dialoguer_err(e: dialoguer::Error) -> PacsortError {
    PacsortError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix; the question
/// already ends in one.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style(String::new()),
        ..ColorfulTheme::default()
    }
}

/// Read one line of free text from the operator.
///
/// Empty answers are allowed; interpreting them is up to the caller.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    let answer = Input::<String>::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;
    Ok(answer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_theme_has_empty_prefix() {
        let theme = prompt_theme();
        assert_eq!(theme.prompt_prefix.to_string(), "");
    }
}
