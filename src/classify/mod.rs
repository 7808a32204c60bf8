//! Interactive classification of explicitly installed packages.
//!
//! Every record still pending (explicit, default category) gets exactly one
//! prompt per run. Unrecognised answers leave the record pending, so it comes
//! back on the next run instead of being asked again immediately.

use tracing::debug;

use crate::error::Result;
use crate::package::Category;
use crate::store::ClassificationStore;
use crate::ui::{PacsortTheme, Prompt, UserInterface};

/// Prompt key used for every classification question.
pub const CLASSIFY_PROMPT_KEY: &str = "classify";

/// Outcome of a classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifySummary {
    /// Records given a category.
    pub classified: usize,
    /// Records whose answer was not understood.
    pub rejected: usize,
    /// Records not asked about (non-interactive session).
    pub skipped: usize,
}

/// Interpret an operator answer. Only assignable categories are accepted.
pub fn parse_choice(input: &str) -> Option<Category> {
    input
        .parse::<Category>()
        .ok()
        .filter(|c| Category::ASSIGNABLE.contains(c))
}

/// Ask the operator to categorise each pending record.
///
/// Changes are applied to `store` as they are made; on a prompt failure the
/// error is returned and whatever was classified so far stays in `store`.
pub fn classify_pending(
    store: &mut ClassificationStore,
    ui: &mut dyn UserInterface,
    theme: &PacsortTheme,
) -> Result<ClassifySummary> {
    let pending: Vec<(String, String)> = store
        .pending()
        .into_iter()
        .map(|(name, record)| (name.to_string(), record.description.clone()))
        .collect();

    let mut summary = ClassifySummary::default();
    if pending.is_empty() {
        return Ok(summary);
    }

    if !ui.is_interactive() {
        summary.skipped = pending.len();
        ui.warning(&format!(
            "{} explicitly installed {} waiting to be sorted; run pacsort in a terminal to classify {}",
            pending.len(),
            if pending.len() == 1 { "package is" } else { "packages are" },
            if pending.len() == 1 { "it" } else { "them" },
        ));
        return Ok(summary);
    }

    let question = theme.format_classify_choices();
    for (name, description) in pending {
        ui.message("");
        ui.message(&format!(
            "'{}' needs to be sorted: {}",
            theme.error.apply_to(&name),
            theme.dim.apply_to(format!("({})", description))
        ));

        let answer = ui.prompt(&Prompt::new(CLASSIFY_PROMPT_KEY, question.as_str()))?;

        match parse_choice(&answer) {
            Some(category) => {
                debug!("Classified '{}' as {}", name, category);
                store.set_category(&name, category);
                summary.classified += 1;
            }
            None => {
                ui.error(&format!(
                    "Unrecognized answer '{}' for '{}'; it will be asked again next run",
                    answer.trim(),
                    name
                ));
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::{InstallReason, Package, Snapshot};
    use crate::reconcile::populate;
    use crate::ui::MockUI;

    fn store() -> ClassificationStore {
        populate(&Snapshot::new(vec![
            Package::new("vim", InstallReason::Explicit).with_description("Vi Improved"),
            Package::new("linux", InstallReason::Explicit).with_description("The Linux kernel"),
            Package::new("zlib", InstallReason::Dependency),
        ]))
    }

    #[test]
    fn parse_choice_accepts_assignable_codes() {
        assert_eq!(parse_choice("s"), Some(Category::System));
        assert_eq!(parse_choice(" P "), Some(Category::Program));
        assert_eq!(parse_choice("library"), Some(Category::Library));
        assert_eq!(parse_choice("d"), None);
        assert_eq!(parse_choice("z"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn classifies_each_pending_record_in_order() {
        let mut store = store();
        let mut ui = MockUI::new();
        // Alphabetical: linux, then vim.
        ui.queue_prompt_responses(CLASSIFY_PROMPT_KEY, vec!["s", "p"]);

        let summary = classify_pending(&mut store, &mut ui, &PacsortTheme::plain()).unwrap();

        assert_eq!(summary.classified, 2);
        assert_eq!(store.get("linux").unwrap().category, Category::System);
        assert_eq!(store.get("vim").unwrap().category, Category::Program);
        assert!(store.pending().is_empty());
        assert_eq!(ui.prompts_shown().len(), 2);
        assert!(ui.has_message("'linux' needs to be sorted: (The Linux kernel)"));
    }

    #[test]
    fn unrecognized_answer_leaves_record_pending() {
        let mut store = store();
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(CLASSIFY_PROMPT_KEY, vec!["z", "p"]);

        let summary = classify_pending(&mut store, &mut ui, &PacsortTheme::plain()).unwrap();

        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.classified, 1);
        assert!(store.get("linux").unwrap().is_pending());
        assert!(ui.has_error("Unrecognized answer 'z' for 'linux'"));

        // The rejected record is the only one asked about next time.
        let mut next = MockUI::new();
        next.set_prompt_response(CLASSIFY_PROMPT_KEY, "s");
        classify_pending(&mut store, &mut next, &PacsortTheme::plain()).unwrap();
        assert_eq!(next.prompts_shown().len(), 1);
        assert_eq!(store.get("linux").unwrap().category, Category::System);
    }

    #[test]
    fn non_interactive_session_skips_prompts() {
        let mut store = store();
        let mut ui = MockUI::new();
        ui.set_interactive(false);

        let summary = classify_pending(&mut store, &mut ui, &PacsortTheme::plain()).unwrap();

        assert_eq!(summary.skipped, 2);
        assert!(ui.prompts_shown().is_empty());
        assert!(ui.has_warning("2 explicitly installed packages are waiting"));
        assert_eq!(store.pending().len(), 2);
    }

    #[test]
    fn nothing_pending_means_no_prompts() {
        let mut store = store();
        store.set_category("vim", Category::Program);
        store.set_category("linux", Category::System);
        let mut ui = MockUI::new();

        let summary = classify_pending(&mut store, &mut ui, &PacsortTheme::plain()).unwrap();

        assert_eq!(summary, ClassifySummary::default());
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn prompt_failure_keeps_earlier_answers() {
        let mut store = store();
        let mut ui = MockUI::new();
        ui.fail_prompts();

        assert!(classify_pending(&mut store, &mut ui, &PacsortTheme::plain()).is_err());
        assert_eq!(store.pending().len(), 2);
    }
}
