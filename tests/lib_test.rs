//! Tests for the public library API.

use pacsort::classify::{classify_pending, CLASSIFY_PROMPT_KEY};
use pacsort::cli::commands::{Listing, ShowCommand, SyncCommand};
use pacsort::cli::Command;
use pacsort::package::{Category, InstallReason, Package, Snapshot};
use pacsort::reconcile::reconcile;
use pacsort::report::{category_listing, largest, unneeded_explicit};
use pacsort::source::{parse_query_output, PackageSource, StaticSource};
use pacsort::store::ClassificationStore;
use pacsort::ui::{MockUI, PacsortTheme};
use tempfile::TempDir;

fn live() -> Snapshot {
    Snapshot::new(vec![
        Package::new("A", InstallReason::Explicit).with_size(10),
        Package::new("B", InstallReason::Dependency).with_size(5),
    ])
}

#[test]
fn empty_store_to_program_listing() {
    let mut store = ClassificationStore::new();
    let report = reconcile(&mut store, &live());
    assert_eq!(report.added, vec!["A", "B"]);

    assert!(store.get("A").unwrap().is_pending());
    assert_eq!(store.get("B").unwrap().category, Category::Dependency);
    assert!(!store.get("B").unwrap().is_pending());
    assert_eq!(store.len(), 2);

    let mut ui = MockUI::new();
    ui.set_prompt_response(CLASSIFY_PROMPT_KEY, "program");
    classify_pending(&mut store, &mut ui, &PacsortTheme::plain()).unwrap();

    let listing = category_listing(&store, Category::Program);
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].name, "A");
}

#[test]
fn reconcile_is_idempotent_and_matches_live_names() {
    let snapshot = live();
    let mut store = ClassificationStore::new();
    reconcile(&mut store, &snapshot);

    let second = reconcile(&mut store, &snapshot);
    assert!(second.is_empty());
    assert_eq!(store.names(), snapshot.names());
}

#[test]
fn unrecognized_answer_reappears_next_pass() {
    let mut store = ClassificationStore::new();
    reconcile(&mut store, &live());

    let mut ui = MockUI::new();
    ui.set_prompt_response(CLASSIFY_PROMPT_KEY, "z");
    classify_pending(&mut store, &mut ui, &PacsortTheme::plain()).unwrap();
    assert!(store.get("A").unwrap().is_pending());

    let mut ui = MockUI::new();
    ui.set_prompt_response(CLASSIFY_PROMPT_KEY, "s");
    classify_pending(&mut store, &mut ui, &PacsortTheme::plain()).unwrap();
    assert_eq!(ui.prompts_shown().len(), 1);
    assert_eq!(store.get("A").unwrap().category, Category::System);
}

#[test]
fn largest_and_unneeded_reports() {
    let snapshot = Snapshot::new(vec![
        Package::new("a", InstallReason::Explicit).with_size(5),
        Package::new("b", InstallReason::Explicit).with_size(7),
        Package::new("c", InstallReason::Dependency)
            .with_size(5)
            .with_required_by(&["b"]),
    ]);

    let names: Vec<_> = largest(&snapshot, 3).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);

    let unneeded: Vec<_> = unneeded_explicit(&snapshot)
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(unneeded, vec!["a", "b"]);
}

#[test]
fn parsed_query_output_feeds_lookup() {
    let packages = parse_query_output(
        "Name : bash\nProvides : sh\nInstall Reason : Installed as a dependency for another package\n\n\
         Name : dash\nProvides : sh\nInstall Reason : Explicitly installed\n",
    )
    .unwrap();
    let snapshot = Snapshot::new(packages);

    assert_eq!(snapshot.lookup("sh>=1").unwrap().name, "bash");
    assert_eq!(snapshot.lookup("dash").unwrap().name, "dash");
    assert!(snapshot.lookup("zsh").is_none());
}

#[test]
fn commands_run_against_static_source() {
    let temp = TempDir::new().unwrap();
    let store_path = temp.path().join("packages.json");
    let source = StaticSource::new(vec![
        Package::new("vim", InstallReason::Explicit).with_description("Vi Improved"),
    ]);
    assert_eq!(source.installed().unwrap().len(), 1);

    let mut ui = MockUI::new();
    ui.set_prompt_response(CLASSIFY_PROMPT_KEY, "p");
    SyncCommand::new(&store_path, Box::new(source))
        .with_theme(PacsortTheme::plain())
        .execute(&mut ui)
        .unwrap();

    let mut ui = MockUI::new();
    ShowCommand::new(&store_path, Listing::One(Category::Program))
        .with_theme(PacsortTheme::plain())
        .execute(&mut ui)
        .unwrap();
    assert!(ui.has_message("vim (Vi Improved)"));
    assert!(ui.has_message("1 packages in category 'program' installed"));
}
