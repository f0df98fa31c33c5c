//! Acceptance tests: workspaces restored from layout files.
//!
//! Each scenario loads a layout, then resolves documents the way a host
//! application would when the user asks to open them.

use tabviews::layout::{load_layout, Layout};
use tabviews::model::{DocumentId, Existing, Hints, Placement, Strategy};
use tabviews::state::ViewManager;
use tabviews::view::render_tab_bar;

const WORKSPACE: &str = r#"
[[tabs]]
views = [
  { document = "src/main.rs", activated = 1 },
  { document = "README.md", activated = 3 },
]

[[tabs]]
views = [
  { document = "src/main.rs", activated = 2 },
  { document = "src/lib.rs" },
]
"#;

fn doc(name: &str) -> DocumentId {
    DocumentId::new(name).expect("valid document id")
}

fn workspace() -> (ViewManager, Vec<tabviews::model::ViewId>) {
    let mut manager = ViewManager::headless();
    let created = Layout::from_toml(WORKSPACE)
        .expect("valid layout")
        .apply(&mut manager)
        .expect("layout applies");
    (manager, created)
}

#[test]
fn restored_workspace_reuses_most_recent_view() {
    let (mut manager, created) = workspace();

    // GIVEN main.rs open in both tabs, the second activated later
    // WHEN it is opened again with last_used
    let hints = Hints::new().with_strategy(Strategy::LastUsed);
    let resolved = manager.editor_for(&doc("src/main.rs"), &hints);

    // THEN the second tab's view is reused
    assert_eq!(resolved, Some(created[2]));
    assert_eq!(manager.registry().len(), 4);
}

#[test]
fn restored_workspace_starts_on_highest_ranked_view() {
    let (manager, created) = workspace();

    assert_eq!(manager.active_editor().map(|v| v.id), Some(created[1]));
    assert_eq!(manager.tabs().current_index(), Some(0));
}

#[test]
fn current_tab_hint_ignores_views_in_other_tabs() {
    let (mut manager, created) = workspace();

    // Current tab is the first; lib.rs only lives in the second
    let hints = Hints::new()
        .with_existing(Existing::CurrentTab)
        .with_create_if_needed(false);
    assert_eq!(manager.editor_for(&doc("src/lib.rs"), &hints), None);

    manager.set_current_tab(1).expect("tab exists");
    assert_eq!(manager.editor_for(&doc("src/lib.rs"), &hints), Some(created[3]));
}

#[test]
fn show_document_switches_tab_and_activates() {
    let (mut manager, created) = workspace();

    let shown = manager
        .show_document(&doc("src/lib.rs"), &Hints::new())
        .expect("view exists");

    assert_eq!(shown, Some(created[3]));
    assert_eq!(manager.tabs().current_index(), Some(1));
    assert_eq!(manager.active_editor().map(|v| v.id), Some(created[3]));
}

#[test]
fn opening_unknown_document_creates_in_current_tab() {
    let (mut manager, _) = workspace();

    let hints = Hints::new().with_placement(Placement::CurrentTab);
    let created = manager
        .editor_for(&doc("Cargo.toml"), &hints)
        .expect("creation allowed");

    assert_eq!(manager.tabs().len(), 2);
    assert_eq!(
        manager.tabs().tab_of(created),
        manager.tabs().current().map(|t| t.id)
    );
}

#[test]
fn closing_active_view_falls_back_to_next_most_recent() {
    let (mut manager, created) = workspace();

    manager.close_editor(created[1]).expect("open view");

    // main.rs in the second tab was ranked 2, the next most recent
    assert_eq!(manager.active_editor().map(|v| v.id), Some(created[2]));
    assert_eq!(manager.tabs().current_index(), Some(1));
}

#[test]
fn closing_document_everywhere_drops_empty_tabs() {
    let (mut manager, _) = workspace();

    assert_eq!(manager.close_document(&doc("src/main.rs")), Ok(2));
    assert_eq!(manager.close_document(&doc("README.md")), Ok(1));

    assert_eq!(manager.tabs().len(), 1);
    assert_eq!(manager.documents(), vec![&doc("src/lib.rs")]);
}

#[test]
fn tab_bar_reflects_restored_workspace() {
    let (manager, _) = workspace();

    let rows = render_tab_bar(&manager, 60);

    assert!(rows[0].contains("Editors"));
    assert!(rows[1].contains("README.md +1"), "First tab title: {:?}", rows);
    assert!(rows[1].contains("main.rs +1"), "Second tab title: {:?}", rows);
}

#[test]
fn layout_loaded_from_disk_matches_inline_layout() {
    let path = std::env::temp_dir().join("tabviews_acceptance_workspace.toml");
    std::fs::write(&path, WORKSPACE).expect("write layout");

    let loaded = load_layout(&path).expect("valid layout");
    assert_eq!(loaded, Layout::from_toml(WORKSPACE).expect("valid layout"));

    std::fs::remove_file(path).ok();
}
