// diff: current tree against the last snapshot

mod common;

use std::fs;

use common::Fixture;
use ctxkit_core::diff::human_summary::{NO_BASELINE_MESSAGE, NO_CHANGES_MESSAGE};
use ctxkit_core::errors::ExErrorKind;
use ctxkit_core::hooks::HookRegistry;
use ctxkit_engine::{build_manifest, diff};
use ctxkit_store::persist::snapshot_path;

#[test]
fn test_no_snapshot_is_empty_and_ok() {
    let fx = Fixture::new();
    fx.rule("a.md", "rule-a", "A");

    let outcome = diff(&fx.workspace()).unwrap();

    assert!(!outcome.baseline_present);
    assert!(outcome.diff.is_empty());
    assert_eq!(
        serde_json::to_value(&outcome.diff).unwrap(),
        serde_json::json!({"added": [], "removed": [], "changed": []})
    );
    assert_eq!(outcome.human_summary().trim(), NO_BASELINE_MESSAGE);
}

#[test]
fn test_no_changes_after_build() {
    let fx = Fixture::new();
    fx.rule("a.md", "rule-a", "A");
    build_manifest(&fx.workspace(), &HookRegistry::new()).unwrap();

    let outcome = diff(&fx.workspace()).unwrap();

    assert!(outcome.baseline_present);
    assert!(outcome.diff.is_empty());
    assert_eq!(outcome.human_summary().trim(), NO_CHANGES_MESSAGE);
}

#[test]
fn test_added_removed_changed() {
    let fx = Fixture::new();
    fx.rule("a.md", "rule-a", "A");
    fx.rule("b.md", "rule-b", "B");
    fx.trivial_task("TASK-1", "historical");
    build_manifest(&fx.workspace(), &HookRegistry::new()).unwrap();

    fx.remove("rules/b.md");
    fx.rule("c.md", "rule-c", "C");
    fx.rule("a.md", "rule-a", "A, amended");
    // Inactive documents still show up as changed
    fx.role("TASK-1", "implementation", "Rewritten");

    let outcome = diff(&fx.workspace()).unwrap();

    assert_eq!(outcome.diff.added, vec!["rule-c"]);
    assert_eq!(outcome.diff.removed, vec!["rule-b"]);
    assert_eq!(
        outcome.diff.changed,
        vec!["TASK-1-implementation", "rule-a"]
    );
    let summary = outcome.human_summary();
    assert!(summary.contains("Added: rule-c"));
    assert!(summary.contains("Removed: rule-b"));
    assert!(summary.contains("Changed: TASK-1-implementation, rule-a"));
}

#[test]
fn test_corrupt_snapshot_is_an_error() {
    let fx = Fixture::new();
    fx.rule("a.md", "rule-a", "A");
    let path = snapshot_path(&fx.path(".ctxkit"));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "not a manifest").unwrap();

    let err = diff(&fx.workspace()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidManifest);
}

#[test]
fn test_parse_errors_block_diff() {
    let fx = Fixture::new();
    fx.write("rules/broken.md", "no header\n");

    let err = diff(&fx.workspace()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ValidationFailed);
    assert_eq!(err.issues().len(), 1);
}

#[test]
fn test_reference_errors_do_not_block_diff() {
    let fx = Fixture::new();
    fx.spec("TASK-1", "active", "trivial", &["rule-does-not-exist"]);

    let outcome = diff(&fx.workspace()).unwrap();
    assert!(!outcome.baseline_present);
}
