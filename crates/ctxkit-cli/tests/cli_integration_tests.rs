//! CLI integration tests
//!
//! Run the `ctxkit` binary against temp trees and check exit codes and
//! stdout/stderr contracts.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup_tree(temp: &TempDir) {
    fs::create_dir_all(temp.path().join(".ctxkit")).unwrap();
    write(
        temp.path(),
        "rules/security.rule.md",
        "---\nid: rule-security-001\nkind: rule\nversion: 1\n---\nNever log secrets.\n",
    );
}

fn ctxkit(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ctxkit"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_validate_ok() {
    let temp = TempDir::new().unwrap();
    setup_tree(&temp);

    let output = ctxkit(temp.path(), &["validate"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "Validated 1 document(s).");
}

#[test]
fn test_validate_reports_required_file_and_fails() {
    let temp = TempDir::new().unwrap();
    setup_tree(&temp);
    write(
        temp.path(),
        "tasks/TASK-123/spec.md",
        "---\nid: TASK-123-spec\nkind: spec\nstatus: active\ncomplexity: trivial\n---\n",
    );

    let output = ctxkit(temp.path(), &["validate"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("ERR_VALIDATION_FAILED"), "stderr: {}", err);
    assert!(err.contains("TASK-123"));
    assert!(err.contains("implementation.md"));
}

#[test]
fn test_build_manifest_then_diff() {
    let temp = TempDir::new().unwrap();
    setup_tree(&temp);

    let output = ctxkit(temp.path(), &["build-manifest"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("Built manifest: 1 documents, active_set=0."));
    assert!(temp.path().join("manifests.yaml").is_file());
    assert!(temp.path().join(".ctxkit/state/last_manifest.json").is_file());

    let output = ctxkit(temp.path(), &["diff"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "No changes.");

    write(
        temp.path(),
        "rules/security.rule.md",
        "---\nid: rule-security-001\nkind: rule\nversion: 2\n---\nNever log secrets or tokens.\n",
    );
    let output = ctxkit(temp.path(), &["diff", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"added": [], "removed": [], "changed": ["rule-security-001"]})
    );
}

#[test]
fn test_diff_without_snapshot_exits_zero() {
    let temp = TempDir::new().unwrap();
    setup_tree(&temp);

    let output = ctxkit(temp.path(), &["diff", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"added": [], "removed": [], "changed": []})
    );

    let output = ctxkit(temp.path(), &["diff"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "No previous manifest in state. Run build-manifest first."
    );
}

#[test]
fn test_list_json_and_filters() {
    let temp = TempDir::new().unwrap();
    setup_tree(&temp);

    let output = ctxkit(temp.path(), &["list", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["id"], "rule-security-001");
    assert_eq!(json[0]["path"], "rules/security.rule.md");

    let output = ctxkit(temp.path(), &["list", "--status", "active"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "No documents match.");
}

#[test]
fn test_export_with_project_root() {
    let temp = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    setup_tree(&temp);
    write(
        temp.path(),
        "adapters/cursor/context.json",
        r#"{"output_dir": ".cursor", "documents": [{"id": "rule-security-001", "kind": "rule", "source": "rules/security.rule.md", "target": "rules/security.rule.md"}]}"#,
    );

    let output = ctxkit(
        temp.path(),
        &[
            "export",
            "cursor",
            "--project-root",
            project.path().to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project
        .path()
        .join(".cursor/rules/security.rule.md")
        .is_file());
    assert!(project.path().join(".cursor/context.json").is_file());
}

#[test]
fn test_export_unknown_adapter_fails() {
    let temp = TempDir::new().unwrap();
    setup_tree(&temp);

    let output = ctxkit(temp.path(), &["export", "windsurf"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("ERR_DECLARATION"));
}

#[test]
fn test_explicit_root_option() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("ai_context");
    write(
        &content,
        "rules/a.md",
        "---\nid: rule-a\nkind: rule\n---\nA\n",
    );

    let output = ctxkit(temp.path(), &["--root", "ai_context", "validate"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "Validated 1 document(s).");
}
