// export: declaration-driven, all-or-nothing materialization

mod common;

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use common::Fixture;
use ctxkit_core::config::Config;
use ctxkit_core::errors::{CtxError, ExErrorKind};
use ctxkit_core::export::ExportRecord;
use ctxkit_core::hooks::{HookContext, HookEvent, HookRegistry};
use ctxkit_engine::{export, Workspace};
use tempfile::TempDir;

const CURSOR_DECLARATION: &str = r#"{
  "output_dir": ".cursor",
  "documents": [
    {
      "id": "rule-security-001",
      "kind": "rule",
      "source": "rules/security.rule.md",
      "target": "rules/security.rule.md"
    }
  ]
}"#;

fn read_record(path: &std::path::Path) -> ExportRecord {
    serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
}

#[test]
fn test_cursor_export_to_project_root() {
    let fx = Fixture::new();
    let project = TempDir::new().unwrap();
    fx.rule("security.rule.md", "rule-security-001", "Never log secrets.");
    fx.write("adapters/cursor/context.json", CURSOR_DECLARATION);
    let ws = fx.workspace().with_project_root(project.path());

    let report = export(&ws, &HookRegistry::new(), "cursor").unwrap();

    let copied = project.path().join(".cursor/rules/security.rule.md");
    assert_eq!(report.copied, vec![copied.clone()]);
    assert_eq!(
        fs::read_to_string(&copied).unwrap(),
        fs::read_to_string(fx.path("rules/security.rule.md")).unwrap()
    );

    assert_eq!(report.record_path, project.path().join(".cursor/context.json"));
    let record = read_record(&report.record_path);
    assert_eq!(record.documents.len(), 1);
    let entry = &record.documents[0];
    assert_eq!(entry.id, "rule-security-001");
    assert_eq!(entry.source, "rules/security.rule.md");
    assert_eq!(entry.version, Some(1));
    assert!(entry.checksum.as_deref().unwrap().starts_with("sha256:"));
    assert_eq!(entry.status, None);

    let entries: Vec<_> = fs::read_dir(project.path().join(".cursor"))
        .unwrap()
        .filter_map(|e| e.ok().map(|e| e.file_name()))
        .collect();
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_output_defaults_to_content_root() {
    let fx = Fixture::new();
    fx.rule("security.rule.md", "rule-security-001", "Body");
    fx.write("adapters/cursor/context.json", CURSOR_DECLARATION);

    let report = export(&fx.workspace(), &HookRegistry::new(), "cursor").unwrap();

    assert_eq!(report.output_path, fx.path(".cursor"));
    assert!(fx.path(".cursor/rules/security.rule.md").is_file());
}

#[test]
fn test_missing_source_copies_nothing() {
    let fx = Fixture::new();
    let project = TempDir::new().unwrap();
    fx.rule("security.rule.md", "rule-security-001", "Body");
    fx.write(
        "adapters/cursor/context.json",
        r#"{
  "output_dir": ".cursor",
  "documents": [
    {"id": "rule-security-001", "kind": "rule", "source": "rules/security.rule.md"},
    {"id": "ghost-1", "kind": "rule", "source": "rules/ghost-1.md"},
    {"id": "ghost-2", "kind": "rule", "source": "rules/ghost-2.md"}
  ]
}"#,
    );
    let ws = fx.workspace().with_project_root(project.path());

    let err = export(&ws, &HookRegistry::new(), "cursor").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::SourceNotFound);
    let missing: Vec<&str> = err
        .issues()
        .iter()
        .filter_map(|e| match e {
            CtxError::SourceNotFound { id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(missing, vec!["ghost-1", "ghost-2"]);
    assert!(!project.path().join(".cursor").exists());
}

#[test]
fn test_empty_declaration_writes_empty_record() {
    let fx = Fixture::new();
    fx.rule("a.md", "rule-a", "A");
    fx.write("adapters/copilot/context.json", r#"{"output_dir": ".github/ctx", "documents": []}"#);

    let report = export(&fx.workspace(), &HookRegistry::new(), "copilot").unwrap();

    assert!(report.copied.is_empty());
    let record = read_record(&report.record_path);
    assert_eq!(record.output_dir, ".github/ctx");
    assert!(record.documents.is_empty());
}

#[test]
fn test_unindexed_entry_passes_through_unenriched() {
    let fx = Fixture::new();
    fx.rule("a.md", "rule-a", "A");
    fx.write("notes/readme.md", "plain file");
    fx.write(
        "adapters/cursor/context.json",
        r#"{"output_dir": "out", "documents": [{"id": "readme", "kind": "note", "source": "notes/readme.md", "target": "README.md"}]}"#,
    );

    let report = export(&fx.workspace(), &HookRegistry::new(), "cursor").unwrap();

    assert_eq!(report.copied, vec![fx.path("out/README.md")]);
    let raw: serde_json::Value =
        serde_json::from_slice(&fs::read(&report.record_path).unwrap()).unwrap();
    let entry = &raw["documents"][0];
    assert_eq!(entry["target"], "README.md");
    assert!(entry.get("checksum").is_none());
    assert!(entry.get("version").is_none());
}

#[test]
fn test_unconfigured_adapter_rejected_before_reading() {
    let fx = Fixture::new();
    // The tree is invalid, but the adapter check comes first
    fx.write("rules/broken.md", "no header\n");

    let err = export(&fx.workspace(), &HookRegistry::new(), "windsurf").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Declaration);

    let config = Config {
        adapters: vec!["windsurf".to_string()],
        ..Config::default()
    };
    let ws = Workspace::new(fx.root(), fx.path(".ctxkit"), config);
    let err = export(&ws, &HookRegistry::new(), "windsurf").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ValidationFailed);
}

#[test]
fn test_missing_declaration_is_declaration_error() {
    let fx = Fixture::new();
    fx.rule("a.md", "rule-a", "A");

    let err = export(&fx.workspace(), &HookRegistry::new(), "cursor").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Declaration);
}

#[test]
fn test_escaping_target_is_declaration_error() {
    let fx = Fixture::new();
    fx.rule("a.md", "rule-a", "A");
    fx.write(
        "adapters/cursor/context.json",
        r#"{"output_dir": ".cursor", "documents": [{"id": "rule-a", "source": "rules/a.md", "target": "../../etc/a.md"}]}"#,
    );

    let err = export(&fx.workspace(), &HookRegistry::new(), "cursor").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Declaration);
    assert!(!fx.path(".cursor").exists());
}

#[test]
fn test_export_into_content_root_never_overwrites_sources() {
    let fx = Fixture::new();
    fx.rule("security.rule.md", "rule-security-001", "Never log secrets.");
    fx.write(
        "adapters/cursor/context.json",
        r#"{"output_dir": ".", "documents": [{"id": "rule-security-001", "source": "rules/security.rule.md"}]}"#,
    );
    let before = fs::read_to_string(fx.path("rules/security.rule.md")).unwrap();

    let err = export(&fx.workspace(), &HookRegistry::new(), "cursor").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Declaration);
    assert!(matches!(err.issues(), [CtxError::Declaration { .. }]));
    assert_eq!(
        fs::read_to_string(fx.path("rules/security.rule.md")).unwrap(),
        before
    );
    assert!(!fx.path("context.json").exists());
}

#[test]
fn test_validation_errors_block_export() {
    let fx = Fixture::new();
    fx.rule("security.rule.md", "rule-security-001", "Body");
    fx.spec("TASK-123", "active", "trivial", &[]);
    fx.write("adapters/cursor/context.json", CURSOR_DECLARATION);

    let err = export(&fx.workspace(), &HookRegistry::new(), "cursor").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ValidationFailed);
    assert!(!fx.path(".cursor").exists());
}

#[test]
fn test_export_hooks_receive_adapter() {
    let fx = Fixture::new();
    fx.rule("security.rule.md", "rule-security-001", "Body");
    fx.write("adapters/cursor/context.json", CURSOR_DECLARATION);

    let fired = Rc::new(RefCell::new(Vec::new()));
    let mut hooks = HookRegistry::new();
    for event in [HookEvent::BeforeExport, HookEvent::AfterExport] {
        let fired = fired.clone();
        hooks.register_fn(event, move |e, ctx: &HookContext<'_>| {
            fired
                .borrow_mut()
                .push((e, ctx.adapter.map(str::to_string)));
            Ok(())
        });
    }

    export(&fx.workspace(), &hooks, "cursor").unwrap();

    assert_eq!(
        *fired.borrow(),
        vec![
            (HookEvent::BeforeExport, Some("cursor".to_string())),
            (HookEvent::AfterExport, Some("cursor".to_string())),
        ]
    );
}
