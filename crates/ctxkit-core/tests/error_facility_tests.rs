use ctxkit_core::errors::{CtxError, ExError, ExErrorKind};

#[test]
fn test_schema_error_keeps_path() {
    let err = CtxError::Schema {
        path: "tasks/TASK-1/spec.md".to_string(),
        field: "status".to_string(),
        reason: "required field missing".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Schema);
    assert_eq!(ex_err.code(), "ERR_SCHEMA");
    assert_eq!(ex_err.path(), Some("tasks/TASK-1/spec.md"));
    assert!(ex_err.message().contains("status"));
}

#[test]
fn test_duplicate_id_names_both_locations() {
    let err = CtxError::DuplicateId {
        id: "rule-a".to_string(),
        path: "rules/b.md".to_string(),
        existing_path: "rules/a.md".to_string(),
    };
    let text = err.to_string();
    assert!(text.contains("rules/a.md"));
    assert!(text.contains("rules/b.md"));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.doc_id(), Some("rule-a"));
}

#[test]
fn test_source_not_found_structured_fields() {
    let err = CtxError::SourceNotFound {
        adapter: "cursor".to_string(),
        id: "rule-a".to_string(),
        source_path: "rules/missing.md".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::SourceNotFound);
    assert_eq!(ex_err.doc_id(), Some("rule-a"));
    assert_eq!(ex_err.path(), Some("rules/missing.md"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::Parse, "ERR_PARSE"),
        (ExErrorKind::Schema, "ERR_SCHEMA"),
        (ExErrorKind::Reference, "ERR_REFERENCE"),
        (ExErrorKind::RequiredFile, "ERR_REQUIRED_FILE"),
        (ExErrorKind::DuplicateId, "ERR_DUPLICATE_ID"),
        (ExErrorKind::ValidationFailed, "ERR_VALIDATION_FAILED"),
        (ExErrorKind::Declaration, "ERR_DECLARATION"),
        (ExErrorKind::SourceNotFound, "ERR_SOURCE_NOT_FOUND"),
        (ExErrorKind::InvalidManifest, "ERR_INVALID_MANIFEST"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::Io, "ERR_IO"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_serde_errors_convert_to_serialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let ex_err: ExError = json_err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}

#[test]
fn test_display_format() {
    let err = ExError::new(ExErrorKind::Declaration)
        .with_op("export")
        .with_message("adapter vim not configured")
        .with_path("adapters/vim/context.json");
    assert_eq!(
        err.to_string(),
        "[ERR_DECLARATION] in operation 'export': adapter vim not configured (path: adapters/vim/context.json)"
    );
}
