//! `validate`: discover, check and report every problem in one pass

use std::time::Instant;

use ctxkit_core::hooks::{HookContext, HookEvent, HookRegistry};
use ctxkit_core::{log_op_end, log_op_error, log_op_start};
use ctxkit_store::Result;
use serde::Serialize;

use crate::commands::loaded::load_tree;
use crate::workspace::Workspace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateSummary {
    pub doc_count: usize,
    pub task_count: usize,
}

/// Validate the content tree
///
/// Fires `before_validate` and `after_validate`; the latter sees the index
/// and the outcome even when validation fails.
///
/// ## Errors
///
/// - `ValidationFailed`: carries every collected parse, schema, reference,
///   required-file and duplicate-id issue
pub fn validate(ws: &Workspace, hooks: &HookRegistry) -> Result<ValidateSummary> {
    log_op_start!("validate", request_id = %ws.request_id);
    let start = Instant::now();

    let result = validate_impl(ws, hooks).map_err(|e| {
        let e = e.with_request_id(ws.request_id.clone());
        log_op_error!(
            "validate",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            issue_count = e.issues().len()
        );
        e
    })?;

    log_op_end!(
        "validate",
        duration_ms = start.elapsed().as_millis() as u64,
        doc_count = result.doc_count
    );

    Ok(result)
}

fn validate_impl(ws: &Workspace, hooks: &HookRegistry) -> Result<ValidateSummary> {
    hooks.dispatch(HookEvent::BeforeValidate, &ws.hook_context());

    let tree = load_tree(ws);
    let ok = tree.report.is_ok();
    hooks.dispatch(
        HookEvent::AfterValidate,
        &HookContext {
            index: Some(&tree.index),
            ok: Some(ok),
            ..ws.hook_context()
        },
    );

    let summary = ValidateSummary {
        doc_count: tree.index.len(),
        task_count: tree.task_count,
    };
    tree.report.into_result("validate")?;
    Ok(summary)
}
