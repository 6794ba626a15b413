//! `export <adapter>`: copy declared documents to an adapter's output dir
//!
//! ## Pipeline (in order):
//! 1. Adapter allow-list check (nothing read yet)
//! 2. Discover and validate (any error is a hard stop)
//! 3. `before_export`
//! 4. Load the declaration and check every source (all-or-nothing)
//! 5. Copy files, then write `<output_dir>/context.json`
//! 6. `after_export`

use std::path::PathBuf;
use std::time::Instant;

use ctxkit_core::export::build_export_plan;
use ctxkit_core::hooks::{HookContext, HookEvent, HookRegistry};
use ctxkit_core::{log_op_end, log_op_error, log_op_start};
use ctxkit_store::errors::declaration_error;
use ctxkit_store::export::{load_declaration, materialize, source_is_file};
use ctxkit_store::Result;

use crate::commands::loaded::load_tree;
use crate::workspace::Workspace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub adapter: String,
    pub output_path: PathBuf,
    pub record_path: PathBuf,
    /// Destination of every copied file, in declaration order
    pub copied: Vec<PathBuf>,
}

/// Export an adapter
///
/// ## Errors
///
/// - `Declaration`: adapter not configured, declaration missing or malformed
/// - `ValidationFailed`: the tree has outstanding errors
/// - `SourceNotFound`: one issue per missing declared source; nothing copied
/// - `Io`: copying or writing the record failed
pub fn export(ws: &Workspace, hooks: &HookRegistry, adapter: &str) -> Result<ExportReport> {
    log_op_start!("export", request_id = %ws.request_id, adapter = adapter);
    let start = Instant::now();

    let result = export_impl(ws, hooks, adapter).map_err(|e| {
        let e = e.with_request_id(ws.request_id.clone());
        log_op_error!(
            "export",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            adapter = adapter
        );
        e
    })?;

    log_op_end!(
        "export",
        duration_ms = start.elapsed().as_millis() as u64,
        adapter = adapter,
        copied = result.copied.len()
    );

    Ok(result)
}

fn export_impl(ws: &Workspace, hooks: &HookRegistry, adapter: &str) -> Result<ExportReport> {
    if !ws.config.allows_adapter(adapter) {
        return Err(declaration_error(
            adapter,
            format!(
                "adapter '{}' not in configured adapters [{}]",
                adapter,
                ws.config.adapters.join(", ")
            ),
        )
        .with_op("export"));
    }

    let tree = load_tree(ws);
    tree.report.into_result("export")?;

    hooks.dispatch(
        HookEvent::BeforeExport,
        &HookContext {
            index: Some(&tree.index),
            adapter: Some(adapter),
            ..ws.hook_context()
        },
    );

    let declaration = load_declaration(&ws.content_root, adapter)?;
    let plan = build_export_plan(
        &declaration,
        &tree.index,
        &ws.content_root,
        ws.output_base(),
        source_is_file,
    )?;
    let written = materialize(&plan)?;

    hooks.dispatch(
        HookEvent::AfterExport,
        &HookContext {
            adapter: Some(adapter),
            ..ws.hook_context()
        },
    );

    Ok(ExportReport {
        adapter: plan.adapter,
        output_path: plan.output_path,
        record_path: written.record_path,
        copied: written.copied,
    })
}
