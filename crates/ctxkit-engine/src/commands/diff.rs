//! `diff`: current tree against the last built snapshot

use std::time::Instant;

use ctxkit_core::diff::{compute_diff, render_human_summary, DocumentDiff};
use ctxkit_core::{log_op_end, log_op_error, log_op_start};
use ctxkit_store::persist::load_snapshot;
use ctxkit_store::Result;

use crate::commands::loaded::load_tree;
use crate::workspace::Workspace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOutcome {
    /// Empty when there is no baseline
    pub diff: DocumentDiff,
    pub baseline_present: bool,
}

impl DiffOutcome {
    pub fn human_summary(&self) -> String {
        render_human_summary(&self.diff, self.baseline_present)
    }
}

/// Diff the tree against `<state_dir>/state/last_manifest.json`
///
/// A missing snapshot is a normal outcome with an empty diff.
///
/// ## Errors
///
/// - `ValidationFailed`: the index itself is unusable
/// - `InvalidManifest`: the snapshot exists but cannot be read as a manifest
pub fn diff(ws: &Workspace) -> Result<DiffOutcome> {
    log_op_start!("diff", request_id = %ws.request_id);
    let start = Instant::now();

    let result = diff_impl(ws).map_err(|e| {
        let e = e.with_request_id(ws.request_id.clone());
        log_op_error!("diff", e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        e
    })?;

    log_op_end!(
        "diff",
        duration_ms = start.elapsed().as_millis() as u64,
        baseline_present = result.baseline_present,
        added = result.diff.added.len(),
        removed = result.diff.removed.len(),
        changed = result.diff.changed.len()
    );

    Ok(result)
}

fn diff_impl(ws: &Workspace) -> Result<DiffOutcome> {
    let tree = load_tree(ws);
    tree.report.require_usable_index("diff")?;

    Ok(match load_snapshot(&ws.state_dir)? {
        Some(baseline) => DiffOutcome {
            diff: compute_diff(&baseline, &tree.index),
            baseline_present: true,
        },
        None => DiffOutcome {
            diff: DocumentDiff::default(),
            baseline_present: false,
        },
    })
}
