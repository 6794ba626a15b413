//! Index loading shared by every command

use ctxkit_core::index::DocumentIndex;
use ctxkit_core::rules::{validate_index, ValidationReport};
use ctxkit_store::{discover, Discovery};

use crate::workspace::Workspace;

/// Freshly discovered index plus the full validation report
pub(crate) struct LoadedTree {
    pub index: DocumentIndex,
    pub report: ValidationReport,
    pub task_count: usize,
}

pub(crate) fn load_tree(ws: &Workspace) -> LoadedTree {
    let Discovery {
        index,
        errors,
        task_count,
    } = discover(&ws.content_root);
    let report = validate_index(&index, errors);

    tracing::debug!(
        doc_count = index.len(),
        error_count = report.len(),
        "tree loaded"
    );

    LoadedTree {
        index,
        report,
        task_count,
    }
}
