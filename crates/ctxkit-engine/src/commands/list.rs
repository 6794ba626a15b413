//! `list`: indexed documents, optionally filtered

use std::time::Instant;

use ctxkit_core::model::Document;
use ctxkit_core::{log_op_end, log_op_error, log_op_start};
use ctxkit_store::Result;
use serde::Serialize;

use crate::commands::loaded::load_tree;
use crate::workspace::Workspace;

/// Exact-match filters; `None` matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub status: Option<String>,
    pub kind: Option<String>,
}

impl ListFilter {
    pub fn matches(&self, doc: &Document) -> bool {
        let status_ok = self
            .status
            .as_deref()
            .map_or(true, |s| doc.status.as_deref() == Some(s));
        let kind_ok = self
            .kind
            .as_deref()
            .map_or(true, |k| doc.kind.as_str() == k);
        status_ok && kind_ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: String,
    pub kind: String,
    pub status: Option<String>,
    pub path: String,
    pub complexity: Option<String>,
}

impl From<&Document> for ListEntry {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            kind: doc.kind.to_string(),
            status: doc.status.clone(),
            path: doc.path.clone(),
            complexity: doc.complexity.clone(),
        }
    }
}

/// List documents sorted by id
///
/// Required-file and reference problems do not block listing.
///
/// ## Errors
///
/// - `ValidationFailed`: the index itself is unusable (parse, schema,
///   duplicate-id or read errors)
pub fn list_documents(ws: &Workspace, filter: &ListFilter) -> Result<Vec<ListEntry>> {
    log_op_start!("list", request_id = %ws.request_id);
    let start = Instant::now();

    let result = list_impl(ws, filter).map_err(|e| {
        let e = e.with_request_id(ws.request_id.clone());
        log_op_error!("list", e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        e
    })?;

    log_op_end!(
        "list",
        duration_ms = start.elapsed().as_millis() as u64,
        match_count = result.len()
    );

    Ok(result)
}

fn list_impl(ws: &Workspace, filter: &ListFilter) -> Result<Vec<ListEntry>> {
    let tree = load_tree(ws);
    tree.report.require_usable_index("list")?;

    Ok(tree
        .index
        .iter()
        .filter(|doc| filter.matches(doc))
        .map(ListEntry::from)
        .collect())
}
