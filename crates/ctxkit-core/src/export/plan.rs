//! Export plan: a declaration checked against the tree and enriched from
//! the index, ready to materialize.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CtxError, ExError, ExErrorKind, Result};
use crate::export::declaration::ExportDeclaration;
use crate::index::DocumentIndex;

/// File name of the record written inside `output_dir`
pub const EXPORT_RECORD_FILE: &str = "context.json";

/// One exported document as recorded in the adapter output manifest
///
/// Enrichment fields are absent when the id is not indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub id: String,
    pub kind: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ExportEntry {
    pub fn is_enriched(&self) -> bool {
        self.checksum.is_some()
    }
}

/// Adapter output manifest (`<output_dir>/context.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub output_dir: String,
    pub documents: Vec<ExportEntry>,
}

/// A single copy operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    pub source_path: PathBuf,
    pub dest_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub adapter: String,
    /// Absolute output directory
    pub output_path: PathBuf,
    pub copies: Vec<PlannedCopy>,
    pub record: ExportRecord,
}

impl ExportPlan {
    pub fn record_path(&self) -> PathBuf {
        self.output_path.join(EXPORT_RECORD_FILE)
    }
}

/// Resolve `output_dir` against the output base; absolute dirs are kept
pub fn resolve_output_dir(output_base: &Path, output_dir: &str) -> PathBuf {
    let dir = Path::new(output_dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        output_base.join(dir)
    }
}

/// Fold `.` and `..` components without touching the filesystem
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Destinations that would overwrite a declared source
fn source_collisions(
    adapter: &str,
    copies: &[PlannedCopy],
    record_path: &Path,
) -> Vec<CtxError> {
    let sources: Vec<PathBuf> = copies
        .iter()
        .map(|c| lexical_normalize(&c.source_path))
        .collect();
    let record = lexical_normalize(record_path);

    let mut collisions: Vec<CtxError> = copies
        .iter()
        .filter(|c| sources.contains(&lexical_normalize(&c.dest_path)))
        .map(|c| CtxError::Declaration {
            adapter: adapter.to_string(),
            reason: format!(
                "destination {} overwrites a declared source",
                c.dest_path.display()
            ),
        })
        .collect();
    if sources.contains(&record) {
        collisions.push(CtxError::Declaration {
            adapter: adapter.to_string(),
            reason: format!("export record {} overwrites a declared source", record_path.display()),
        });
    }
    collisions
}

/// Validate sources and enrich a declaration into a plan
///
/// `source_exists` decides whether a resolved source is an existing file,
/// so the plan stays free of filesystem access.
///
/// # Errors
///
/// - `SourceNotFound` carrying one issue per missing source
/// - `Declaration` when a destination resolves to a declared source
///
/// Nothing has been copied at that point.
pub fn build_export_plan(
    declaration: &ExportDeclaration,
    index: &DocumentIndex,
    content_root: &Path,
    output_base: &Path,
    source_exists: impl Fn(&Path) -> bool,
) -> Result<ExportPlan> {
    let missing: Vec<CtxError> = declaration
        .documents
        .iter()
        .filter(|d| !source_exists(&content_root.join(&d.source)))
        .map(|d| CtxError::SourceNotFound {
            adapter: declaration.adapter.clone(),
            id: d.id.clone(),
            source_path: d.source.clone(),
        })
        .collect();

    if !missing.is_empty() {
        return Err(ExError::new(ExErrorKind::SourceNotFound)
            .with_op("validate_sources")
            .with_message(format!(
                "adapter {}: {} declared source(s) not found",
                declaration.adapter,
                missing.len()
            ))
            .with_issues(missing));
    }

    let output_path = resolve_output_dir(output_base, &declaration.output_dir);

    let mut copies = Vec::with_capacity(declaration.documents.len());
    let mut documents = Vec::with_capacity(declaration.documents.len());
    for declared in &declaration.documents {
        copies.push(PlannedCopy {
            source_path: content_root.join(&declared.source),
            dest_path: output_path.join(&declared.target),
        });

        let indexed = index.get(&declared.id);
        documents.push(ExportEntry {
            id: declared.id.clone(),
            kind: declared.kind.clone(),
            source: declared.source.clone(),
            target: declared.target.clone(),
            version: indexed.map(|d| d.version),
            checksum: indexed.map(|d| d.checksum.clone()),
            status: indexed.and_then(|d| d.status.clone()),
            tags: indexed.map(|d| d.tags.clone()),
        });
    }

    let collisions = source_collisions(
        &declaration.adapter,
        &copies,
        &output_path.join(EXPORT_RECORD_FILE),
    );
    if !collisions.is_empty() {
        return Err(ExError::new(ExErrorKind::Declaration)
            .with_op("plan_export")
            .with_message(format!(
                "adapter {}: {} destination(s) overwrite declared sources",
                declaration.adapter,
                collisions.len()
            ))
            .with_issues(collisions));
    }

    Ok(ExportPlan {
        adapter: declaration.adapter.clone(),
        output_path,
        copies,
        record: ExportRecord {
            output_dir: declaration.output_dir.clone(),
            documents,
        },
    })
}
