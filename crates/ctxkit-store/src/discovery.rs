//! Document discovery
//!
//! Walks `rules/` and `tasks/` under the content root and builds the index.
//! Every file is attempted; problems are collected, never fatal, so one
//! `validate` run reports all of them.

use std::fs;
use std::path::{Path, PathBuf};

use ctxkit_core::errors::CtxError;
use ctxkit_core::index::DocumentIndex;
use ctxkit_core::model::{parse_frontmatter, DocumentOrigin, TaskRole};
use ctxkit_core::rules::{build_document, find_missing_required_files};
use ctxkit_core::snapshot::document_checksum;

use crate::config::{RULES_DIR, TASKS_DIR};
use crate::errors::read_failure;

/// Index built from disk plus every problem found on the way
#[derive(Debug, Default)]
pub struct Discovery {
    pub index: DocumentIndex,
    /// Parse, schema, duplicate-id, required-file and IO problems
    pub errors: Vec<CtxError>,
    pub task_count: usize,
}

/// Path relative to the content root, `/`-separated
pub fn relative_path(content_root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(content_root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// Sorted entries of a directory, dot-entries skipped
fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| !is_hidden(p))
        .collect();
    entries.sort();
    Ok(entries)
}

/// Collect `*.md` files under `dir` recursively, sorted
fn collect_markdown_files(
    content_root: &Path,
    dir: &Path,
    files: &mut Vec<PathBuf>,
    errors: &mut Vec<CtxError>,
) {
    let entries = match sorted_entries(dir) {
        Ok(entries) => entries,
        Err(e) => {
            errors.push(read_failure(&relative_path(content_root, dir), &e));
            return;
        }
    };
    for path in entries {
        if path.is_dir() {
            collect_markdown_files(content_root, &path, files, errors);
        } else if path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
}

/// Discover every document under the content root
pub fn discover(content_root: &Path) -> Discovery {
    let mut discovery = Discovery::default();
    discover_rules(content_root, &mut discovery);
    discover_tasks(content_root, &mut discovery);

    tracing::debug!(
        doc_count = discovery.index.len(),
        task_count = discovery.task_count,
        error_count = discovery.errors.len(),
        "discovery complete"
    );
    discovery
}

fn discover_rules(content_root: &Path, discovery: &mut Discovery) {
    let rules_dir = content_root.join(RULES_DIR);
    if !rules_dir.is_dir() {
        return;
    }
    let mut files = Vec::new();
    collect_markdown_files(content_root, &rules_dir, &mut files, &mut discovery.errors);
    for path in files {
        load_document(content_root, &path, &DocumentOrigin::Rule, discovery);
    }
}

fn discover_tasks(content_root: &Path, discovery: &mut Discovery) {
    let tasks_dir = content_root.join(TASKS_DIR);
    if !tasks_dir.is_dir() {
        return;
    }
    let task_dirs = match sorted_entries(&tasks_dir) {
        Ok(entries) => entries.into_iter().filter(|p| p.is_dir()),
        Err(e) => {
            discovery
                .errors
                .push(read_failure(&relative_path(content_root, &tasks_dir), &e));
            return;
        }
    };

    for task_dir in task_dirs {
        let Some(task) = task_dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        discovery.task_count += 1;

        let mut present = Vec::new();
        for role in TaskRole::ALL {
            let path = task_dir.join(role.file_name());
            if !path.is_file() {
                continue;
            }
            present.push(role);
            let origin = DocumentOrigin::Task {
                task: task.clone(),
                role,
            };
            load_document(content_root, &path, &origin, discovery);
        }

        let spec = discovery
            .index
            .task_spec(&task)
            .filter(|d| d.task.as_deref() == Some(task.as_str()));
        let missing = find_missing_required_files(&task, &present, spec);
        discovery.errors.extend(missing);
    }
}

fn load_document(content_root: &Path, path: &Path, origin: &DocumentOrigin, discovery: &mut Discovery) {
    let rel = relative_path(content_root, path);
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            discovery.errors.push(read_failure(&rel, &e));
            return;
        }
    };

    let frontmatter = match parse_frontmatter(&rel, &bytes) {
        Ok(fm) => fm,
        Err(e) => {
            discovery.errors.push(e);
            return;
        }
    };

    let (doc, schema_errors) = build_document(&rel, origin, &frontmatter, document_checksum(&bytes));
    discovery.errors.extend(schema_errors);

    if let Some(doc) = doc {
        if let Err(e) = discovery.index.insert(doc) {
            discovery.errors.push(e);
        }
    }
}
