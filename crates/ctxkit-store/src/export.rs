//! Adapter declaration loading and export materialization

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ctxkit_core::export::{declaration_path, parse_declaration, ExportDeclaration, ExportPlan};

use crate::atomic::atomic_write;
use crate::errors::{declaration_error, io_error_at, Result};

/// Read and parse `adapters/<adapter>/context.json`
///
/// # Errors
///
/// `Declaration` when the file is missing or malformed.
pub fn load_declaration(content_root: &Path, adapter: &str) -> Result<ExportDeclaration> {
    let path = content_root.join(declaration_path(adapter));
    let bytes = match fs::read(&path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(declaration_error(
                adapter,
                format!("declaration not found: {}", path.display()),
            )
            .with_path(path.display().to_string()));
        }
        Err(e) => return Err(io_error_at("load_declaration", &path, e)),
    };
    Ok(parse_declaration(adapter, &bytes)?)
}

/// Whether a declared source resolves to an existing file
pub fn source_is_file(path: &Path) -> bool {
    path.is_file()
}

/// What an export wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedExport {
    pub copied: Vec<PathBuf>,
    pub record_path: PathBuf,
}

/// Whether two paths name the same existing file once links are resolved
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copy every planned file, then write the export record
///
/// # Errors
///
/// - `Declaration` when a destination already is its own source; checked
///   for every entry before anything is written
/// - IO errors from directory creation, copying or the record write.
pub fn materialize(plan: &ExportPlan) -> Result<MaterializedExport> {
    if let Some(copy) = plan
        .copies
        .iter()
        .find(|c| same_file(&c.source_path, &c.dest_path))
    {
        return Err(declaration_error(
            &plan.adapter,
            format!(
                "destination {} is the source file itself",
                copy.dest_path.display()
            ),
        )
        .with_op("materialize")
        .with_path(copy.dest_path.display().to_string()));
    }

    fs::create_dir_all(&plan.output_path)
        .map_err(|e| io_error_at("create_output_dir", &plan.output_path, e))?;

    let mut copied = Vec::with_capacity(plan.copies.len());
    for copy in &plan.copies {
        if let Some(parent) = copy.dest_path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error_at("create_output_dir", parent, e))?;
        }
        fs::copy(&copy.source_path, &copy.dest_path)
            .map_err(|e| io_error_at("copy_source", &copy.source_path, e))?;
        copied.push(copy.dest_path.clone());
    }

    let record = serde_json::to_string_pretty(&plan.record)?;
    let record_path = plan.record_path();
    atomic_write(&record_path, record.as_bytes())?;

    tracing::debug!(
        adapter = %plan.adapter,
        copied = copied.len(),
        record = %record_path.display(),
        "Materialized export"
    );

    Ok(MaterializedExport {
        copied,
        record_path,
    })
}
