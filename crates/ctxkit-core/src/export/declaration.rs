//! Adapter declaration model
//!
//! A declaration is read-only input: `{ "output_dir": .., "documents": [..] }`.
//! The declared list is the exact export surface; nothing is added or
//! filtered here.

use std::path::{Component, Path};

use serde::Deserialize;

use crate::errors::CtxError;

/// Relative location of a declaration inside the content root
pub fn declaration_path(adapter: &str) -> String {
    format!("adapters/{}/context.json", adapter)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDeclaration {
    pub adapter: String,
    pub output_dir: String,
    pub documents: Vec<DeclaredDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredDocument {
    pub id: String,
    pub kind: String,
    /// Relative to the content root
    pub source: String,
    /// Relative to `output_dir`; defaults to `source`
    pub target: String,
}

#[derive(Deserialize)]
struct RawDeclaration {
    #[serde(default)]
    output_dir: Option<String>,
    #[serde(default)]
    documents: Option<Vec<RawEntry>>,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    target: Option<String>,
}

/// Parse and check a declaration
///
/// # Errors
///
/// `CtxError::Declaration` for malformed JSON, a missing `output_dir`, an
/// entry without `source`, or a path that would leave its base directory.
pub fn parse_declaration(adapter: &str, bytes: &[u8]) -> Result<ExportDeclaration, CtxError> {
    let decl_err = |reason: String| CtxError::Declaration {
        adapter: adapter.to_string(),
        reason,
    };

    let raw: RawDeclaration = serde_json::from_slice(bytes)
        .map_err(|e| decl_err(format!("{} is not valid: {}", declaration_path(adapter), e)))?;

    let output_dir = raw
        .output_dir
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| decl_err("declaration must contain a non-empty output_dir".to_string()))?;

    let mut documents = Vec::new();
    for (position, entry) in raw.documents.unwrap_or_default().into_iter().enumerate() {
        let id = entry.id.unwrap_or_default();
        let source = entry
            .source
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| decl_err(format!("document entry {} ('{}') is missing source", position, id)))?;
        if escapes_base(&source) {
            return Err(decl_err(format!("source '{}' must be a relative path inside the content root", source)));
        }

        let target = entry
            .target
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| source.clone());
        if escapes_base(&target) {
            return Err(decl_err(format!("target '{}' must be a relative path inside output_dir", target)));
        }

        documents.push(DeclaredDocument {
            id,
            kind: entry.kind.unwrap_or_default(),
            source,
            target,
        });
    }

    Ok(ExportDeclaration {
        adapter: adapter.to_string(),
        output_dir,
        documents,
    })
}

fn escapes_base(path: &str) -> bool {
    let path = Path::new(path);
    path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
}
