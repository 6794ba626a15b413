//! Manifest schema and generation.
//!
//! A manifest is the persisted summary of one validated index. It is
//! replaced wholesale on every build and never patched.
//!
//! ## Manifest Fields
//!
//! - `convention_version`: Convention version from configuration
//! - `generated_at`: UTC timestamp, `YYYY-MM-DDTHH:MM:SSZ`
//! - `generator`: `ctxkit <version>`
//! - `root_checksum`: Aggregated checksum of the eligible subset
//! - `documents`: Every indexed document, sorted by id
//! - `active_set`: Ids whose own status is `active`, sorted
//! - `relations`: One `uses` edge per reference

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ExError, ExErrorKind, Result};
use crate::index::DocumentIndex;
use crate::model::{Document, DocumentKind, Relation};
use crate::snapshot::digest::compute_root_checksum;

pub const GENERATOR_NAME: &str = "ctxkit";
pub const DEFAULT_CONVENTION_VERSION: &str = "0.0.1";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Manifest record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub convention_version: String,
    pub generated_at: String,
    pub generator: String,
    pub root_checksum: String,
    pub documents: Vec<ManifestEntry>,
    pub active_set: Vec<String>,
    pub relations: Vec<Relation>,
}

/// Per-document entry in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub id: String,
    pub kind: DocumentKind,
    pub path: String,
    pub version: u64,
    pub status: Option<String>,
    pub complexity: Option<String>,
    pub checksum: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Document> for ManifestEntry {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            kind: doc.kind.clone(),
            path: doc.path.clone(),
            version: doc.version,
            status: doc.status.clone(),
            complexity: doc.complexity.clone(),
            checksum: doc.checksum.clone(),
            tags: doc.tags.clone(),
        }
    }
}

impl Manifest {
    /// Map of document id to checksum
    pub fn checksums(&self) -> BTreeMap<&str, &str> {
        self.documents
            .iter()
            .map(|d| (d.id.as_str(), d.checksum.as_str()))
            .collect()
    }

    /// Canonical YAML form
    ///
    /// # Errors
    ///
    /// Serialization errors.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Snapshot JSON form
    ///
    /// # Errors
    ///
    /// Serialization errors.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a snapshot
    ///
    /// # Errors
    ///
    /// `InvalidManifest` when the bytes are not a manifest.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            ExError::new(ExErrorKind::InvalidManifest)
                .with_op("load_snapshot")
                .with_message(format!("snapshot is not a readable manifest: {}", e))
        })
    }
}

/// Generator identity recorded in manifests
pub fn generator() -> String {
    format!("{} {}", GENERATOR_NAME, env!("CARGO_PKG_VERSION"))
}

/// Build a manifest from a validated index.
///
/// Callers must only pass an index that passed validation; references are
/// expected to resolve, and an unresolved one is recorded verbatim.
///
/// ## Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use ctxkit_core::index::DocumentIndex;
/// use ctxkit_core::snapshot::manifest::build_manifest;
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
/// let manifest = build_manifest(&DocumentIndex::new(), "0.0.1", at);
/// assert_eq!(manifest.generated_at, "2025-01-02T03:04:05Z");
/// assert!(manifest.documents.is_empty());
/// ```
pub fn build_manifest(
    index: &DocumentIndex,
    convention_version: &str,
    generated_at: DateTime<Utc>,
) -> Manifest {
    let documents: Vec<ManifestEntry> = index.iter().map(ManifestEntry::from).collect();

    let active_set: Vec<String> = index
        .iter()
        .filter(|d| d.is_active())
        .map(|d| d.id.clone())
        .collect();

    let relations: Vec<Relation> = index
        .iter()
        .flat_map(|doc| {
            doc.references.iter().map(move |r| {
                let to = index.resolve_reference(r).unwrap_or(r.as_str());
                Relation::uses(doc.id.clone(), to)
            })
        })
        .collect();

    Manifest {
        convention_version: convention_version.to_string(),
        generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        generator: generator(),
        root_checksum: compute_root_checksum(index),
        documents,
        active_set,
        relations,
    }
}
