use serde::{Deserialize, Serialize};

use super::kind::{Complexity, DocumentKind, DocumentStatus, TaskRole};

/// Where a document sits in the content tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// `rules/**/*.md`; id comes from the frontmatter
    Rule,
    /// `tasks/<task>/<role>.md`; id is derived as `<task>-<role>`
    Task { task: String, role: TaskRole },
}

/// An indexed document
///
/// `status` and `complexity` keep the authored strings so that manifests
/// round-trip them verbatim; the typed views are `status_value` and
/// `complexity_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub kind: DocumentKind,
    /// Path relative to the content root, `/`-separated
    pub path: String,
    /// Owning task identifier, for task-scoped documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    pub version: u64,
    pub status: Option<String>,
    pub complexity: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
    pub checksum: String,
}

impl Document {
    pub fn status_value(&self) -> Option<DocumentStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn complexity_value(&self) -> Option<Complexity> {
        self.complexity.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn is_active(&self) -> bool {
        self.status_value() == Some(DocumentStatus::Active)
    }
}
