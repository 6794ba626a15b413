//! Diff output types.
//!
//! Every list is byte-wise sorted so serialization is deterministic.

use serde::{Deserialize, Serialize};

/// Per-document changes between the snapshot and the current tree.
///
/// Unchanged ids are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentDiff {
    /// Ids present now but not in the snapshot
    pub added: Vec<String>,
    /// Ids in the snapshot but no longer present
    pub removed: Vec<String>,
    /// Ids present in both whose checksum differs
    pub changed: Vec<String>,
}

impl DocumentDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
