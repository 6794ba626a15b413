//! Diff computation engine.
//!
//! The entry point is [`compute_diff`], which classifies every id present in
//! either the snapshot or the current index.

use std::collections::{BTreeMap, BTreeSet};

use crate::diff::model::DocumentDiff;
use crate::index::DocumentIndex;
use crate::snapshot::manifest::Manifest;

/// Compare a snapshot against the current index.
///
/// Only per-document checksums are compared; manifest-level fields such as
/// `generated_at` never produce a change.
pub fn compute_diff(baseline: &Manifest, current: &DocumentIndex) -> DocumentDiff {
    diff_checksums(&baseline.checksums(), current)
}

/// Compare an id-to-checksum baseline against the current index.
pub fn diff_checksums(baseline: &BTreeMap<&str, &str>, current: &DocumentIndex) -> DocumentDiff {
    let current_ids: BTreeSet<&str> = current.ids().collect();
    let baseline_ids: BTreeSet<&str> = baseline.keys().copied().collect();

    let added = current_ids
        .difference(&baseline_ids)
        .map(|id| id.to_string())
        .collect();
    let removed = baseline_ids
        .difference(&current_ids)
        .map(|id| id.to_string())
        .collect();
    let changed = current_ids
        .intersection(&baseline_ids)
        .filter(|id| {
            let now = current.get(id).map(|d| d.checksum.as_str());
            now != baseline.get(*id).copied()
        })
        .map(|id| id.to_string())
        .collect();

    DocumentDiff {
        added,
        removed,
        changed,
    }
}
