//! Human-readable summary renderer for document diffs.

use crate::diff::model::DocumentDiff;

pub const NO_BASELINE_MESSAGE: &str = "No previous manifest in state. Run build-manifest first.";
pub const NO_CHANGES_MESSAGE: &str = "No changes.";

/// Render the plain-text summary printed by `diff`.
///
/// `baseline_present` is false when no snapshot existed; the diff is then
/// empty by construction and the summary says so.
pub fn render_human_summary(diff: &DocumentDiff, baseline_present: bool) -> String {
    if !baseline_present {
        return format!("{}\n", NO_BASELINE_MESSAGE);
    }
    if diff.is_empty() {
        return format!("{}\n", NO_CHANGES_MESSAGE);
    }

    let mut out = String::new();
    for (label, ids) in [
        ("Added", &diff.added),
        ("Removed", &diff.removed),
        ("Changed", &diff.changed),
    ] {
        if !ids.is_empty() {
            out.push_str(&format!("{}: {}\n", label, ids.join(", ")));
        }
    }
    out
}
