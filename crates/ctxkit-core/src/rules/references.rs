use crate::errors::CtxError;
use crate::index::DocumentIndex;

/// Find references that resolve to no indexed document
///
/// Reported in id order, then reference order within a document.
pub fn find_unresolved_references(index: &DocumentIndex) -> Vec<CtxError> {
    index
        .iter()
        .flat_map(|doc| {
            doc.references
                .iter()
                .filter(|r| index.resolve_reference(r).is_none())
                .map(|r| CtxError::Reference {
                    from: doc.id.clone(),
                    to: r.clone(),
                })
        })
        .collect()
}
