//! In-memory document index
//!
//! Rebuilt from the source tree on every invocation. Iteration is always in
//! byte-wise id order, which every derived artifact relies on.

use std::collections::BTreeMap;

use crate::errors::CtxError;
use crate::model::{Document, TaskRole};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentIndex {
    docs: BTreeMap<String, Document>,
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, rejecting an id that is already present
    ///
    /// # Errors
    ///
    /// `CtxError::DuplicateId` naming both paths; the index is left unchanged.
    pub fn insert(&mut self, doc: Document) -> Result<(), CtxError> {
        if let Some(existing) = self.docs.get(&doc.id) {
            return Err(CtxError::DuplicateId {
                id: doc.id.clone(),
                path: doc.path.clone(),
                existing_path: existing.path.clone(),
            });
        }
        self.docs.insert(doc.id.clone(), doc);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    /// Documents in id order
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.docs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Resolve a reference to an indexed id
    ///
    /// A reference matches an id directly, or names a task whose spec
    /// document (`<task>-spec`) is indexed.
    pub fn resolve_reference(&self, reference: &str) -> Option<&str> {
        if let Some((id, _)) = self.docs.get_key_value(reference) {
            return Some(id.as_str());
        }
        let spec_id = TaskRole::Spec.document_id(reference);
        self.docs.get_key_value(&spec_id).map(|(id, _)| id.as_str())
    }

    /// Spec document of a task, if indexed
    pub fn task_spec(&self, task: &str) -> Option<&Document> {
        self.docs.get(&TaskRole::Spec.document_id(task))
    }
}
