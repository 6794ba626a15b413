use ctxkit_core::model::{Document, DocumentKind};
use ctxkit_core::snapshot::document_checksum;
use ctxkit_core::DocumentIndex;

/// Create a rule document whose checksum is derived from `content`
#[allow(dead_code)]
pub fn rule(id: &str, content: &str) -> Document {
    Document {
        id: id.to_string(),
        kind: DocumentKind::Rule,
        path: format!("rules/{}.md", id),
        task: None,
        version: 1,
        status: None,
        complexity: None,
        tags: vec![],
        references: vec![],
        checksum: document_checksum(content.as_bytes()),
    }
}

/// Create a task-scoped document
///
/// `status` only matters for the spec role.
#[allow(dead_code)]
pub fn task_doc(task: &str, role: &str, status: Option<&str>, content: &str) -> Document {
    Document {
        id: format!("{}-{}", task, role),
        kind: DocumentKind::from(role),
        path: format!("tasks/{}/{}.md", task, role),
        task: Some(task.to_string()),
        version: 1,
        status: status.map(str::to_string),
        complexity: if role == "spec" {
            Some("trivial".to_string())
        } else {
            None
        },
        tags: vec![],
        references: vec![],
        checksum: document_checksum(content.as_bytes()),
    }
}

/// Build an index, panicking on duplicates
#[allow(dead_code)]
pub fn index_of(docs: Vec<Document>) -> DocumentIndex {
    let mut index = DocumentIndex::new();
    for doc in docs {
        index.insert(doc).unwrap();
    }
    index
}
