use crate::errors::CtxError;
use crate::model::{Complexity, Document, TaskRole};

/// Complexity that decides a task's required files
///
/// Falls back to `normal` when the spec is missing or its complexity is
/// absent or invalid; the schema check reports that case separately.
pub fn effective_complexity(spec: Option<&Document>) -> Complexity {
    spec.and_then(Document::complexity_value)
        .unwrap_or(Complexity::Normal)
}

/// Find role files a task must have but does not
///
/// `present` lists the role files found on disk, whether or not they parsed.
pub fn find_missing_required_files(
    task: &str,
    present: &[TaskRole],
    spec: Option<&Document>,
) -> Vec<CtxError> {
    let complexity = effective_complexity(spec);
    complexity
        .required_roles()
        .iter()
        .filter(|role| !present.contains(*role))
        .map(|role| CtxError::RequiredFile {
            task: task.to_string(),
            file: role.file_name().to_string(),
            complexity: complexity.to_string(),
        })
        .collect()
}
