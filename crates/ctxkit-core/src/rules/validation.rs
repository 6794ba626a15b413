use crate::errors::{CtxError, ExError, ExErrorKind};
use crate::index::DocumentIndex;

use super::references;

/// Every problem found in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<CtxError>,
}

impl ValidationReport {
    pub fn new(errors: Vec<CtxError>) -> Self {
        Self { errors }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = CtxError>) {
        self.errors.extend(errors);
    }

    /// Errors that make the index itself unusable
    pub fn index_errors(&self) -> impl Iterator<Item = &CtxError> {
        self.errors.iter().filter(|e| e.is_index_error())
    }

    pub fn has_index_errors(&self) -> bool {
        self.index_errors().next().is_some()
    }

    /// Fail when any error was collected
    ///
    /// # Errors
    ///
    /// `ValidationFailed` carrying every collected issue.
    pub fn into_result(self, op: &str) -> Result<(), ExError> {
        if self.is_ok() {
            return Ok(());
        }
        Err(failure(op, self.errors))
    }

    /// Fail only on index errors
    ///
    /// # Errors
    ///
    /// `ValidationFailed` carrying the index errors.
    pub fn require_usable_index(&self, op: &str) -> Result<(), ExError> {
        let blocking: Vec<CtxError> = self.index_errors().cloned().collect();
        if blocking.is_empty() {
            return Ok(());
        }
        Err(failure(op, blocking))
    }
}

fn failure(op: &str, issues: Vec<CtxError>) -> ExError {
    ExError::new(ExErrorKind::ValidationFailed)
        .with_op(op)
        .with_message(format!("{} validation error(s)", issues.len()))
        .with_issues(issues)
}

/// Run the graph-integrity checks over a built index
///
/// `discovery_errors` are the parse, schema, duplicate-id and required-file
/// problems gathered while the index was built; they come first in the
/// report.
pub fn validate_index(index: &DocumentIndex, discovery_errors: Vec<CtxError>) -> ValidationReport {
    let mut report = ValidationReport::new(discovery_errors);
    report.extend(references::find_unresolved_references(index));
    report
}
