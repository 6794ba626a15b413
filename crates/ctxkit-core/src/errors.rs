use ctxkit_core_types::RequestId;
use thiserror::Error;

/// Result type alias using the canonical ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// tests and machine-readable CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Document/validation
    Parse,
    Schema,
    Reference,
    RequiredFile,
    DuplicateId,
    /// One or more validation issues block the operation (see `ExError::issues`)
    ValidationFailed,

    // Export
    Declaration,
    SourceNotFound,

    // Snapshot
    /// Snapshot bytes exist but are not a readable manifest
    InvalidManifest,

    // Input/config
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Schema => "ERR_SCHEMA",
            ExErrorKind::Reference => "ERR_REFERENCE",
            ExErrorKind::RequiredFile => "ERR_REQUIRED_FILE",
            ExErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            ExErrorKind::ValidationFailed => "ERR_VALIDATION_FAILED",
            ExErrorKind::Declaration => "ERR_DECLARATION",
            ExErrorKind::SourceNotFound => "ERR_SOURCE_NOT_FOUND",
            ExErrorKind::InvalidManifest => "ERR_INVALID_MANIFEST",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the list of
/// collected issues when several problems are reported together.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    doc_id: Option<String>,
    path: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    issues: Vec<CtxError>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            doc_id: None,
            path: None,
            request_id: None,
            message: String::new(),
            issues: Vec::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add document ID context
    pub fn with_doc_id(mut self, id: impl Into<String>) -> Self {
        self.doc_id = Some(id.into());
        self
    }

    /// Add path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the collected issues that caused this error
    pub fn with_issues(mut self, issues: Vec<CtxError>) -> Self {
        self.issues = issues;
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the document ID context, if any
    pub fn doc_id(&self) -> Option<&str> {
        self.doc_id.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Issues collected before this error was raised (empty for single-cause errors)
    pub fn issues(&self) -> &[CtxError] {
        &self.issues
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(doc_id) = &self.doc_id {
            write!(f, " (doc_id: {})", doc_id)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for index, validation and export problems
///
/// Validation collects these rather than stopping at the first one, so a
/// single `validate` run can report every problem in the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CtxError {
    /// Structured header missing or malformed
    #[error("{path}: parse error: {reason}")]
    Parse { path: String, reason: String },

    /// Missing or invalid field for the document's kind
    #[error("{path}: schema error in field '{field}': {reason}")]
    Schema {
        path: String,
        field: String,
        reason: String,
    },

    /// Reference that resolves to no indexed document
    #[error("reference error: {from} references unknown id {to}")]
    Reference { from: String, to: String },

    /// Task is missing a file required by its complexity
    #[error("{task}: required file {file} missing (complexity={complexity})")]
    RequiredFile {
        task: String,
        file: String,
        complexity: String,
    },

    /// Two documents resolve to the same id
    #[error("{path}: duplicate id {id} (first defined in {existing_path})")]
    DuplicateId {
        id: String,
        path: String,
        existing_path: String,
    },

    /// Adapter declaration missing or malformed
    #[error("adapter {adapter}: declaration error: {reason}")]
    Declaration { adapter: String, reason: String },

    /// Declared export source does not exist under the content root
    #[error("adapter {adapter}: source not found for {id}: {source_path}")]
    SourceNotFound {
        adapter: String,
        id: String,
        source_path: String,
    },

    /// File could not be read
    #[error("{path}: io error: {reason}")]
    Io { path: String, reason: String },

    /// Serialization error (JSON/YAML encoding or decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl CtxError {
    /// Map to the canonical kind
    pub fn kind(&self) -> ExErrorKind {
        match self {
            CtxError::Parse { .. } => ExErrorKind::Parse,
            CtxError::Schema { .. } => ExErrorKind::Schema,
            CtxError::Reference { .. } => ExErrorKind::Reference,
            CtxError::RequiredFile { .. } => ExErrorKind::RequiredFile,
            CtxError::DuplicateId { .. } => ExErrorKind::DuplicateId,
            CtxError::Declaration { .. } => ExErrorKind::Declaration,
            CtxError::SourceNotFound { .. } => ExErrorKind::SourceNotFound,
            CtxError::Io { .. } => ExErrorKind::Io,
            CtxError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }

    /// True for errors that make the index itself untrustworthy.
    ///
    /// Structural problems (missing task files, dangling references) leave the
    /// index usable for read-only views such as `list` and `diff`.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            CtxError::Parse { .. }
                | CtxError::Schema { .. }
                | CtxError::DuplicateId { .. }
                | CtxError::Io { .. }
        )
    }
}

/// Conversion from CtxError to ExError
impl From<CtxError> for ExError {
    fn from(err: CtxError) -> Self {
        let message = err.to_string();
        match &err {
            CtxError::Parse { path, .. } | CtxError::Io { path, .. } => {
                ExError::new(err.kind()).with_path(path.clone())
            }
            CtxError::Schema { path, .. } => ExError::new(err.kind()).with_path(path.clone()),
            CtxError::Reference { from, .. } => ExError::new(err.kind()).with_doc_id(from.clone()),
            CtxError::RequiredFile { task, .. } => {
                ExError::new(err.kind()).with_doc_id(task.clone())
            }
            CtxError::DuplicateId { id, path, .. } => ExError::new(err.kind())
                .with_doc_id(id.clone())
                .with_path(path.clone()),
            CtxError::Declaration { .. } => ExError::new(err.kind()).with_op("load_declaration"),
            CtxError::SourceNotFound { id, source_path, .. } => ExError::new(err.kind())
                .with_op("validate_sources")
                .with_doc_id(id.clone())
                .with_path(source_path.clone()),
            CtxError::Serialization { .. } => ExError::new(err.kind()),
        }
        .with_message(message)
    }
}

impl From<serde_json::Error> for CtxError {
    fn from(err: serde_json::Error) -> Self {
        CtxError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        CtxError::from(err).into()
    }
}

impl From<serde_yaml::Error> for CtxError {
    fn from(err: serde_yaml::Error) -> Self {
        CtxError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ExError {
    fn from(err: serde_yaml::Error) -> Self {
        CtxError::from(err).into()
    }
}
