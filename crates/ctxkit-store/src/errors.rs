//! Error handling for ctxkit-store
//!
//! Wraps ctxkit-core ExError with store-specific helpers

use std::path::Path;

use ctxkit_core::errors::{CtxError, ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an IO error attributed to a path
pub fn io_error_at(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    io_error(operation, err).with_path(path.display().to_string())
}

/// Collectable IO problem for a document read during discovery
pub fn read_failure(path: &str, err: &std::io::Error) -> CtxError {
    CtxError::Io {
        path: path.to_string(),
        reason: err.to_string(),
    }
}

/// Create a declaration error
pub fn declaration_error(adapter: &str, reason: impl Into<String>) -> ExError {
    CtxError::Declaration {
        adapter: adapter.to_string(),
        reason: reason.into(),
    }
    .into()
}

/// Create a config error
pub fn config_error(path: &Path, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("load_config")
        .with_path(path.display().to_string())
        .with_message(reason)
}
