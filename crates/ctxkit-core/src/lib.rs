//! ctxkit Core - document model, validation rules and derived artifacts
//!
//! This crate is the pure domain layer of ctxkit:
//! - Document model, frontmatter parsing and the per-kind schema table
//! - In-memory document index with reference resolution
//! - Required-file and reference validation
//! - Per-document and aggregated checksums, manifest generation
//! - Diff against the last manifest snapshot
//! - Export declaration and plan model
//! - Lifecycle hook registry
//!
//! It performs no filesystem writes; see `ctxkit-store` for persistence.

pub mod config;
pub mod diff;
pub mod errors;
pub mod export;
pub mod hooks;
pub mod index;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod snapshot;

// Used by the logging macros
pub use ctxkit_core_types;

// Re-export commonly used types
pub use config::Config;
pub use errors::{CtxError, ExError, ExErrorKind, Result};
pub use hooks::{HookContext, HookError, HookEvent, HookRegistry, LifecycleHook};
pub use index::DocumentIndex;
pub use model::{Document, DocumentKind, DocumentStatus};
pub use snapshot::Manifest;
