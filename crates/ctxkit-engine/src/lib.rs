//! ctxkit Engine - Orchestration layer
//!
//! Provides high-level command orchestration that coordinates between
//! core domain logic and the filesystem store. Every command takes an
//! explicit [`Workspace`] context and owns op-boundary logging.

pub mod commands;
pub mod workspace;

pub use commands::build_manifest::{build_manifest, BuildOutcome};
pub use commands::diff::{diff, DiffOutcome};
pub use commands::export::{export, ExportReport};
pub use commands::list::{list_documents, ListEntry, ListFilter};
pub use commands::validate::{validate, ValidateSummary};
pub use workspace::Workspace;
