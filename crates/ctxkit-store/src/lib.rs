//! ctxkit Store - filesystem layer
//!
//! Provides:
//! - Configuration loading and content/state/project root resolution
//! - Document discovery over `rules/` and `tasks/`
//! - Atomic writes for the manifest, snapshot and export record
//! - Adapter declaration loading and export materialization

pub mod atomic;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod export;
pub mod persist;

// Re-export key types
pub use discovery::{discover, Discovery};
pub use errors::Result;
