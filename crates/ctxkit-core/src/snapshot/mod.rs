//! Checksums and manifest generation.
//!
//! ## Responsibilities
//!
//! - Compute per-document and aggregated checksums
//! - Define the manifest schema and build it from a validated index
//!
//! ## Non-Responsibilities
//!
//! - Persistence (handled by `ctxkit-store`)
//! - Orchestration (handled by `ctxkit-engine`)

pub mod digest;
pub mod manifest;

pub use digest::{compute_root_checksum, document_checksum, eligible_documents, normalize_content};
pub use manifest::{build_manifest, Manifest, ManifestEntry};
