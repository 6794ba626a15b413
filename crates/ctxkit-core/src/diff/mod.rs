//! Document diff engine.
//!
//! Compares the current index against the last built manifest snapshot.
//!
//! ## Entry point
//!
//! ```ignore
//! use ctxkit_core::diff::engine::compute_diff;
//!
//! let diff = compute_diff(&snapshot, &index);
//! let summary = ctxkit_core::diff::human_summary::render_human_summary(&diff, true);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: `added`, `removed` and `changed` are byte-wise sorted.
//! - **Timestamp noise suppression**: only per-document checksums are compared.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compute_diff, diff_checksums};
pub use human_summary::render_human_summary;
pub use model::DocumentDiff;
