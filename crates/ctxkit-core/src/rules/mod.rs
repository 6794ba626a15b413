//! Validation rules over documents and the index

pub mod references;
pub mod required_files;
pub mod schema;
pub mod validation;

pub use references::find_unresolved_references;
pub use required_files::{effective_complexity, find_missing_required_files};
pub use schema::{build_document, schema_for, KindSchema};
pub use validation::{validate_index, ValidationReport};
