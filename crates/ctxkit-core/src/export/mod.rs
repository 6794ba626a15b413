//! Declarative adapter export.
//!
//! `LOAD_DECLARATION -> VALIDATE_SOURCES -> ENRICH -> MATERIALIZE -> WRITE_MANIFEST`.
//! Declaration parsing and plan building live here; reading the
//! declaration and materializing the plan are done by `ctxkit-store`.

pub mod declaration;
pub mod plan;

pub use declaration::{declaration_path, parse_declaration, DeclaredDocument, ExportDeclaration};
pub use plan::{
    build_export_plan, resolve_output_dir, ExportEntry, ExportPlan, ExportRecord, PlannedCopy,
    EXPORT_RECORD_FILE,
};
