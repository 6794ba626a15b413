pub mod build_manifest;
pub mod diff;
pub mod export;
pub mod list;
pub mod validate;

use ctxkit_core::errors::ExError;

/// Print an error and every collected issue to stderr
pub fn report_error(err: &ExError) {
    eprintln!("Error: {}", err);
    for issue in err.issues() {
        eprintln!("  - {}", issue);
    }
}
