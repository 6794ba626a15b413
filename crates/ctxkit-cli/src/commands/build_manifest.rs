//! build-manifest command

use ctxkit_core::errors::ExError;
use ctxkit_core::hooks::HookRegistry;
use ctxkit_engine::{build_manifest, Workspace};

pub fn execute(ws: &Workspace, hooks: &HookRegistry) -> Result<(), ExError> {
    let outcome = build_manifest(ws, hooks)?;
    let manifest = &outcome.manifest;

    println!(
        "Built manifest: {} documents, active_set={}.",
        manifest.documents.len(),
        manifest.active_set.len()
    );
    println!("  manifest: {}", outcome.manifest_path.display());
    println!("  root_checksum: {}", manifest.root_checksum);
    Ok(())
}
