//! `build-manifest`: write the canonical manifest and the diff snapshot
//!
//! ## Pipeline (in order):
//! 1. Discover and validate (any error is a hard stop, nothing written)
//! 2. `before_build_manifest`
//! 3. Build the manifest from the index
//! 4. Persist manifest and snapshot together
//! 5. `after_build_manifest`

use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;
use ctxkit_core::hooks::{HookContext, HookEvent, HookRegistry};
use ctxkit_core::snapshot::{self, Manifest};
use ctxkit_core::{log_op_end, log_op_error, log_op_start};
use ctxkit_store::persist::persist_manifest;
use ctxkit_store::Result;

use crate::commands::loaded::load_tree;
use crate::workspace::Workspace;

#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
    pub snapshot_path: PathBuf,
}

/// Build and persist the manifest
///
/// ## Errors
///
/// - `ValidationFailed`: the tree has outstanding errors
/// - `Serialization` / `Io`: the manifest could not be written; both
///   previous artifacts are left in place
pub fn build_manifest(ws: &Workspace, hooks: &HookRegistry) -> Result<BuildOutcome> {
    log_op_start!("build_manifest", request_id = %ws.request_id);
    let start = Instant::now();

    let result = build_manifest_impl(ws, hooks).map_err(|e| {
        let e = e.with_request_id(ws.request_id.clone());
        log_op_error!(
            "build_manifest",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "build_manifest",
        duration_ms = start.elapsed().as_millis() as u64,
        doc_count = result.manifest.documents.len(),
        root_checksum = %result.manifest.root_checksum
    );

    Ok(result)
}

fn build_manifest_impl(ws: &Workspace, hooks: &HookRegistry) -> Result<BuildOutcome> {
    let tree = load_tree(ws);
    tree.report.into_result("build_manifest")?;

    hooks.dispatch(
        HookEvent::BeforeBuildManifest,
        &HookContext {
            index: Some(&tree.index),
            ..ws.hook_context()
        },
    );

    let manifest =
        snapshot::build_manifest(&tree.index, &ws.config.convention_version, Utc::now());
    let persisted = persist_manifest(&ws.content_root, &ws.state_dir, &manifest)?;

    hooks.dispatch(
        HookEvent::AfterBuildManifest,
        &HookContext {
            manifest: Some(&manifest),
            ..ws.hook_context()
        },
    );

    Ok(BuildOutcome {
        manifest,
        manifest_path: persisted.manifest_path,
        snapshot_path: persisted.snapshot_path,
    })
}
