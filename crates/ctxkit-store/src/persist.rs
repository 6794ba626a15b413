//! Manifest and snapshot persistence.
//!
//! The canonical manifest (`<content_root>/manifests.yaml`) and the private
//! snapshot (`<state_dir>/state/last_manifest.json`) are replaced together:
//! both are staged first and renamed only after both stages succeeded.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ctxkit_core::snapshot::Manifest;

use crate::atomic::atomic_write_all;
use crate::config::MANIFEST_FILE;
use crate::errors::{io_error_at, Result};

pub const SNAPSHOT_DIR: &str = "state";
pub const SNAPSHOT_FILE: &str = "last_manifest.json";

/// Where a manifest build was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedManifest {
    pub manifest_path: PathBuf,
    pub snapshot_path: PathBuf,
}

pub fn manifest_path(content_root: &Path) -> PathBuf {
    content_root.join(MANIFEST_FILE)
}

pub fn snapshot_path(state_dir: &Path) -> PathBuf {
    state_dir.join(SNAPSHOT_DIR).join(SNAPSHOT_FILE)
}

/// Write the canonical manifest and the snapshot
///
/// # Errors
///
/// Serialization errors before anything is written, or IO errors; on a
/// staging failure both previous artifacts are left intact.
pub fn persist_manifest(
    content_root: &Path,
    state_dir: &Path,
    manifest: &Manifest,
) -> Result<PersistedManifest> {
    let yaml = manifest.to_yaml()?;
    let json = manifest.to_json()?;

    let persisted = PersistedManifest {
        manifest_path: manifest_path(content_root),
        snapshot_path: snapshot_path(state_dir),
    };

    atomic_write_all(&[
        (persisted.manifest_path.as_path(), yaml.as_bytes()),
        (persisted.snapshot_path.as_path(), json.as_bytes()),
    ])?;

    tracing::debug!(
        manifest = %persisted.manifest_path.display(),
        snapshot = %persisted.snapshot_path.display(),
        doc_count = manifest.documents.len(),
        "Persisted manifest and snapshot"
    );

    Ok(persisted)
}

/// Load the last snapshot; `None` when no build has happened yet
///
/// # Errors
///
/// `InvalidManifest` when the snapshot exists but is unreadable as a
/// manifest, `Io` when it cannot be read.
pub fn load_snapshot(state_dir: &Path) -> Result<Option<Manifest>> {
    let path = snapshot_path(state_dir);
    let bytes = match fs::read(&path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error_at("load_snapshot", &path, e)),
    };
    Manifest::from_json(&bytes)
        .map(Some)
        .map_err(|e| e.with_path(path.display().to_string()))
}
