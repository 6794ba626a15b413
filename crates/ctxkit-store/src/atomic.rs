//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

use crate::errors::{io_error_at, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn temp_path_for(target_path: &Path) -> PathBuf {
    let name = target_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target_path.with_file_name(format!(".{}.tmp", name))
}

/// A write staged next to its target, not yet visible
#[derive(Debug)]
pub struct StagedWrite {
    temp_path: PathBuf,
    target_path: PathBuf,
}

impl StagedWrite {
    /// Write bytes to a temp file beside `target_path`
    ///
    /// # Errors
    ///
    /// IO errors creating the parent directory or writing the temp file; no
    /// temp file is left behind.
    pub fn stage(target_path: &Path, content: &[u8]) -> Result<Self> {
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error_at("create_parent_dir", parent, e))?;
        }

        let temp_path = temp_path_for(target_path);
        if let Err(e) = fs::write(&temp_path, content) {
            let _ = fs::remove_file(&temp_path);
            return Err(io_error_at("write_temp", &temp_path, e));
        }

        Ok(Self {
            temp_path,
            target_path: target_path.to_path_buf(),
        })
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Rename the temp file over the target
    ///
    /// # Errors
    ///
    /// IO error from the rename; the temp file is removed.
    pub fn commit(self) -> Result<PathBuf> {
        if let Err(e) = fs::rename(&self.temp_path, &self.target_path) {
            let _ = fs::remove_file(&self.temp_path);
            return Err(io_error_at("rename_temp", &self.target_path, e));
        }
        Ok(self.target_path)
    }

    /// Drop the staged content, leaving the target untouched
    pub fn discard(self) {
        let _ = fs::remove_file(&self.temp_path);
    }
}

/// Stage every write first, then rename them all
///
/// If any stage fails, every temp file already written is removed and all
/// targets keep their previous content.
///
/// # Errors
///
/// The first staging or rename error.
pub fn atomic_write_all<P, C>(writes: &[(P, C)]) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    C: AsRef<[u8]>,
{
    let mut staged = Vec::with_capacity(writes.len());
    for (target, content) in writes {
        match StagedWrite::stage(target.as_ref(), content.as_ref()) {
            Ok(s) => staged.push(s),
            Err(e) => {
                staged.into_iter().for_each(StagedWrite::discard);
                return Err(e);
            }
        }
    }

    let mut written = Vec::with_capacity(staged.len());
    let mut pending = staged.into_iter();
    while let Some(s) = pending.next() {
        match s.commit() {
            Ok(path) => written.push(path),
            Err(e) => {
                pending.for_each(StagedWrite::discard);
                return Err(e);
            }
        }
    }
    Ok(written)
}

/// Atomically write bytes to a file
///
/// Uses temp file + rename to ensure atomic write
///
/// # Errors
///
/// IO errors from staging or renaming.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    StagedWrite::stage(target_path, content)?.commit()?;
    Ok(())
}
