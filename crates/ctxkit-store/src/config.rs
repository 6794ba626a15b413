//! Configuration loading and root resolution

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ctxkit_core::config::Config;

use crate::errors::{config_error, io_error_at, Result};

pub const STATE_DIR_NAME: &str = ".ctxkit";
pub const CONFIG_FILE: &str = "config.yaml";
pub const MANIFEST_FILE: &str = "manifests.yaml";
pub const RULES_DIR: &str = "rules";
pub const TASKS_DIR: &str = "tasks";

/// Nearest ancestor of `start` containing `.ctxkit/`, else `start/.ctxkit`
pub fn find_state_dir(start: &Path) -> PathBuf {
    start
        .ancestors()
        .map(|dir| dir.join(STATE_DIR_NAME))
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| start.join(STATE_DIR_NAME))
}

/// Resolve the content root
///
/// An explicit root wins. Otherwise the nearest ancestor of `start` holding
/// `manifests.yaml`, `rules/` or `tasks/`; otherwise `start` itself.
pub fn find_content_root(start: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(root) = explicit {
        return if root.is_absolute() {
            root.to_path_buf()
        } else {
            start.join(root)
        };
    }
    start
        .ancestors()
        .find(|dir| {
            dir.join(MANIFEST_FILE).is_file()
                || dir.join(RULES_DIR).is_dir()
                || dir.join(TASKS_DIR).is_dir()
        })
        .unwrap_or(start)
        .to_path_buf()
}

/// Load `<state_dir>/config.yaml`; a missing file yields defaults
///
/// # Errors
///
/// `InvalidInput` for a malformed file, `Io` when it cannot be read.
pub fn load_config(state_dir: &Path) -> Result<Config> {
    let path = state_dir.join(CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(io_error_at("load_config", &path, e)),
    };
    Config::from_yaml_str(&content).map_err(|e| config_error(&path, e.message()))
}

/// Resolve the project root used as export output base
///
/// An explicit value wins; else the configured `project_root`, relative to
/// the directory that contains the state dir.
pub fn resolve_project_root(
    start: &Path,
    explicit: Option<&Path>,
    config: &Config,
    state_dir: &Path,
) -> Option<PathBuf> {
    if let Some(root) = explicit {
        return Some(if root.is_absolute() {
            root.to_path_buf()
        } else {
            start.join(root)
        });
    }
    let configured = Path::new(config.project_root.as_deref()?);
    if configured.is_absolute() {
        return Some(configured.to_path_buf());
    }
    let base = state_dir.parent().unwrap_or(start);
    Some(base.join(configured))
}
