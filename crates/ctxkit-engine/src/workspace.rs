//! Per-invocation workspace context
//!
//! Roots, configuration and the request id are resolved once and passed to
//! every command; nothing is looked up from process-wide state afterwards.

use std::path::{Path, PathBuf};

use ctxkit_core::config::Config;
use ctxkit_core::hooks::HookContext;
use ctxkit_core_types::RequestId;
use ctxkit_store::config::{find_content_root, find_state_dir, load_config, resolve_project_root};
use ctxkit_store::Result;

#[derive(Debug, Clone)]
pub struct Workspace {
    /// Directory holding `rules/`, `tasks/`, `adapters/` and `manifests.yaml`
    pub content_root: PathBuf,
    /// `.ctxkit/` directory: configuration and the private snapshot
    pub state_dir: PathBuf,
    /// Export output base when set; the content root otherwise
    pub project_root: Option<PathBuf>,
    pub config: Config,
    pub request_id: RequestId,
}

impl Workspace {
    /// Build a workspace from already-resolved parts
    pub fn new(content_root: impl Into<PathBuf>, state_dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            content_root: content_root.into(),
            state_dir: state_dir.into(),
            project_root: None,
            config,
            request_id: RequestId::new(),
        }
    }

    pub fn with_project_root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(project_root.into());
        self
    }

    /// Resolve roots and configuration starting from `cwd`
    ///
    /// # Errors
    ///
    /// Configuration load errors.
    pub fn discover(cwd: &Path, root: Option<&Path>, project_root: Option<&Path>) -> Result<Self> {
        let state_dir = find_state_dir(cwd);
        let config = load_config(&state_dir)?;
        let content_root = find_content_root(cwd, root);
        let project_root = resolve_project_root(cwd, project_root, &config, &state_dir);

        tracing::debug!(
            content_root = %content_root.display(),
            state_dir = %state_dir.display(),
            project_root = ?project_root,
            "workspace resolved"
        );

        Ok(Self {
            content_root,
            state_dir,
            project_root,
            config,
            request_id: RequestId::new(),
        })
    }

    /// Base directory for relative export `output_dir`s
    pub fn output_base(&self) -> &Path {
        self.project_root.as_deref().unwrap_or(&self.content_root)
    }

    /// Hook context with the root and configuration set
    pub(crate) fn hook_context(&self) -> HookContext<'_> {
        HookContext {
            root: Some(self.content_root.as_path()),
            config: Some(&self.config),
            ..HookContext::default()
        }
    }
}
