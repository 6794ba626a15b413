//! Lifecycle hooks
//!
//! Hooks are registered explicitly into a slot per event. A failing or
//! panicking hook is logged and discarded; it never affects the command
//! that triggered it.

use std::collections::HashMap;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;

use crate::config::Config;
use crate::index::DocumentIndex;
use crate::snapshot::manifest::Manifest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    BeforeValidate,
    AfterValidate,
    BeforeBuildManifest,
    AfterBuildManifest,
    BeforeExport,
    AfterExport,
}

impl HookEvent {
    pub const ALL: [HookEvent; 6] = [
        HookEvent::BeforeValidate,
        HookEvent::AfterValidate,
        HookEvent::BeforeBuildManifest,
        HookEvent::AfterBuildManifest,
        HookEvent::BeforeExport,
        HookEvent::AfterExport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HookEvent::BeforeValidate => "before_validate",
            HookEvent::AfterValidate => "after_validate",
            HookEvent::BeforeBuildManifest => "before_build_manifest",
            HookEvent::AfterBuildManifest => "after_build_manifest",
            HookEvent::BeforeExport => "before_export",
            HookEvent::AfterExport => "after_export",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named arguments passed to hooks
///
/// Only what is already computed at the dispatch point is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HookContext<'a> {
    pub root: Option<&'a Path>,
    pub config: Option<&'a Config>,
    pub index: Option<&'a DocumentIndex>,
    pub manifest: Option<&'a Manifest>,
    pub adapter: Option<&'a str>,
    /// Validation outcome, set on `after_validate`
    pub ok: Option<bool>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HookError(pub String);

impl From<&str> for HookError {
    fn from(s: &str) -> Self {
        HookError(s.to_string())
    }
}

impl From<String> for HookError {
    fn from(s: String) -> Self {
        HookError(s)
    }
}

pub trait LifecycleHook {
    /// Handle one lifecycle event
    ///
    /// # Errors
    ///
    /// Any error is logged by the dispatcher and otherwise ignored.
    fn on_event(&self, event: HookEvent, ctx: &HookContext<'_>) -> Result<(), HookError>;
}

impl<F> LifecycleHook for F
where
    F: Fn(HookEvent, &HookContext<'_>) -> Result<(), HookError>,
{
    fn on_event(&self, event: HookEvent, ctx: &HookContext<'_>) -> Result<(), HookError> {
        self(event, ctx)
    }
}

/// Registry of hooks, one ordered slot per event
#[derive(Default)]
pub struct HookRegistry {
    slots: HashMap<HookEvent, Vec<Box<dyn LifecycleHook>>>,
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<(&str, usize)> = HookEvent::ALL
            .iter()
            .map(|e| (e.as_str(), self.len(*e)))
            .collect();
        f.debug_struct("HookRegistry").field("slots", &counts).finish()
    }
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook to an event's slot
    pub fn register(&mut self, event: HookEvent, hook: impl LifecycleHook + 'static) {
        self.slots.entry(event).or_default().push(Box::new(hook));
    }

    /// Append a closure to an event's slot
    pub fn register_fn<F>(&mut self, event: HookEvent, hook: F)
    where
        F: Fn(HookEvent, &HookContext<'_>) -> Result<(), HookError> + 'static,
    {
        self.register(event, hook);
    }

    /// Number of hooks registered for an event
    pub fn len(&self, event: HookEvent) -> usize {
        self.slots.get(&event).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.values().all(Vec::is_empty)
    }

    /// Invoke every hook for `event` in registration order
    ///
    /// Errors and panics are caught and logged. Returns how many hooks failed.
    pub fn dispatch(&self, event: HookEvent, ctx: &HookContext<'_>) -> usize {
        let Some(hooks) = self.slots.get(&event) else {
            return 0;
        };

        let mut failed = 0;
        for (position, hook) in hooks.iter().enumerate() {
            match catch_unwind(AssertUnwindSafe(|| hook.on_event(event, ctx))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    failed += 1;
                    tracing::warn!(
                        hook_event = event.as_str(),
                        position,
                        error = %err,
                        "hook failed; ignored"
                    );
                }
                Err(_) => {
                    failed += 1;
                    tracing::warn!(
                        hook_event = event.as_str(),
                        position,
                        "hook panicked; ignored"
                    );
                }
            }
        }
        failed
    }
}
