//! validate command

use ctxkit_core::errors::ExError;
use ctxkit_core::hooks::HookRegistry;
use ctxkit_engine::{validate, Workspace};

pub fn execute(ws: &Workspace, hooks: &HookRegistry) -> Result<(), ExError> {
    let summary = validate(ws, hooks)?;
    println!("Validated {} document(s).", summary.doc_count);
    Ok(())
}
