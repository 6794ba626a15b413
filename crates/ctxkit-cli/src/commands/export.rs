//! export command

use clap::Args;
use ctxkit_core::errors::ExError;
use ctxkit_core::hooks::HookRegistry;
use ctxkit_engine::{export, Workspace};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Adapter name; its declaration lives at adapters/<name>/context.json
    pub adapter: String,
}

pub fn execute(ws: &Workspace, hooks: &HookRegistry, args: ExportArgs) -> Result<(), ExError> {
    let report = export(ws, hooks, &args.adapter)?;
    println!(
        "Exported {} file(s) to {}: {}",
        report.copied.len(),
        report.adapter,
        report.output_path.display()
    );
    Ok(())
}
