//! diff command

use clap::Args;
use ctxkit_core::errors::ExError;
use ctxkit_engine::{diff, Workspace};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

/// A missing snapshot is not an error: JSON mode prints empty lists
pub fn execute(ws: &Workspace, args: DiffArgs) -> Result<(), ExError> {
    let outcome = diff(ws)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.diff)?);
    } else {
        print!("{}", outcome.human_summary());
    }
    Ok(())
}
