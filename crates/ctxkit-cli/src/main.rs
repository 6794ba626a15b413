//! ctxkit CLI
//!
//! Command-line interface for ctxkit

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ctxkit_core::errors::ExError;
use ctxkit_core::hooks::HookRegistry;
use ctxkit_core::logging_facility::{self, Profile};
use ctxkit_engine::Workspace;
use ctxkit_store::errors::io_error;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "ctxkit")]
#[command(about = "ctxkit - Validate, index, diff and export AI context documents", long_about = None)]
struct Cli {
    /// Content root holding rules/, tasks/ and adapters/ (default: auto-detect)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Base directory for export output (default: config project_root, else content root)
    #[arg(long, global = true)]
    project_root: Option<PathBuf>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate frontmatter, schema, required files and references
    Validate,
    /// Build manifests.yaml and save the snapshot used by diff
    BuildManifest,
    /// List indexed documents
    List(commands::list::ListArgs),
    /// Show changes since the last build-manifest
    Diff(commands::diff::DiffArgs),
    /// Export documents declared for an adapter
    Export(commands::export::ExportArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    if let Err(e) = run(cli) {
        commands::report_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ExError> {
    let cwd = std::env::current_dir().map_err(|e| io_error("current_dir", e))?;
    let ws = Workspace::discover(&cwd, cli.root.as_deref(), cli.project_root.as_deref())?;

    // Plugins register here; none ship with the binary
    let hooks = HookRegistry::new();

    match cli.command {
        Commands::Validate => commands::validate::execute(&ws, &hooks),
        Commands::BuildManifest => commands::build_manifest::execute(&ws, &hooks),
        Commands::List(args) => commands::list::execute(&ws, args),
        Commands::Diff(args) => commands::diff::execute(&ws, args),
        Commands::Export(args) => commands::export::execute(&ws, &hooks, args),
    }
}
