//! list command

use clap::Args;
use ctxkit_core::errors::ExError;
use ctxkit_engine::{list_documents, ListEntry, ListFilter, Workspace};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by status (e.g. active)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by kind (e.g. rule, spec)
    #[arg(long)]
    pub kind: Option<String>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(ws: &Workspace, args: ListArgs) -> Result<(), ExError> {
    let filter = ListFilter {
        status: args.status,
        kind: args.kind,
    };
    let entries = list_documents(ws, &filter)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_table(&entries));
    }
    Ok(())
}

/// Aligned `id  kind  status  path` table
fn render_table(entries: &[ListEntry]) -> String {
    if entries.is_empty() {
        return "No documents match.\n".to_string();
    }

    let w_id = column_width("id", entries.iter().map(|e| e.id.len()));
    let w_kind = column_width("kind", entries.iter().map(|e| e.kind.len()));
    let w_status = column_width(
        "status",
        entries
            .iter()
            .map(|e| e.status.as_deref().map_or(0, str::len)),
    );

    let mut out = format!(
        "{:<w_id$}  {:<w_kind$}  {:<w_status$}  path\n",
        "id", "kind", "status"
    );
    for e in entries {
        out.push_str(&format!(
            "{:<w_id$}  {:<w_kind$}  {:<w_status$}  {}\n",
            e.id,
            e.kind,
            e.status.as_deref().unwrap_or(""),
            e.path
        ));
    }
    out
}

fn column_width(header: &str, values: impl Iterator<Item = usize>) -> usize {
    values.max().unwrap_or(0).max(header.len())
}
