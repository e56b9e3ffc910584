use tracing::info;

use crate::app::AppContext;
use crate::cli::{ExportArgs, LoadArgs};
use crate::helpers::{read_text_input, write_text_output};

pub fn handle_load(app: &AppContext, args: &LoadArgs) -> anyhow::Result<()> {
    let text = read_text_input(args.file.as_deref())?;
    let mut session = app.open_session()?;
    session.replace_text(text)?;

    let transactions = session.transactions();
    let postings: usize = transactions.iter().map(|t| t.postings.len()).sum();
    info!(
        transactions = transactions.len(),
        postings, "loaded ledger text"
    );

    if !app.quiet() {
        println!(
            "Loaded {} transactions ({} postings)",
            transactions.len(),
            postings
        );
    }
    Ok(())
}

pub fn handle_export(app: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let session = app.open_session()?;
    write_text_output(args.output.as_deref(), session.text())?;

    if let Some(path) = args.output.as_deref() {
        if !app.quiet() {
            println!("Exported ledger to {}", path);
        }
    }
    Ok(())
}
