use hledit_core::Transaction;

use crate::app::AppContext;
use crate::cli::{ListArgs, ShowArgs};
use crate::errors::CliError;
use crate::helpers::parse_output_format;
use crate::output::{posting_rows, print_transaction, transaction_json, transactions_json, POSTING_COLUMNS};
use crate::ui::{hint, print, simple_table, UiContext};

pub fn handle_list(app: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    let ctx = UiContext::detect(args.json, format, app.no_color());

    let session = app.open_session()?;
    let selected: Vec<(usize, &Transaction)> = session
        .transactions()
        .iter()
        .enumerate()
        .filter(|(_, txn)| args.account.as_deref().map_or(true, |a| txn.touches(a)))
        .collect();

    if ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&transactions_json(selected.iter().copied()))?;
        println!("{}", output);
        return Ok(());
    }

    if selected.is_empty() {
        if !app.quiet() {
            print(&ctx, "No transactions.");
            print(&ctx, &hint(&ctx, "hledit load <FILE>"));
        }
        return Ok(());
    }

    let rows = posting_rows(
        &ctx,
        &selected,
        session.highlighted_account(),
        session.fixed_account(),
    );
    print(&ctx, &simple_table(&ctx, &POSTING_COLUMNS, &rows));
    Ok(())
}

pub fn handle_show(app: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let ctx = UiContext::detect(args.json, None, app.no_color());
    let session = app.open_session()?;
    let txn = session.transactions().get(args.transaction).ok_or_else(|| {
        CliError::not_found(
            format!(
                "Transaction {} not found ({} transactions)",
                args.transaction,
                session.transactions().len()
            ),
            "Hint: Run `hledit list` to see transaction indices.",
        )
    })?;

    if ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&transaction_json(args.transaction, txn))?;
        println!("{}", output);
    } else {
        print_transaction(
            &ctx,
            args.transaction,
            txn,
            session.highlighted_account(),
            session.fixed_account(),
            app.quiet(),
        );
    }
    Ok(())
}
