use tracing::info;

use hledit_core::{DirStore, Session};

use crate::app::AppContext;
use crate::cli::{EditArgs, SetAccountArgs};
use crate::errors::from_edit_error;
use crate::ui::format::posting_ref;
use crate::ui::prompt::pick_account;
use crate::ui::UiContext;

pub fn handle_set_account(app: &AppContext, args: &SetAccountArgs) -> anyhow::Result<()> {
    let mut session = app.open_session()?;
    let previous = set_account(&mut session, args.transaction, args.posting, &args.account)?;

    if !app.quiet() {
        println!(
            "Posting {}: {} -> {}",
            posting_ref(args.transaction, args.posting),
            previous,
            args.account.trim()
        );
    }
    Ok(())
}

pub fn handle_edit(app: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let ctx = UiContext::detect(false, None, app.no_color());
    let mut session = app.open_session()?;
    let posting = session
        .document()
        .posting(args.transaction, args.posting)
        .map_err(from_edit_error)?
        .clone();

    let prompt = format!(
        "{} {}  {}",
        posting_ref(args.transaction, args.posting),
        session.transactions()[args.transaction].header,
        posting.amount
    );
    let Some(account) = pick_account(&ctx, &prompt, session.account_options(), &posting.account)?
    else {
        if !app.quiet() {
            println!("No selection; posting unchanged");
        }
        return Ok(());
    };

    set_account(&mut session, args.transaction, args.posting, &account)?;
    if !app.quiet() {
        println!(
            "Posting {}: {} -> {}",
            posting_ref(args.transaction, args.posting),
            posting.account,
            account
        );
    }
    Ok(())
}

/// Apply one edit and persist it. Returns the account it replaced.
pub(super) fn set_account(
    session: &mut Session<DirStore>,
    transaction: usize,
    posting: usize,
    account: &str,
) -> anyhow::Result<String> {
    let previous = session
        .document()
        .posting(transaction, posting)
        .map_err(from_edit_error)?
        .account
        .clone();
    session
        .apply_account_edit(transaction, posting, account)
        .map_err(from_edit_error)?;
    info!(
        posting = %posting_ref(transaction, posting),
        from = %previous,
        to = %account.trim(),
        "account updated"
    );
    Ok(previous)
}
