use tracing::debug;

use crate::app::AppContext;
use crate::cli::CategorizeArgs;
use crate::errors::CliError;
use crate::ui::format::posting_ref;
use crate::ui::prompt::pick_account;
use crate::ui::UiContext;

use super::edit::set_account;

/// Walk every posting on the target account and prompt for a replacement.
///
/// Postings are visited in document order. The list of targets is computed
/// once up front: an account edit rewrites a single line and never moves
/// other lines, so the remaining indices stay valid after each edit.
pub fn handle_categorize(app: &AppContext, args: &CategorizeArgs) -> anyhow::Result<()> {
    let ctx = UiContext::detect(false, None, app.no_color());
    let mut session = app.open_session()?;

    let target = match args.account.as_deref().or(session.highlighted_account()) {
        Some(account) => account.to_string(),
        None => {
            return Err(CliError::invalid_input(
                "No account to categorize.\nHint: Pass --account or run `hledit prefs highlight <ACCOUNT>`.",
            )
            .into())
        }
    };

    let pending = session.postings_on(&target);
    debug!(account = %target, count = pending.len(), "categorizing postings");
    if pending.is_empty() {
        if !app.quiet() {
            println!("No postings on {}", target);
        }
        return Ok(());
    }

    let total = pending.len();
    let mut changed = 0;
    for (step, (t, p)) in pending.into_iter().enumerate() {
        let txn = &session.transactions()[t];
        let amount = txn.postings[p].amount.clone();
        let prompt = format!(
            "[{}/{}] {} {}  {}",
            step + 1,
            total,
            posting_ref(t, p),
            txn.header,
            amount
        );

        match pick_account(&ctx, &prompt, session.account_options(), &target)? {
            Some(account) if account != target => {
                set_account(&mut session, t, p, &account)?;
                changed += 1;
            }
            Some(_) => {}
            None => {
                debug!("categorize stopped by user");
                break;
            }
        }
    }

    if !app.quiet() {
        println!("Updated {} of {} postings", changed, total);
    }
    Ok(())
}
