use serde_json::json;

use crate::app::AppContext;
use crate::cli::{PrefsArgs, PrefsCommand};
use crate::ui::{kv, UiContext};

pub fn handle_prefs(app: &AppContext, args: &PrefsArgs) -> anyhow::Result<()> {
    match &args.command {
        PrefsCommand::Show { json } => show_prefs(app, *json),
        PrefsCommand::Fixed { account } => {
            let mut session = app.open_session()?;
            session.set_fixed_account(account.as_deref())?;
            report(app, "Fixed account", session.fixed_account());
            Ok(())
        }
        PrefsCommand::Highlight { account } => {
            let mut session = app.open_session()?;
            session.set_highlighted_account(account.as_deref())?;
            report(app, "Highlighted account", session.highlighted_account());
            Ok(())
        }
    }
}

fn show_prefs(app: &AppContext, json: bool) -> anyhow::Result<()> {
    let ctx = UiContext::detect(json, None, app.no_color());
    let session = app.open_session()?;
    let store = session.store().root().display().to_string();

    if ctx.mode.is_json() {
        let output = json!({
            "fixed_account": session.fixed_account(),
            "highlighted_account": session.highlighted_account(),
            "store": store,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}",
        kv(&ctx, "Fixed account", session.fixed_account().unwrap_or("-"))
    );
    println!(
        "{}",
        kv(
            &ctx,
            "Highlighted account",
            session.highlighted_account().unwrap_or("-")
        )
    );
    println!("{}", kv(&ctx, "Store", &store));
    Ok(())
}

fn report(app: &AppContext, label: &str, value: Option<&str>) {
    if app.quiet() {
        return;
    }
    match value {
        Some(account) => println!("{} set to {}", label, account),
        None => println!("{} cleared", label),
    }
}
