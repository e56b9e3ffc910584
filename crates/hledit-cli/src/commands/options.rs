use tracing::info;

use crate::app::AppContext;
use crate::cli::{OptionsArgs, OptionsCommand};
use crate::helpers::read_text_input;
use crate::ui::{hint, print, UiContext};

pub fn handle_options(app: &AppContext, args: &OptionsArgs) -> anyhow::Result<()> {
    match &args.command {
        OptionsCommand::Load { file } => load_options(app, file.as_deref()),
        OptionsCommand::List { json } => list_options(app, *json),
    }
}

fn load_options(app: &AppContext, file: Option<&str>) -> anyhow::Result<()> {
    let text = read_text_input(file)?;
    let mut session = app.open_session()?;
    session.replace_options(text)?;

    let count = session.account_options().len();
    info!(options = count, "loaded account options");
    if !app.quiet() {
        println!("Loaded {} account options", count);
    }
    Ok(())
}

fn list_options(app: &AppContext, json: bool) -> anyhow::Result<()> {
    let ctx = UiContext::detect(json, None, app.no_color());
    let session = app.open_session()?;
    let options = session.account_options();

    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(options)?);
        return Ok(());
    }

    if options.is_empty() {
        if !app.quiet() {
            print(&ctx, "No account options.");
            print(&ctx, &hint(&ctx, "hledit options load <FILE>"));
        }
        return Ok(());
    }

    for option in options {
        println!("{}", option);
    }
    Ok(())
}
