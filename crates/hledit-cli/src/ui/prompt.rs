//! Interactive account picker.

use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;

use hledit_core::options::option_index;

use crate::errors::CliError;

use super::context::UiContext;

/// Ask the user to pick an account from `options`.
///
/// `current` is preselected when it is one of the options. Returns `None`
/// when the user dismisses the picker (Esc or q), which leaves the posting
/// as it is.
pub fn pick_account(
    ctx: &UiContext,
    prompt: &str,
    options: &[String],
    current: &str,
) -> anyhow::Result<Option<String>> {
    if !ctx.interactive {
        return Err(CliError::invalid_input(
            "Picking an account needs a terminal. Use `hledit set-account` instead.",
        )
        .into());
    }
    if options.is_empty() {
        return Err(CliError::invalid_input(
            "No account options loaded.\nHint: Run `hledit options load <FILE>` first.",
        )
        .into());
    }

    let theme = ColorfulTheme::default();
    let selection = FuzzySelect::with_theme(&theme)
        .with_prompt(prompt)
        .default(option_index(options, current).unwrap_or(0))
        .items(options)
        .interact_opt()
        .map_err(|e| anyhow::anyhow!("Failed to read selection: {}", e))?;

    Ok(selection.and_then(|index| options.get(index).cloned()))
}
