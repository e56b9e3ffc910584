//! Reading and writing raw text.

use std::io::{self, IsTerminal, Read, Write};

use crate::errors::CliError;

/// Read text verbatim from `file`, or from stdin when no file is given.
///
/// Stdin must be redirected; reading from an interactive terminal is
/// refused so the command never hangs waiting for input.
pub fn read_text_input(file: Option<&str>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e));
    }

    if io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "No input file given and stdin is a terminal.\nHint: Pass a FILE or pipe the text in.",
        )
        .into());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}

/// Write text verbatim to `file`, or to stdout when no file is given.
pub fn write_text_output(file: Option<&str>, text: &str) -> anyhow::Result<()> {
    if let Some(path) = file {
        return std::fs::write(path, text)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e));
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| anyhow::anyhow!("Failed to write stdout: {}", e))
}
