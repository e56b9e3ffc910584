//! What the process is attached to, and what that means for output.

use std::io::IsTerminal;

use crate::helpers::OutputFormat;

use super::mode::OutputMode;

/// Facts about the terminal, read once per command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color: bool,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stdin_tty: std::io::stdin().is_terminal(),
            dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Output decisions for one command.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether the account picker may be shown
    pub interactive: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    pub fn new(
        terminal: Terminal,
        json: bool,
        format: Option<OutputFormat>,
        no_color_flag: bool,
    ) -> Self {
        let mode = OutputMode::resolve(json, format, &terminal);
        Self {
            color: mode.is_pretty() && !no_color_flag && !terminal.no_color,
            interactive: terminal.stdout_tty && terminal.stdin_tty,
            mode,
        }
    }

    /// Context for the current process.
    pub fn detect(json: bool, format: Option<OutputFormat>, no_color_flag: bool) -> Self {
        Self::new(Terminal::detect(), json, format, no_color_flag)
    }

    /// Plain, colorless, non-interactive.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self::new(Terminal::default(), false, None, true)
    }
}
