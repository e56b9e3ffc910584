//! Output mode routing.

use crate::helpers::OutputFormat;

use super::context::Terminal;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, one record per line, stable for scripts
    #[default]
    Plain,
    /// Tables and colors (TTY only)
    Pretty,
}

impl OutputMode {
    /// `--json` wins over everything. An explicit `--format plain`, a dumb
    /// terminal or a redirected stdout all give plain output.
    pub fn resolve(json: bool, format: Option<OutputFormat>, terminal: &Terminal) -> Self {
        if json {
            return Self::Json;
        }
        match format {
            Some(OutputFormat::Plain) => Self::Plain,
            _ if terminal.dumb || !terminal.stdout_tty => Self::Plain,
            _ => Self::Pretty,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
