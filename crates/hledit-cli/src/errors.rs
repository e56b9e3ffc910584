//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; everything else is an
//! `anyhow::Error` and exits with 1.

use std::fmt;

use hledit_core::Error as CoreError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Transaction or posting not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Map a core error from an edit to a CLI error the user can act on.
pub fn from_edit_error(err: CoreError) -> anyhow::Error {
    if err.is_out_of_range() {
        return CliError::not_found(
            err.to_string(),
            "Hint: Run `hledit list` to see transaction and posting indices.",
        )
        .into();
    }
    if matches!(err, CoreError::InvalidAccount { .. }) {
        return CliError::invalid_input(err.to_string()).into();
    }
    err.into()
}

/// Exit code for an error returned from a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_out_of_range_maps_to_not_found() {
        let err = from_edit_error(CoreError::TransactionOutOfRange { index: 7, len: 2 });
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);
        assert!(err.to_string().contains("hledit list"));
    }

    #[test]
    fn test_invalid_account_maps_to_invalid_input() {
        let err = from_edit_error(CoreError::InvalidAccount {
            account: "$".to_string(),
            reason: "bad".to_string(),
        });
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_other_errors_exit_with_one() {
        let err = from_edit_error(CoreError::Storage("disk full".to_string()));
        assert_eq!(exit_code_for(&err), 1);
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), 1);
    }
}
