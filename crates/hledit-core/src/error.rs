//! Error types for hledit core operations.
//!
//! Parsing never fails; these errors come from edits that address a posting
//! the current model does not have, from account names that would not
//! survive a reparse, and from the persistence layer. The CLI maps them to
//! user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for hledit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for hledit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transaction index past the end of the model
    #[error("Transaction {index} out of range ({len} transactions)")]
    TransactionOutOfRange { index: usize, len: usize },

    /// Posting index past the end of a transaction's postings
    #[error("Posting {posting} out of range for transaction {transaction} ({len} postings)")]
    PostingOutOfRange {
        transaction: usize,
        posting: usize,
        len: usize,
    },

    /// A posting points at a line the raw text does not have
    #[error("Line {line} out of range ({len} lines); the model is stale")]
    LineOutOfRange { line: usize, len: usize },

    /// A posting's line no longer holds that posting
    #[error("Line {line} no longer holds the posting; the model is stale")]
    StaleModel { line: usize },

    /// Account name that cannot be written back as a posting
    #[error("Invalid account {account:?}: {reason}")]
    InvalidAccount { account: String, reason: String },

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    pub(crate) fn invalid_account(account: &str, reason: impl Into<String>) -> Self {
        Error::InvalidAccount {
            account: account.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by a model that does not match the text it
    /// is being applied to.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Error::TransactionOutOfRange { .. }
                | Error::PostingOutOfRange { .. }
                | Error::LineOutOfRange { .. }
                | Error::StaleModel { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
