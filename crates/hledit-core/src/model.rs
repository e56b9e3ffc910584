//! Structured view of a ledger.
//!
//! Every value here is derived from raw text by [`crate::parser::parse`] and
//! is only meaningful for the text it was parsed from. Line indices in
//! particular go stale as soon as the text changes.

use serde::Serialize;

/// One account/amount line inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Posting {
    /// Account path, e.g. `expenses:food:groceries`
    pub account: String,

    /// Amount token exactly as written, e.g. `$-12.50`
    pub amount: String,

    /// Zero-based line index of this posting in the raw text
    pub source_line: usize,
}

impl Posting {
    pub fn new(account: impl Into<String>, amount: impl Into<String>, source_line: usize) -> Self {
        Self {
            account: account.into(),
            amount: amount.into(),
            source_line,
        }
    }
}

/// A header line and the postings that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Trimmed header line (date, description, status)
    pub header: String,

    /// Postings in order of appearance
    pub postings: Vec<Posting>,

    /// Zero-based line index of the header
    pub start_line: usize,
}

impl Transaction {
    pub fn new(header: impl Into<String>, start_line: usize) -> Self {
        Self {
            header: header.into(),
            postings: Vec::new(),
            start_line,
        }
    }

    pub fn with_postings(mut self, postings: Vec<Posting>) -> Self {
        self.postings = postings;
        self
    }

    /// Whether any posting uses `account`.
    pub fn touches(&self, account: &str) -> bool {
        self.postings.iter().any(|p| p.account == account)
    }
}
