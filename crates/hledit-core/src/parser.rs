//! Line-oriented ledger parser.
//!
//! A ledger is a sequence of blocks. Each block starts with a header line
//! (no leading space or tab) and continues with indented posting lines until
//! a blank line or the next header. Only postings of the form
//!
//! ```text
//!     <account>  $<sign?><digits>.<digits>
//! ```
//!
//! are recognised. Anything else is left out of the structured view but
//! stays in the raw text, which this module never modifies.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::model::{Posting, Transaction};

/// Currency sigil that starts an amount token.
pub const SIGIL: char = '$';

/// Parse raw ledger text into transactions.
///
/// This never fails: unrecognised lines are skipped.
pub fn parse(text: &str) -> Vec<Transaction> {
    let mut transactions = Vec::new();
    let mut open: Option<Transaction> = None;

    for (index, line) in text.split('\n').enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if let Some(txn) = open.take() {
                transactions.push(txn);
            }
            continue;
        }

        if !starts_indented(line) {
            if let Some(txn) = open.take() {
                transactions.push(txn);
            }
            open = Some(Transaction::new(trimmed, index));
        } else if let Some(txn) = open.as_mut() {
            if let Some(matched) = match_posting(line) {
                txn.postings
                    .push(Posting::new(matched.account, matched.amount, index));
            } else {
                trace!(line = index, "skipping unrecognised posting line");
            }
        }
    }

    if let Some(txn) = open.take() {
        transactions.push(txn);
    }

    trace!(count = transactions.len(), "parsed transactions");
    transactions
}

/// Header lines are the ones that do not start with a space or a tab.
fn starts_indented(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

/// A posting recognised on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingMatch<'a> {
    /// Text before the amount, trimmed
    pub account: &'a str,
    /// The amount token
    pub amount: &'a str,
    /// Byte range of the amount token within the line
    pub amount_span: Range<usize>,
}

/// Indented account, at least one whitespace, then a `$` amount with a
/// decimal point. Digits are ASCII only.
static POSTING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s+([^$]+)\s+(\$[+-]?[0-9]+\.[0-9]+)").expect("posting pattern is valid")
});

/// Match a line against the posting pattern.
///
/// The account is the text before the first `$`, trimmed. Text after the
/// amount is ignored.
pub fn match_posting(line: &str) -> Option<PostingMatch<'_>> {
    let captures = POSTING.captures(line)?;
    let account = captures.get(1)?;
    let amount = captures.get(2)?;

    Some(PostingMatch {
        account: account.as_str().trim(),
        amount: amount.as_str(),
        amount_span: amount.range(),
    })
}
