//! Structured edit to raw text, then reparse.
//!
//! An account edit rewrites exactly one physical line of the ledger and then
//! derives a fresh model from the new text. The previous model is only used
//! to find the line; it is never patched. Whatever the rewritten line parses
//! to is what the caller sees next.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{Posting, Transaction};
use crate::parser::{self, SIGIL};

/// Indentation used when the target line has no leading whitespace.
pub const FALLBACK_INDENT: &str = "    ";

/// Column (counted from the start of the account) the amount is aligned to.
pub const DEFAULT_AMOUNT_COLUMN: usize = 30;

/// Spaces kept between a long account and its amount.
///
/// Two is the smallest gap that keeps an account containing single spaces
/// unambiguous for hledger.
pub const DEFAULT_MIN_GAP: usize = 2;

/// Layout of a rewritten posting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Target column of the amount, relative to the account start
    pub amount_column: usize,
    /// Minimum number of spaces between account and amount
    pub min_gap: usize,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            amount_column: DEFAULT_AMOUNT_COLUMN,
            min_gap: DEFAULT_MIN_GAP,
        }
    }
}

impl RewriteOptions {
    pub fn new(amount_column: usize, min_gap: usize) -> Self {
        Self {
            amount_column,
            min_gap,
        }
    }

    /// Spaces to put after an account of `account_width` characters.
    ///
    /// Never less than one: an account running straight into its amount
    /// would no longer parse as a posting.
    pub fn padding_for(&self, account_width: usize) -> usize {
        self.amount_column
            .saturating_sub(account_width)
            .max(self.min_gap)
            .max(1)
    }
}

/// Check that `account` can be written into a posting line and read back
/// unchanged. Returns the trimmed account.
pub fn validate_account(account: &str) -> Result<&str> {
    let trimmed = account.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_account(account, "account is empty"));
    }
    if trimmed.contains(SIGIL) {
        return Err(Error::invalid_account(
            account,
            format!("account may not contain '{}'", SIGIL),
        ));
    }
    if trimmed.contains(['\n', '\r']) {
        return Err(Error::invalid_account(account, "account spans lines"));
    }
    Ok(trimmed)
}

/// Look up a posting by transaction and posting index.
pub fn locate(
    transactions: &[Transaction],
    transaction_index: usize,
    posting_index: usize,
) -> Result<&Posting> {
    let txn = transactions
        .get(transaction_index)
        .ok_or(Error::TransactionOutOfRange {
            index: transaction_index,
            len: transactions.len(),
        })?;
    txn.postings
        .get(posting_index)
        .ok_or(Error::PostingOutOfRange {
            transaction: transaction_index,
            posting: posting_index,
            len: txn.postings.len(),
        })
}

/// Build the replacement text for one posting line.
///
/// The original indentation is kept (or [`FALLBACK_INDENT`] if there is
/// none). A trailing `\r` is kept so CRLF files stay CRLF; anything else
/// after the amount is not carried over.
pub fn rewrite_posting_line(
    line: &str,
    account: &str,
    amount: &str,
    options: &RewriteOptions,
) -> String {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    let indent = if indent.is_empty() {
        warn!("posting line has no indentation, using fallback");
        FALLBACK_INDENT
    } else {
        indent
    };

    let tail = if line.ends_with('\r') { "\r" } else { "" };

    let padding = options.padding_for(account.chars().count());
    let mut out = String::with_capacity(indent.len() + account.len() + padding + amount.len());
    out.push_str(indent);
    out.push_str(account);
    out.extend(std::iter::repeat(' ').take(padding));
    out.push_str(amount);
    out.push_str(tail);
    out
}

/// Replace the account of one posting and reparse.
///
/// `transactions` must be the result of parsing `raw_text`. The returned
/// text differs from `raw_text` on the posting's line only, and the
/// returned model is a fresh parse of that text.
///
/// Fails with [`Error::StaleModel`] if the posting's line no longer parses
/// to a posting with the same amount.
pub fn apply_account_edit(
    raw_text: &str,
    transactions: &[Transaction],
    transaction_index: usize,
    posting_index: usize,
    new_account: &str,
    options: &RewriteOptions,
) -> Result<(String, Vec<Transaction>)> {
    let account = validate_account(new_account)?;
    let posting = locate(transactions, transaction_index, posting_index)?;

    let mut lines: Vec<&str> = raw_text.split('\n').collect();
    let line = *lines
        .get(posting.source_line)
        .ok_or(Error::LineOutOfRange {
            line: posting.source_line,
            len: lines.len(),
        })?;
    match parser::match_posting(line) {
        Some(found) if found.amount == posting.amount => {}
        _ => {
            return Err(Error::StaleModel {
                line: posting.source_line,
            })
        }
    }

    let rewritten = rewrite_posting_line(line, account, &posting.amount, options);
    debug!(
        transaction = transaction_index,
        posting = posting_index,
        line = posting.source_line,
        from = %posting.account,
        to = %account,
        "rewriting posting account"
    );
    lines[posting.source_line] = &rewritten;

    let new_text = lines.join("\n");
    let new_transactions = parser::parse(&new_text);
    Ok((new_text, new_transactions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const GROCERIES: &str = "2024-01-05 groceries\n    expenses:food:groceries     $45.00\n    assets:cash                $-45.00\n";

    fn edit(text: &str, t: usize, p: usize, account: &str) -> (String, Vec<Transaction>) {
        let txns = parse(text);
        apply_account_edit(text, &txns, t, p, account, &RewriteOptions::default()).unwrap()
    }

    #[test]
    fn test_example_edit() {
        let (text, txns) = edit(GROCERIES, 0, 0, "expenses:food:dailymeals");
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines[1], "    expenses:food:dailymeals      $45.00");
        assert_eq!(lines[2], "    assets:cash                $-45.00");
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].postings[0].account, "expenses:food:dailymeals");
        assert_eq!(txns[0].postings[1], Posting::new("assets:cash", "$-45.00", 2));
    }

    #[test]
    fn test_amount_aligned_to_column() {
        let (text, _) = edit(GROCERIES, 0, 1, "assets:bank");
        let line = text.split('\n').nth(2).unwrap();
        assert_eq!(line.find('$'), Some(4 + DEFAULT_AMOUNT_COLUMN));
    }

    #[test]
    fn test_long_account_keeps_min_gap() {
        let long = "expenses:travel:2024maldives:insurance";
        let (text, txns) = edit(GROCERIES, 0, 0, long);
        let line = text.split('\n').nth(1).unwrap();
        assert_eq!(line, format!("    {}  $45.00", long));
        assert_eq!(txns[0].postings[0].account, long);
    }

    #[test]
    fn test_zero_min_gap_still_separates() {
        let options = RewriteOptions::new(30, 0);
        assert_eq!(options.padding_for(28), 2);
        assert_eq!(options.padding_for(30), 1);
        assert_eq!(options.padding_for(45), 1);

        let txns = parse(GROCERIES);
        let account = "expenses:travel:2024maldives:insurance";
        let (_, reparsed) = apply_account_edit(GROCERIES, &txns, 0, 0, account, &options).unwrap();
        assert_eq!(reparsed[0].postings[0].account, account);
    }

    #[test]
    fn test_isolation() {
        let text = "2024-01-01 a\n  x  $1.00\n  ; note\n  y   $-1.00\n\n2024-01-02 b\n\tz\t$2.00\n";
        let (new_text, _) = edit(text, 0, 1, "assets:cash");
        let before: Vec<&str> = text.split('\n').collect();
        let after: Vec<&str> = new_text.split('\n').collect();

        assert_eq!(before.len(), after.len());
        for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
            if i == 3 {
                assert_ne!(b, a);
            } else {
                assert_eq!(b, a, "line {} changed", i);
            }
        }
    }

    #[test]
    fn test_noop_edit_round_trips_model() {
        let original = parse(GROCERIES);
        let (_, txns) = edit(GROCERIES, 0, 0, "expenses:food:groceries");
        assert_eq!(txns, original);
    }

    #[test]
    fn test_edit_is_idempotent() {
        let (once, _) = edit(GROCERIES, 0, 1, "assets:bank:dbs:paylah");
        let (twice, _) = edit(&once, 0, 1, "assets:bank:dbs:paylah");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tab_indent_preserved() {
        let (text, _) = edit("2024-01-01 a\n\tx\t$2.00", 0, 0, "y");
        assert!(text.ends_with(&format!("\ty{}$2.00", " ".repeat(29))));
    }

    #[test]
    fn test_crlf_terminator_preserved() {
        let text = "2024-01-01 a\r\n    x  $1.00\r\n    y  $-1.00\r\n";
        let (new_text, txns) = edit(text, 0, 0, "expenses:z");
        let lines: Vec<&str> = new_text.split('\n').collect();
        assert!(lines[1].ends_with("$1.00\r"));
        assert_eq!(lines[2], "    y  $-1.00\r");
        assert_eq!(txns[0].postings[0].account, "expenses:z");
    }

    #[test]
    fn test_text_after_amount_not_carried() {
        let text = "2024-01-01 a\n  x  $1.00 ; receipt 42\r\n";
        let (new_text, txns) = edit(text, 0, 0, "y");
        assert_eq!(
            new_text,
            format!("2024-01-01 a\n  y{}$1.00\r\n", " ".repeat(29))
        );
        assert_eq!(txns[0].postings[0].amount, "$1.00");
    }

    #[test]
    fn test_new_account_is_trimmed() {
        let (_, txns) = edit(GROCERIES, 0, 0, "  expenses:gift  ");
        assert_eq!(txns[0].postings[0].account, "expenses:gift");
    }

    #[test]
    fn test_rejects_unparseable_accounts() {
        let txns = parse(GROCERIES);
        let options = RewriteOptions::default();
        for bad in ["", "   ", "cost$", "a\nb"] {
            let err = apply_account_edit(GROCERIES, &txns, 0, 0, bad, &options).unwrap_err();
            assert!(matches!(err, Error::InvalidAccount { .. }), "{:?}", bad);
        }
    }

    #[test]
    fn test_out_of_range_indices() {
        let txns = parse(GROCERIES);
        let options = RewriteOptions::default();

        let err = apply_account_edit(GROCERIES, &txns, 1, 0, "x", &options).unwrap_err();
        assert!(matches!(err, Error::TransactionOutOfRange { index: 1, len: 1 }));

        let err = apply_account_edit(GROCERIES, &txns, 0, 2, "x", &options).unwrap_err();
        assert!(matches!(err, Error::PostingOutOfRange { posting: 2, len: 2, .. }));
    }

    #[test]
    fn test_stale_model_line_out_of_range() {
        let txns = parse(GROCERIES);
        let err = apply_account_edit("2024-01-05 groceries", &txns, 0, 1, "x", &Default::default())
            .unwrap_err();
        assert!(matches!(err, Error::LineOutOfRange { line: 2, len: 1 }));
    }

    #[test]
    fn test_stale_model_line_is_header() {
        let txns = parse(GROCERIES);
        let shifted = "2024-01-05 groceries\n2024-01-06 moved\n    assets:cash  $-45.00\n";
        let err = apply_account_edit(shifted, &txns, 0, 0, "x", &Default::default()).unwrap_err();
        assert!(matches!(err, Error::StaleModel { line: 1 }));
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_stale_model_amount_changed() {
        let txns = parse(GROCERIES);
        let changed = GROCERIES.replace("$45.00", "$46.00");
        let err = apply_account_edit(&changed, &txns, 0, 0, "x", &Default::default()).unwrap_err();
        assert!(matches!(err, Error::StaleModel { line: 1 }));
    }

    #[test]
    fn test_fallback_indent() {
        let line = rewrite_posting_line("x  $1.00", "y", "$1.00", &RewriteOptions::new(4, 2));
        assert_eq!(line, "    y   $1.00");
    }

    #[test]
    fn test_dropped_lines_stay_dropped() {
        let text = "2024-01-01 a\n  x  $1.00\n  y  12.00 USD\n";
        let (new_text, txns) = edit(text, 0, 0, "z");
        assert!(new_text.contains("\n  y  12.00 USD\n"));
        assert_eq!(txns[0].postings.len(), 1);
    }

    #[test]
    fn test_order_preserved_across_edits() {
        let text = "2024-01-01 a\n  x  $1.00\n  y  $2.00\n  w  $-3.00\n\n2024-01-02 b\n  v  $4.00\n";
        let amounts = |txns: &[Transaction]| -> Vec<Vec<String>> {
            txns.iter()
                .map(|t| t.postings.iter().map(|p| p.amount.clone()).collect())
                .collect()
        };
        let before = parse(text);
        let (_, after) = edit(text, 0, 1, "expenses:misc");
        assert_eq!(amounts(&before), amounts(&after));
        assert_eq!(
            before.iter().map(|t| &t.header).collect::<Vec<_>>(),
            after.iter().map(|t| &t.header).collect::<Vec<_>>()
        );
    }
}
